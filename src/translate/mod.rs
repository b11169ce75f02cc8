mod codon;
mod translator;

pub use codon::{check_protein, dna_entries, is_protein, rna_entries, CodonTable, STOP};
pub use translator::{Alphabet, CodonTranslator};
