use crate::error::{OrfError, Result};
use std::collections::HashMap;

/// Marks a stop codon in translated output.
pub const STOP: char = '-';

/// The standard genetic code over the RNA alphabet.
#[rustfmt::skip]
const RNA_CODONS: [(&str, char); 64] = [
    // U
    ("UUU", 'F'), ("UCU", 'S'), ("UAU", 'Y'), ("UGU", 'C'),
    ("UUC", 'F'), ("UCC", 'S'), ("UAC", 'Y'), ("UGC", 'C'),
    ("UUA", 'L'), ("UCA", 'S'), ("UAA", STOP), ("UGA", STOP),
    ("UUG", 'L'), ("UCG", 'S'), ("UAG", STOP), ("UGG", 'W'),
    // C
    ("CUU", 'L'), ("CCU", 'P'), ("CAU", 'H'), ("CGU", 'R'),
    ("CUC", 'L'), ("CCC", 'P'), ("CAC", 'H'), ("CGC", 'R'),
    ("CUA", 'L'), ("CCA", 'P'), ("CAA", 'Q'), ("CGA", 'R'),
    ("CUG", 'L'), ("CCG", 'P'), ("CAG", 'Q'), ("CGG", 'R'),
    // A
    ("AUU", 'I'), ("ACU", 'T'), ("AAU", 'N'), ("AGU", 'S'),
    ("AUC", 'I'), ("ACC", 'T'), ("AAC", 'N'), ("AGC", 'S'),
    ("AUA", 'I'), ("ACA", 'T'), ("AAA", 'K'), ("AGA", 'R'),
    ("AUG", 'M'), ("ACG", 'T'), ("AAG", 'K'), ("AGG", 'R'),
    // G
    ("GUU", 'V'), ("GCU", 'A'), ("GAU", 'D'), ("GGU", 'G'),
    ("GUC", 'V'), ("GCC", 'A'), ("GAC", 'D'), ("GGC", 'G'),
    ("GUA", 'V'), ("GCA", 'A'), ("GAA", 'E'), ("GGA", 'G'),
    ("GUG", 'V'), ("GCG", 'A'), ("GAG", 'E'), ("GGG", 'G'),
];

const AMINO_ACIDS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Codon to amino-acid lookup answering for both RNA and DNA spellings.
///
/// Built once and shared read-only by every translation.
#[derive(Debug, Clone)]
pub struct CodonTable {
    codons: HashMap<String, char>,
}

impl CodonTable {
    /// The standard code, RNA entries plus their `U`→`T` DNA twins.
    pub fn standard() -> Self {
        let mut codons: HashMap<String, char> = rna_entries().collect();
        codons.extend(dna_entries());
        Self { codons }
    }

    pub fn get(&self, codon: &str) -> Option<char> {
        self.codons.get(codon).copied()
    }

    pub fn len(&self) -> usize {
        self.codons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codons.is_empty()
    }
}

impl Default for CodonTable {
    fn default() -> Self {
        Self::standard()
    }
}

pub fn rna_entries() -> impl Iterator<Item = (String, char)> {
    RNA_CODONS
        .iter()
        .map(|&(codon, amino)| (codon.to_string(), amino))
}

pub fn dna_entries() -> impl Iterator<Item = (String, char)> {
    rna_entries().map(|(codon, amino)| (codon.replace('U', "T"), amino))
}

/// True when every symbol is one of the 20 standard residues or the `_`
/// placeholder.
pub fn is_protein(sequence: &str) -> bool {
    sequence
        .chars()
        .all(|c| c == '_' || AMINO_ACIDS.contains(c))
}

/// Fails on the first symbol [`is_protein`] rejects.
pub fn check_protein(sequence: &str) -> Result<()> {
    match sequence
        .char_indices()
        .find(|&(_, c)| c != '_' && !AMINO_ACIDS.contains(c))
    {
        Some((position, symbol)) => Err(OrfError::InvalidSequence { position, symbol }),
        None => Ok(()),
    }
}
