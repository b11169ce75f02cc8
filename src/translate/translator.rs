use super::codon::{check_protein, CodonTable, STOP};
use crate::coding::clean_nucleotides;
use crate::error::{OrfError, Result};
use crate::fasta::SequenceRecord;

/// Nucleotide alphabet accepted on input.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Alphabet {
    #[default]
    Dna,
    Rna,
}

impl Alphabet {
    // N is let through so it can be reported as an unknown codon with its
    // position.
    fn accepts(&self, symbol: char) -> bool {
        match self {
            Alphabet::Dna => matches!(symbol, 'A' | 'C' | 'G' | 'T' | 'N'),
            Alphabet::Rna => matches!(symbol, 'A' | 'C' | 'G' | 'U' | 'N'),
        }
    }
}

/// Translates nucleotide sequences codon by codon.
///
/// Translation runs to the end of the fragment; stop codons do not end it.
/// They are kept as `-` by [`translate_with_stops`](Self::translate_with_stops)
/// and dropped by [`translate`](Self::translate). One or two bases left over
/// after the last full codon are ignored.
///
/// Reported positions index the cleaned sequence, after whitespace and `_`
/// placeholders are removed, the same way the trimmer counts them.
pub struct CodonTranslator<'a> {
    table: &'a CodonTable,
    alphabet: Alphabet,
}

impl<'a> CodonTranslator<'a> {
    pub fn new(table: &'a CodonTable, alphabet: Alphabet) -> Self {
        Self { table, alphabet }
    }

    pub fn translate(&self, sequence: &str, frame_offset: usize) -> Result<String> {
        let mut protein = self.translate_with_stops(sequence, frame_offset)?;
        protein.retain(|c| c != STOP);
        Ok(protein)
    }

    pub fn translate_with_stops(&self, sequence: &str, frame_offset: usize) -> Result<String> {
        let clean = self.validate(sequence)?;
        let bases = clean.as_bytes();

        let mut protein = String::with_capacity(bases.len() / 3);
        let mut position = frame_offset;
        while position + 3 <= bases.len() {
            let codon = &clean[position..position + 3];
            let amino = self
                .table
                .get(codon)
                .ok_or_else(|| OrfError::UnknownCodon {
                    position,
                    codon: codon.to_string(),
                })?;
            protein.push(amino);
            position += 3;
        }
        Ok(protein)
    }

    pub fn translate_record(&self, record: &SequenceRecord, frame_offset: usize) -> Result<SequenceRecord> {
        let protein = self
            .translate(record.sequence(), frame_offset)
            .map_err(|e| e.in_record(record.header()))?;
        check_protein(&protein).map_err(|e| e.in_record(record.header()))?;
        Ok(record.with_sequence(&protein))
    }

    /// Clean the sequence, then check its alphabet.
    fn validate(&self, sequence: &str) -> Result<String> {
        let clean = clean_nucleotides(sequence);
        if let Some((position, symbol)) = clean.char_indices().find(|(_, c)| !self.alphabet.accepts(*c)) {
            return Err(OrfError::InvalidSequence { position, symbol });
        }
        Ok(clean)
    }
}
