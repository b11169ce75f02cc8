use crate::error::{OrfError, Result};
use crate::fasta::SequenceRecord;
use serde::{Deserialize, Serialize};

pub const START_CODON: &str = "ATG";

/// How the start codon is located.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StartScan {
    /// First `ATG` substring anywhere, whatever its reading frame.
    #[default]
    #[value(name = "literal")]
    Literal,
    /// First `ATG` on a codon boundary of the configured frame.
    #[value(name = "frame")]
    Frame,
}

/// Cuts a nucleotide sequence down to its putative coding region: from the
/// start codon to the end of the fragment. Stop codons are left in place.
#[derive(Debug, Clone, Copy, Default)]
pub struct CodingRegionTrimmer {
    scan: StartScan,
    frame_offset: usize,
}

impl CodingRegionTrimmer {
    pub fn new(scan: StartScan, frame_offset: usize) -> Self {
        Self { scan, frame_offset }
    }

    pub fn trim(&self, sequence: &str) -> Result<String> {
        let clean = clean_nucleotides(sequence);
        validate_dna(&clean)?;

        let start = match self.scan {
            StartScan::Literal => clean.find(START_CODON),
            StartScan::Frame => (self.frame_offset..clean.len().saturating_sub(2))
                .step_by(3)
                .find(|&pos| &clean[pos..pos + 3] == START_CODON),
        }
        .ok_or(OrfError::NoStartCodon)?;

        Ok(clean[start..].to_string())
    }

    pub fn trim_record(&self, record: &SequenceRecord) -> Result<SequenceRecord> {
        let coding = self
            .trim(record.sequence())
            .map_err(|e| e.in_record(record.header()))?;
        Ok(record.with_sequence(&coding))
    }
}

/// Uppercase, drop whitespace and `_` placeholders.
pub fn clean_nucleotides(sequence: &str) -> String {
    sequence
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_')
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

fn validate_dna(clean: &str) -> Result<()> {
    match clean
        .char_indices()
        .find(|(_, c)| !matches!(*c, 'A' | 'C' | 'G' | 'T'))
    {
        Some((position, symbol)) => Err(OrfError::InvalidSequence { position, symbol }),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal() -> CodingRegionTrimmer {
        CodingRegionTrimmer::default()
    }

    #[test]
    fn test_sequence_already_starting_with_atg() {
        assert_eq!(literal().trim("atgaaatag").unwrap(), "ATGAAATAG");
    }

    #[test]
    fn test_first_atg_anywhere() {
        assert_eq!(literal().trim("ccATGaaaTAG").unwrap(), "ATGAAATAG");
    }

    #[test]
    fn test_literal_scan_ignores_frame() {
        // ATG at index 1 and a frame-0 ATG at index 6
        assert_eq!(literal().trim("CATGCCATGTAA").unwrap(), "ATGCCATGTAA");
    }

    #[test]
    fn test_frame_scan_respects_codon_boundaries() {
        let frame0 = CodingRegionTrimmer::new(StartScan::Frame, 0);
        assert_eq!(frame0.trim("CATGCCATGTAA").unwrap(), "ATGTAA");

        let frame1 = CodingRegionTrimmer::new(StartScan::Frame, 1);
        assert_eq!(frame1.trim("CATGCCATGTAA").unwrap(), "ATGCCATGTAA");

        let err = frame0.trim("ccATGaaaTAG").unwrap_err();
        assert!(matches!(err, OrfError::NoStartCodon));
    }

    #[test]
    fn test_placeholders_and_whitespace_are_removed() {
        assert_eq!(literal().trim(" at_g\naa_a tag\r\n").unwrap(), "ATGAAATAG");
    }

    #[test]
    fn test_trimming_is_idempotent() {
        for trimmer in [literal(), CodingRegionTrimmer::new(StartScan::Frame, 0)] {
            let once = trimmer.trim("GGGATGCCCTGA").unwrap();
            assert_eq!(trimmer.trim(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_no_start_codon() {
        for seq in ["CCCTTTGGG", "", "AT"] {
            let err = literal().trim(seq).unwrap_err();
            assert_eq!(err.kind(), "NoStartCodonError", "{seq:?}");
        }
    }

    #[test]
    fn test_rejects_ambiguity_codes_and_rna() {
        let err = literal().trim("ATGNNNTAG").unwrap_err();
        match err {
            OrfError::InvalidSequence { position, symbol } => {
                assert_eq!(position, 3);
                assert_eq!(symbol, 'N');
            }
            other => panic!("unexpected error: {other}"),
        }

        let err = literal().trim("AUGAAAUAG").unwrap_err();
        assert_eq!(err.kind(), "InvalidSequenceError");
    }

    #[test]
    fn test_trim_record_names_the_record() {
        let record = SequenceRecord::new("MN996532.1:251-13465", "CCCCCC");
        let err = literal().trim_record(&record).unwrap_err();
        assert!(err.to_string().contains("MN996532.1:251-13465"));
        assert_eq!(err.kind(), "NoStartCodonError");

        let record = SequenceRecord::new("MN996532.1:251-13465", "ccatgtaa");
        let trimmed = literal().trim_record(&record).unwrap();
        assert_eq!(trimmed.header(), "MN996532.1:251-13465");
        assert_eq!(trimmed.sequence(), "ATGTAA");
    }
}
