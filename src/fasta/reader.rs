//! Streaming FASTA reader.
//!
//! Lines before the first `>` header are ignored. Every header opens a new
//! record; all following non-header lines are joined, stripped of whitespace
//! and uppercased until the next header or end of input. A header directly
//! followed by another header produces a record with an empty sequence.

use super::record::{canonicalize, SequenceRecord};
use crate::error::{OrfError, Result};
use crate::utils::input::open_input;
use std::io::BufRead;
use std::path::Path;

pub struct SequenceRecordReader<R: BufRead> {
    reader: R,
    line_buffer: String,
    line_number: usize,
    /// Header of the record currently being assembled
    current_header: Option<String>,
    finished: bool,
}

impl SequenceRecordReader<Box<dyn BufRead>> {
    /// Open a named file, or standard input when `path` is `None` or `-`.
    /// Compressed files are decompressed transparently.
    pub fn from_path(path: Option<&Path>) -> Result<Self> {
        Ok(Self::new(open_input(path)?))
    }
}

impl<R: BufRead> SequenceRecordReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line_buffer: String::with_capacity(256),
            line_number: 0,
            current_header: None,
            finished: false,
        }
    }

    /// Returns false at end of input.
    fn read_line(&mut self) -> Result<bool> {
        self.line_buffer.clear();
        let n = self.reader.read_line(&mut self.line_buffer)?;
        if n > 0 {
            self.line_number += 1;
        }
        Ok(n > 0)
    }

    fn header_text(line: &str) -> String {
        line[1..].trim_end().to_string()
    }

    fn skip_to_first_header(&mut self) -> Result<()> {
        loop {
            if !self.read_line()? {
                return Err(OrfError::MalformedInput(format!(
                    "reached end of input after {} lines without a '>' header",
                    self.line_number
                )));
            }
            if self.line_buffer.starts_with('>') {
                self.current_header = Some(Self::header_text(&self.line_buffer));
                return Ok(());
            }
        }
    }

    fn read_record(&mut self) -> Result<Option<SequenceRecord>> {
        if self.finished {
            return Ok(None);
        }
        if self.current_header.is_none() {
            if let Err(e) = self.skip_to_first_header() {
                self.finished = true;
                return Err(e);
            }
        }

        let mut sequence = String::new();
        loop {
            if !self.read_line()? {
                self.finished = true;
                let header = self.current_header.take().unwrap_or_default();
                return Ok(Some(SequenceRecord::new(header, &sequence)));
            }
            if self.line_buffer.starts_with('>') {
                let next = Self::header_text(&self.line_buffer);
                let header = self.current_header.replace(next).unwrap_or_default();
                return Ok(Some(SequenceRecord::new(header, &sequence)));
            }
            sequence.push_str(&canonicalize(&self.line_buffer));
        }
    }
}

impl<R: BufRead> Iterator for SequenceRecordReader<R> {
    type Item = Result<SequenceRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.read_record() {
            Ok(Some(record)) => Some(Ok(record)),
            Ok(None) => None,
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn read_all(text: &str) -> Result<Vec<SequenceRecord>> {
        SequenceRecordReader::new(Cursor::new(text.as_bytes().to_vec())).collect()
    }

    #[test]
    fn test_single_record_without_trailing_newline() {
        let records = read_all(">seq1\nacgt").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].header(), "seq1");
        assert_eq!(records[0].sequence(), "ACGT");
    }

    #[test]
    fn test_multiline_sequence_is_joined_and_uppercased() {
        let records = read_all(">NC_045512.2:266-13483  \natg aaa\nTAG\n>second\nCC\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), "NC_045512.2:266-13483");
        assert_eq!(records[0].sequence(), "ATGAAATAG");
        assert_eq!(records[1].header(), "second");
        assert_eq!(records[1].sequence(), "CC");
    }

    #[test]
    fn test_header_keeps_description() {
        let records = read_all(">seq1 some description\nA\n").unwrap();
        assert_eq!(records[0].header(), "seq1 some description");
    }

    #[test]
    fn test_leading_lines_are_skipped() {
        let records = read_all("; comment\n\nnoise\n>seq1\nGATTACA\n").unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].sequence(), "GATTACA");
    }

    #[test]
    fn test_empty_sequence_between_headers() {
        let records = read_all(">empty\n>full\nACGT\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), "empty");
        assert_eq!(records[0].sequence(), "");
        assert_eq!(records[1].sequence(), "ACGT");
    }

    #[test]
    fn test_trailing_header_yields_empty_record() {
        let records = read_all(">a\nAC\n>b\n").unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1].header(), "b");
        assert!(records[1].sequence().is_empty());
    }

    #[test]
    fn test_missing_header_is_malformed_input() {
        let err = read_all("ACGT\nACGT\n").unwrap_err();
        assert_eq!(err.kind(), "MalformedInputError");

        let err = read_all("").unwrap_err();
        assert_eq!(err.kind(), "MalformedInputError");
    }

    #[test]
    fn test_iterator_stops_after_error() {
        let mut reader = SequenceRecordReader::new(Cursor::new(b"no header".to_vec()));
        assert!(reader.next().unwrap().is_err());
        assert!(reader.next().is_none());
    }

    #[test]
    fn test_reemitting_reproduces_canonical_text() {
        let text = ">seq1\nac gt\nNNac\n>seq2\nuuAA\n";
        let records = read_all(text).unwrap();
        let reemitted: String = records
            .iter()
            .map(|r| format!(">{}\n{}\n", r.header(), r.sequence()))
            .collect();
        assert_eq!(reemitted, ">seq1\nACGTNNAC\n>seq2\nUUAA\n");
    }
}
