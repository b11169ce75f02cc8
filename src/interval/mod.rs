mod extractor;
mod reference;

pub use extractor::IntervalSequenceExtractor;
pub use reference::{open_reference, InMemoryReference, IndexedReference, IntervalSource};

use crate::error::{OrfError, Result};
use std::fmt;
use std::io::BufRead;

/// Columns of one ORF coordinate line: contig, start, end, length, label, frame.
const REQUIRED_FIELDS: usize = 6;

/// One row of the ORF coordinate table.
///
/// `start` and `end` keep the values written in the table; bases are taken
/// from the half-open range `[start, end)` of the contig.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenomicInterval {
    pub contig_id: String,
    pub start: u64,
    pub end: u64,
    pub length: u64,
    pub label: String,
    pub strand: String,
}

impl GenomicInterval {
    /// Parse a whitespace-delimited coordinate line. `line_number` is 1-based
    /// and only used for error reporting.
    pub fn parse_line(line_number: usize, line: &str) -> Result<Self> {
        let malformed = |reason: String| OrfError::MalformedInterval {
            line: line_number,
            text: line.trim_end().to_string(),
            reason,
        };

        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < REQUIRED_FIELDS {
            return Err(malformed(format!(
                "expected {} fields, found {}",
                REQUIRED_FIELDS,
                fields.len()
            )));
        }

        let parse = |name: &str, value: &str| {
            value
                .parse::<u64>()
                .map_err(|_| malformed(format!("{} {:?} is not a non-negative integer", name, value)))
        };
        let start = parse("start", fields[1])?;
        let end = parse("end", fields[2])?;
        let length = parse("length", fields[3])?;

        if end <= start {
            return Err(malformed(format!("end {} is not after start {}", end, start)));
        }
        if length != end - start {
            return Err(malformed(format!(
                "length {} does not match end - start = {}",
                length,
                end - start
            )));
        }

        Ok(Self {
            contig_id: fields[0].to_string(),
            start,
            end,
            length,
            label: fields[4].to_string(),
            strand: fields[5].to_string(),
        })
    }

    /// `contig:start-end`, the key the name tables are indexed by.
    pub fn coordinate(&self) -> String {
        format!("{}:{}-{}", self.contig_id, self.start, self.end)
    }
}

impl fmt::Display for GenomicInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} {})", self.coordinate(), self.label, self.strand)
    }
}

/// Read every interval of a coordinate table, in file order.
///
/// Blank lines and `#` comments are ignored. The first malformed line aborts
/// the whole table.
pub fn read_intervals<R: BufRead>(reader: R) -> Result<Vec<GenomicInterval>> {
    let mut intervals = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        intervals.push(GenomicInterval::parse_line(index + 1, &line)?);
    }
    Ok(intervals)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_coordinate_line() {
        let interval = GenomicInterval::parse_line(1, "NC_004718.3   265 13413 13148 ORF# +1").unwrap();
        assert_eq!(interval.contig_id, "NC_004718.3");
        assert_eq!(interval.start, 265);
        assert_eq!(interval.end, 13413);
        assert_eq!(interval.length, 13148);
        assert_eq!(interval.label, "ORF#");
        assert_eq!(interval.strand, "+1");
        assert_eq!(interval.coordinate(), "NC_004718.3:265-13413");
    }

    #[test]
    fn test_extra_columns_are_ignored() {
        let interval = GenomicInterval::parse_line(1, "chr1\t0\t9\t9\torf1\t+1\textra").unwrap();
        assert_eq!(interval.end, 9);
    }

    #[test]
    fn test_too_few_fields() {
        let err = GenomicInterval::parse_line(7, "chr1 0 9 9 orf1").unwrap_err();
        match err {
            OrfError::MalformedInterval { line, text, .. } => {
                assert_eq!(line, 7);
                assert_eq!(text, "chr1 0 9 9 orf1");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_non_integer_coordinates() {
        for line in ["chr1 zero 9 9 orf1 +1", "chr1 0 9.5 9 orf1 +1", "chr1 -3 9 12 orf1 +1"] {
            let err = GenomicInterval::parse_line(1, line).unwrap_err();
            assert_eq!(err.kind(), "MalformedIntervalError", "{line}");
        }
    }

    #[test]
    fn test_inconsistent_length_and_empty_range() {
        let err = GenomicInterval::parse_line(1, "chr1 0 9 10 orf1 +1").unwrap_err();
        assert!(err.to_string().contains("does not match"));

        let err = GenomicInterval::parse_line(1, "chr1 9 9 0 orf1 +1").unwrap_err();
        assert!(err.to_string().contains("not after start"));
    }

    #[test]
    fn test_read_intervals_fails_fast_with_line_number() {
        let table = "# contig start end length label frame\n\nchr1 0 9 9 a +1\nchr1 3\nchr1 0 3 3 b +2\n";
        let err = read_intervals(Cursor::new(table)).unwrap_err();
        match err {
            OrfError::MalformedInterval { line, .. } => assert_eq!(line, 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_read_intervals_preserves_order() {
        let table = "chr1 6 9 3 b +1\nchr1 0 3 3 a +1\n";
        let intervals = read_intervals(Cursor::new(table)).unwrap();
        let labels: Vec<_> = intervals.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["b", "a"]);
    }
}
