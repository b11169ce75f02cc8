use super::reference::IntervalSource;
use super::GenomicInterval;
use crate::error::{OrfError, Result};
use crate::fasta::SequenceRecord;
use indicatif::ProgressBar;
use log::{debug, warn};

/// Turns ORF coordinates into nucleotide records, one per interval and in
/// interval order. Base slicing is delegated to an [`IntervalSource`].
pub struct IntervalSequenceExtractor<S: IntervalSource> {
    source: S,
}

impl<S: IntervalSource> IntervalSequenceExtractor<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn extract(&mut self, intervals: &[GenomicInterval]) -> Result<Vec<SequenceRecord>> {
        self.extract_with_progress(intervals, &ProgressBar::hidden())
    }

    /// Like [`extract`](Self::extract), ticking `progress` once per interval.
    /// The first failure aborts the batch.
    pub fn extract_with_progress(
        &mut self,
        intervals: &[GenomicInterval],
        progress: &ProgressBar,
    ) -> Result<Vec<SequenceRecord>> {
        progress.set_length(intervals.len() as u64);
        let mut records = Vec::with_capacity(intervals.len());
        for interval in intervals {
            progress.set_message(format!("Extracting {}", interval.coordinate()));
            records.push(self.extract_one(interval)?);
            progress.inc(1);
        }
        Ok(records)
    }

    pub fn extract_one(&mut self, interval: &GenomicInterval) -> Result<SequenceRecord> {
        let fasta = self.source.fetch_fasta(interval)?;
        let tokens: Vec<&str> = fasta.split_whitespace().collect();
        let coordinate = interval.coordinate();

        if tokens.len() != 2 || !tokens[0].starts_with('>') {
            return Err(OrfError::ExtractionMismatch {
                interval: coordinate,
                tokens: tokens.len(),
            });
        }

        let returned = &tokens[0][1..];
        if returned != coordinate {
            warn!("Reference returned header {:?} for {}", returned, coordinate);
        }
        debug!("{}: {} bp", coordinate, tokens[1].len());

        Ok(SequenceRecord::new(coordinate, tokens[1]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interval::InMemoryReference;

    /// Hands back canned FASTA text regardless of the interval asked for.
    struct CannedSource(String);

    impl IntervalSource for CannedSource {
        fn fetch_fasta(&mut self, _interval: &GenomicInterval) -> Result<String> {
            Ok(self.0.clone())
        }
    }

    fn interval(line: &str) -> GenomicInterval {
        GenomicInterval::parse_line(1, line).unwrap()
    }

    #[test]
    fn test_extracts_in_interval_order() {
        let mut reference = InMemoryReference::default();
        reference.insert("NC_045512.2", "ccatgaaatagatgccctga");
        let intervals = vec![
            interval("NC_045512.2 11 20 9 ORF# +3"),
            interval("NC_045512.2 2 11 9 ORF# +3"),
        ];

        let records = IntervalSequenceExtractor::new(reference)
            .extract(&intervals)
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].header(), "NC_045512.2:11-20");
        assert_eq!(records[0].sequence(), "ATGCCCTGA");
        assert_eq!(records[1].header(), "NC_045512.2:2-11");
        assert_eq!(records[1].sequence(), "ATGAAATAG");
    }

    #[test]
    fn test_wrong_token_count_is_mismatch() {
        let bad_outputs = [">chr1:0-3\n", ">chr1:0-3\nACG\n>chr1:3-6\nTTT\n", ">chr1:0-3\nAC G\n"];
        for output in bad_outputs {
            let mut extractor = IntervalSequenceExtractor::new(CannedSource(output.to_string()));
            let err = extractor.extract_one(&interval("chr1 0 3 3 a +1")).unwrap_err();
            assert_eq!(err.kind(), "ExtractionMismatchError", "{output:?}");
        }
    }

    #[test]
    fn test_missing_header_marker_is_mismatch() {
        let mut extractor = IntervalSequenceExtractor::new(CannedSource("chr1:0-3 ACG".to_string()));
        let err = extractor.extract_one(&interval("chr1 0 3 3 a +1")).unwrap_err();
        match err {
            OrfError::ExtractionMismatch { interval, tokens } => {
                assert_eq!(interval, "chr1:0-3");
                assert_eq!(tokens, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_batch_aborts_on_first_failure() {
        let mut reference = InMemoryReference::default();
        reference.insert("chr1", "ACGTACGT");
        let intervals = vec![interval("chr1 0 4 4 a +1"), interval("chr1 4 40 36 b +1")];

        let err = IntervalSequenceExtractor::new(reference)
            .extract(&intervals)
            .unwrap_err();
        assert_eq!(err.kind(), "ReferenceError");
    }
}
