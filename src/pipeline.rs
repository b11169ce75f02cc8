//! Record-by-record driver shared by the trim, resolve and translate stages.
//!
//! Each stage maps records in input order. Structural failures always abort.
//! Content failures on one record (bad symbols, no start codon, unknown
//! codon) abort too unless [`RecordErrorPolicy::Skip`] is selected, in which
//! case the record is reported and left out.

use crate::coding::{CodingRegionTrimmer, StartScan};
use crate::error::Result;
use crate::fasta::SequenceRecord;
use crate::names::{NameResolver, NameTable, UnmatchedPolicy};
use crate::translate::{Alphabet, CodonTable, CodonTranslator};
use log::{info, warn};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RecordErrorPolicy {
    #[default]
    Abort,
    Skip,
}

impl RecordErrorPolicy {
    pub fn from_skip_flag(skip_invalid: bool) -> Self {
        if skip_invalid {
            RecordErrorPolicy::Skip
        } else {
            RecordErrorPolicy::Abort
        }
    }
}

/// Counts for one stage over one input.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StageReport {
    pub read: usize,
    pub written: usize,
    pub dropped: usize,
    pub skipped: usize,
}

impl StageReport {
    fn log(&self, stage: &str) {
        info!(
            "{}: {} records in, {} out, {} dropped, {} skipped",
            stage, self.read, self.written, self.dropped, self.skipped
        );
        if self.skipped > 0 {
            warn!("{}: skipped {} invalid records", stage, self.skipped);
        }
    }
}

/// Apply `stage` to every record. `Ok(None)` from the stage drops the record.
pub fn run_stage<I, F>(
    name: &str,
    records: I,
    policy: RecordErrorPolicy,
    mut stage: F,
) -> Result<(Vec<SequenceRecord>, StageReport)>
where
    I: IntoIterator<Item = Result<SequenceRecord>>,
    F: FnMut(&SequenceRecord) -> Result<Option<SequenceRecord>>,
{
    let mut report = StageReport::default();
    let mut output = Vec::new();

    for record in records {
        let record = record?;
        report.read += 1;
        match stage(&record) {
            Ok(Some(out)) => output.push(out),
            Ok(None) => report.dropped += 1,
            Err(e) if policy == RecordErrorPolicy::Skip && e.is_record_content() => {
                warn!("{}: skipping {} [{}]", name, e, e.kind());
                report.skipped += 1;
            }
            Err(e) => return Err(e),
        }
    }

    report.written = output.len();
    report.log(name);
    Ok((output, report))
}

#[derive(Clone, Copy, Debug, Default)]
pub struct PipelineOptions {
    pub start_scan: StartScan,
    pub trim_frame: usize,
    pub translate_frame: usize,
    pub alphabet: Alphabet,
    pub unmatched: UnmatchedPolicy,
    pub on_record_error: RecordErrorPolicy,
}

/// The trim, resolve and translate stages with their shared lookup tables.
pub struct Pipeline {
    names: NameTable,
    codons: CodonTable,
    options: PipelineOptions,
}

impl Pipeline {
    pub fn new(names: NameTable, options: PipelineOptions) -> Self {
        Self {
            names,
            codons: CodonTable::standard(),
            options,
        }
    }

    pub fn trim<I>(&self, records: I) -> Result<(Vec<SequenceRecord>, StageReport)>
    where
        I: IntoIterator<Item = Result<SequenceRecord>>,
    {
        let trimmer = CodingRegionTrimmer::new(self.options.start_scan, self.options.trim_frame);
        run_stage("trim", records, self.options.on_record_error, |record| {
            trimmer.trim_record(record).map(Some)
        })
    }

    pub fn resolve<I>(&self, records: I) -> Result<(Vec<SequenceRecord>, StageReport)>
    where
        I: IntoIterator<Item = Result<SequenceRecord>>,
    {
        let resolver = NameResolver::new(&self.names, self.options.unmatched);
        run_stage("resolve", records, self.options.on_record_error, |record| {
            resolver.apply(record)
        })
    }

    pub fn translate<I>(&self, records: I) -> Result<(Vec<SequenceRecord>, StageReport)>
    where
        I: IntoIterator<Item = Result<SequenceRecord>>,
    {
        let translator = CodonTranslator::new(&self.codons, self.options.alphabet);
        let frame = self.options.translate_frame;
        run_stage("translate", records, self.options.on_record_error, |record| {
            translator.translate_record(record, frame).map(Some)
        })
    }

    /// Trim, name and translate extracted ORF records.
    pub fn run(&self, extracted: Vec<SequenceRecord>) -> Result<Vec<SequenceRecord>> {
        let (coding, _) = self.trim(extracted.into_iter().map(Ok))?;
        let (named, _) = self.resolve(coding.into_iter().map(Ok))?;
        let (proteins, _) = self.translate(named.into_iter().map(Ok))?;
        Ok(proteins)
    }
}
