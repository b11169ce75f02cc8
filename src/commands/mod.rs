pub mod extract;
pub mod init_config;
pub mod pipeline;
pub mod resolve;
pub mod translate;
pub mod trim;

use crate::config::Config;
use crate::fasta::{FastaWriter, SequenceRecord, SequenceRecordReader};
use crate::pipeline::{PipelineOptions, RecordErrorPolicy};
use anyhow::{Context, Result};
use std::io::{self, BufRead, BufWriter};
use std::path::Path;

/// Stage options from the configuration file, with `--skip-invalid` able to
/// switch skipping on.
pub fn base_options(config: &Config, skip_invalid: bool) -> PipelineOptions {
    PipelineOptions {
        start_scan: config.start_scan,
        unmatched: config.unmatched,
        on_record_error: RecordErrorPolicy::from_skip_flag(skip_invalid || config.skip_invalid),
        ..Default::default()
    }
}

fn describe(input: Option<&Path>) -> String {
    match input {
        Some(path) => path.display().to_string(),
        None => "standard input".to_string(),
    }
}

pub(crate) fn read_records(input: Option<&Path>) -> Result<SequenceRecordReader<Box<dyn BufRead>>> {
    SequenceRecordReader::from_path(input)
        .with_context(|| format!("Failed to open {}", describe(input)))
}

/// Print all records to standard output in one go.
pub(crate) fn write_records(records: &[SequenceRecord]) -> Result<()> {
    let stdout = io::stdout();
    let mut writer = FastaWriter::new(BufWriter::new(stdout.lock()));
    writer
        .write_all(records)
        .context("Failed to write to standard output")
}
