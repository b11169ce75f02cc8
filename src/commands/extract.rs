use super::write_records;
use crate::fasta::SequenceRecord;
use crate::interval::{open_reference, read_intervals, IntervalSequenceExtractor};
use crate::utils::input::open_input;
use crate::utils::progress_bar_builder::ProgressBarBuilder;
use anyhow::{Context, Result};
use log::info;
use std::path::Path;

pub fn extract_records(
    intervals_file: &Path,
    reference_file: &Path,
    show_progress: bool,
) -> Result<Vec<SequenceRecord>> {
    let table = open_input(Some(intervals_file))
        .with_context(|| format!("Failed to open {}", intervals_file.display()))?;
    let intervals = read_intervals(table)
        .with_context(|| format!("Failed to read intervals from {}", intervals_file.display()))?;
    info!("Read {} intervals from {}", intervals.len(), intervals_file.display());

    let source = open_reference(reference_file)
        .with_context(|| format!("Failed to open reference {}", reference_file.display()))?;

    let progress = ProgressBarBuilder::new("Extracting ORFs")
        .with_template("{spinner:.green} [{elapsed_precise}] {msg} [{wide_bar}] {pos}/{len}")
        .with_length(intervals.len() as u64)
        .hidden_if(!show_progress)
        .build()?;

    let records = IntervalSequenceExtractor::new(source).extract_with_progress(&intervals, &progress)?;
    progress.finish_and_clear();
    info!("Extracted {} sequences", records.len());
    Ok(records)
}

pub fn run(intervals_file: &Path, reference_file: &Path, show_progress: bool) -> Result<()> {
    let records = extract_records(intervals_file, reference_file, show_progress)?;
    write_records(&records)
}
