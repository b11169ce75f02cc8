use super::extract::extract_records;
use super::write_records;
use crate::coding::StartScan;
use crate::names::{NameTable, UnmatchedPolicy};
use crate::pipeline::{Pipeline, PipelineOptions};
use anyhow::Result;
use log::info;
use std::path::Path;

pub fn run(
    intervals_file: &Path,
    reference_file: &Path,
    scan: Option<StartScan>,
    unmatched: Option<UnmatchedPolicy>,
    names: NameTable,
    mut options: PipelineOptions,
    show_progress: bool,
) -> Result<()> {
    if let Some(scan) = scan {
        options.start_scan = scan;
    }
    if let Some(unmatched) = unmatched {
        options.unmatched = unmatched;
    }

    let extracted = extract_records(intervals_file, reference_file, show_progress)?;
    let proteins = Pipeline::new(names, options).run(extracted)?;
    info!("Translated {} named ORFs", proteins.len());
    write_records(&proteins)
}
