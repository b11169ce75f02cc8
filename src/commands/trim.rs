use super::{read_records, write_records};
use crate::coding::StartScan;
use crate::names::NameTable;
use crate::pipeline::{Pipeline, PipelineOptions};
use anyhow::Result;
use std::path::Path;

pub fn run(
    input: Option<&Path>,
    scan: Option<StartScan>,
    frame: usize,
    mut options: PipelineOptions,
) -> Result<()> {
    if let Some(scan) = scan {
        options.start_scan = scan;
    }
    options.trim_frame = frame;

    let pipeline = Pipeline::new(NameTable::default(), options);
    let (records, _) = pipeline.trim(read_records(input)?)?;
    write_records(&records)
}
