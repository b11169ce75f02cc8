use super::{read_records, write_records};
use crate::names::{NameTable, UnmatchedPolicy};
use crate::pipeline::{Pipeline, PipelineOptions};
use anyhow::Result;
use std::path::Path;

pub fn run(
    input: Option<&Path>,
    unmatched: Option<UnmatchedPolicy>,
    names: NameTable,
    mut options: PipelineOptions,
) -> Result<()> {
    if let Some(unmatched) = unmatched {
        options.unmatched = unmatched;
    }

    let pipeline = Pipeline::new(names, options);
    let (records, _) = pipeline.resolve(read_records(input)?)?;
    write_records(&records)
}
