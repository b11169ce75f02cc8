use super::{read_records, write_records};
use crate::names::NameTable;
use crate::pipeline::{Pipeline, PipelineOptions};
use crate::translate::Alphabet;
use anyhow::Result;
use std::path::Path;

pub fn run(input: Option<&Path>, frame: usize, rna: bool, mut options: PipelineOptions) -> Result<()> {
    options.translate_frame = frame;
    options.alphabet = if rna { Alphabet::Rna } else { Alphabet::Dna };

    let pipeline = Pipeline::new(NameTable::default(), options);
    let (records, _) = pipeline.translate(read_records(input)?)?;
    write_records(&records)
}
