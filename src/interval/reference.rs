use super::GenomicInterval;
use crate::error::{OrfError, Result};
use crate::fasta::SequenceRecordReader;
use bio::io::fasta::IndexedReader;
use log::{debug, info};
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

/// Supplies the bases of one interval as FASTA text.
///
/// Implementations return a single `>{contig}:{start}-{end}` header line
/// followed by the bases of `[start, end)` on one line.
pub trait IntervalSource {
    fn fetch_fasta(&mut self, interval: &GenomicInterval) -> Result<String>;
}

impl<T: IntervalSource + ?Sized> IntervalSource for Box<T> {
    fn fetch_fasta(&mut self, interval: &GenomicInterval) -> Result<String> {
        (**self).fetch_fasta(interval)
    }
}

fn format_slice(interval: &GenomicInterval, bases: &str) -> String {
    format!(">{}\n{}\n", interval.coordinate(), bases)
}

fn out_of_bounds(interval: &GenomicInterval, contig_len: u64) -> OrfError {
    OrfError::Reference(format!(
        "{} extends past the end of {} ({} bp)",
        interval.coordinate(),
        interval.contig_id,
        contig_len
    ))
}

/// Reference genome read through its `.fai` index.
pub struct IndexedReference {
    reader: IndexedReader<File>,
    lengths: HashMap<String, u64>,
}

impl IndexedReference {
    pub fn from_file(path: &Path) -> Result<Self> {
        let reader = IndexedReader::from_file(&path)
            .map_err(|e| OrfError::Reference(format!("{}: {}", path.display(), e)))?;
        let lengths = reader
            .index
            .sequences()
            .into_iter()
            .map(|seq| (seq.name, seq.len))
            .collect();
        Ok(Self { reader, lengths })
    }
}

impl IntervalSource for IndexedReference {
    fn fetch_fasta(&mut self, interval: &GenomicInterval) -> Result<String> {
        let contig_len = *self.lengths.get(&interval.contig_id).ok_or_else(|| {
            OrfError::Reference(format!("unknown contig {:?}", interval.contig_id))
        })?;
        if interval.end > contig_len {
            return Err(out_of_bounds(interval, contig_len));
        }

        let mut bases = Vec::with_capacity(interval.length as usize);
        self.reader
            .fetch(&interval.contig_id, interval.start, interval.end)
            .map_err(|e| OrfError::Reference(format!("{}: {}", interval.coordinate(), e)))?;
        self.reader.read(&mut bases)?;

        Ok(format_slice(interval, &String::from_utf8_lossy(&bases)))
    }
}

/// Whole reference held in memory, keyed by the first word of each header.
#[derive(Debug, Default)]
pub struct InMemoryReference {
    contigs: HashMap<String, String>,
}

impl InMemoryReference {
    pub fn from_path(path: &Path) -> Result<Self> {
        let mut contigs = HashMap::new();
        for record in SequenceRecordReader::from_path(Some(path))? {
            let (header, sequence) = record?.into_parts();
            let id = header.split_whitespace().next().unwrap_or_default().to_string();
            contigs.insert(id, sequence);
        }
        Ok(Self { contigs })
    }

    pub fn insert(&mut self, contig_id: impl Into<String>, sequence: &str) {
        self.contigs
            .insert(contig_id.into(), sequence.to_ascii_uppercase());
    }

    pub fn len(&self) -> usize {
        self.contigs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contigs.is_empty()
    }
}

impl IntervalSource for InMemoryReference {
    fn fetch_fasta(&mut self, interval: &GenomicInterval) -> Result<String> {
        let sequence = self.contigs.get(&interval.contig_id).ok_or_else(|| {
            OrfError::Reference(format!("unknown contig {:?}", interval.contig_id))
        })?;
        let bases = sequence
            .get(interval.start as usize..interval.end as usize)
            .ok_or_else(|| out_of_bounds(interval, sequence.len() as u64))?;
        Ok(format_slice(interval, bases))
    }
}

fn index_path(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_owned();
    name.push(".fai");
    PathBuf::from(name)
}

/// Use the faidx index next to `path` when there is one, otherwise load the
/// whole reference into memory.
pub fn open_reference(path: &Path) -> Result<Box<dyn IntervalSource>> {
    if index_path(path).exists() {
        info!("Using indexed reference {}", path.display());
        return Ok(Box::new(IndexedReference::from_file(path)?));
    }
    let reference = InMemoryReference::from_path(path)?;
    debug!(
        "Loaded {} contigs from {} into memory",
        reference.len(),
        path.display()
    );
    Ok(Box::new(reference))
}
