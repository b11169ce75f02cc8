mod tables;

pub use tables::{OrganismTable, BUILTIN_TABLES};

use crate::error::{OrfError, Result};
use crate::fasta::SequenceRecord;
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Coordinate string (`accession:start-end`) to curated gene name.
#[derive(Debug, Clone, Default)]
pub struct NameTable {
    names: HashMap<String, String>,
}

impl NameTable {
    /// All built-in organism tables merged in [`BUILTIN_TABLES`] order.
    pub fn builtin() -> Self {
        let mut table = Self::default();
        for organism in BUILTIN_TABLES.iter() {
            table.merge(organism.organism, organism.entries.iter().copied());
        }
        table
    }

    /// Add `entries` in iteration order. An existing key is overwritten, so
    /// the last table merged wins.
    pub fn merge<K, V, I>(&mut self, organism: &str, entries: I)
    where
        K: Into<String>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let mut added = 0;
        for (coordinate, name) in entries {
            let (coordinate, name) = (coordinate.into(), name.into());
            if let Some(previous) = self.names.get(&coordinate) {
                debug!(
                    "{}: {} renamed from {:?} to {:?}",
                    organism, coordinate, previous, name
                );
            }
            self.names.insert(coordinate, name);
            added += 1;
        }
        debug!("Merged {} names from {}", added, organism);
    }

    pub fn get(&self, coordinate: &str) -> Option<&str> {
        self.names.get(coordinate).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// What to do with a record whose header has no curated name.
#[derive(clap::ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnmatchedPolicy {
    /// Leave it out of the output.
    #[default]
    Drop,
    /// Keep it under its coordinate header.
    Emit,
    /// Fail the run.
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// Header replaced by the curated name.
    Resolved(SequenceRecord),
    /// No entry for this header; the record is returned untouched.
    Unresolved(SequenceRecord),
}

pub struct NameResolver<'a> {
    table: &'a NameTable,
    policy: UnmatchedPolicy,
}

impl<'a> NameResolver<'a> {
    pub fn new(table: &'a NameTable, policy: UnmatchedPolicy) -> Self {
        Self { table, policy }
    }

    /// Exact-match lookup of the record header.
    pub fn resolve(&self, record: &SequenceRecord) -> Resolution {
        match self.table.get(record.header()) {
            Some(name) => Resolution::Resolved(record.with_header(name)),
            None => Resolution::Unresolved(record.clone()),
        }
    }

    /// Resolve and apply the unmatched policy. `Ok(None)` means the record
    /// was dropped.
    pub fn apply(&self, record: &SequenceRecord) -> Result<Option<SequenceRecord>> {
        match self.resolve(record) {
            Resolution::Resolved(named) => Ok(Some(named)),
            Resolution::Unresolved(record) => match self.policy {
                UnmatchedPolicy::Drop => {
                    debug!("Dropping {}: no curated name", record.header());
                    Ok(None)
                }
                UnmatchedPolicy::Emit => Ok(Some(record)),
                UnmatchedPolicy::Error => Err(OrfError::UnresolvedName {
                    header: record.header().to_string(),
                }),
            },
        }
    }
}
