use crate::coding::StartScan;
use crate::names::UnmatchedPolicy;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Increase log output (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Skip records with invalid content instead of aborting
    #[arg(long, global = true)]
    pub skip_invalid: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Extract the nucleotide sequence of every ORF interval
    Extract {
        /// Whitespace-delimited ORF table: contig, start, end, length, label, frame
        intervals: PathBuf,
        /// Reference genome FASTA (indexed through <reference>.fai when present)
        reference: PathBuf,
    },

    /// Cut each sequence down to its putative coding region
    Trim {
        /// Nucleotide FASTA (standard input when omitted)
        input: Option<PathBuf>,
        /// How to locate the start codon [default: from config, else literal]
        #[arg(long, value_enum)]
        scan: Option<StartScan>,
        /// Reading frame used by the frame scan
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..3))]
        frame: u8,
    },

    /// Replace ORF coordinates with curated gene names
    Resolve {
        /// FASTA with `accession:start-end` headers (standard input when omitted)
        input: Option<PathBuf>,
        /// What to do with unlisted coordinates [default: from config, else drop]
        #[arg(long, value_enum)]
        unmatched: Option<UnmatchedPolicy>,
    },

    /// Translate coding sequences into amino acids
    Translate {
        /// Nucleotide FASTA (standard input when omitted)
        input: Option<PathBuf>,
        /// Reading frame to translate
        #[arg(long, default_value = "0", value_parser = clap::value_parser!(u8).range(0..3))]
        frame: u8,
        /// Accept RNA (U) instead of DNA (T)
        #[arg(long)]
        rna: bool,
    },

    /// Extract, trim, name and translate in one go
    Run {
        /// Whitespace-delimited ORF table: contig, start, end, length, label, frame
        intervals: PathBuf,
        /// Reference genome FASTA
        reference: PathBuf,
        #[arg(long, value_enum)]
        scan: Option<StartScan>,
        #[arg(long, value_enum)]
        unmatched: Option<UnmatchedPolicy>,
    },

    /// Write the default configuration file
    InitConfig {
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}
