pub mod cli;
pub mod coding;
pub mod commands;
pub mod config;
pub mod error;
pub mod fasta;
pub mod interval;
pub mod names;
pub mod pipeline;
pub mod translate;
pub mod utils;

pub use error::{OrfError, Result};
