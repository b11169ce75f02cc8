#[allow(clippy::module_inception)]
mod config;

pub use config::{Config, NameTableConfig};
