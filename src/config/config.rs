use crate::coding::StartScan;
use crate::names::{NameTable, UnmatchedPolicy};
use directories::ProjectDirs;
use log::warn;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Extra curated names, merged after the built-in tables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NameTableConfig {
    pub organism: String,
    #[serde(default)]
    pub entries: BTreeMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub unmatched: UnmatchedPolicy,
    #[serde(default)]
    pub start_scan: StartScan,
    #[serde(default)]
    pub skip_invalid: bool,
    #[serde(default)]
    pub name_tables: Vec<NameTableConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            unmatched: UnmatchedPolicy::Drop,
            start_scan: StartScan::Literal,
            skip_invalid: false,
            name_tables: Vec::new(),
        }
    }
}

impl Config {
    /// Location of `config.toml` in the platform config directory.
    pub fn path() -> Option<PathBuf> {
        ProjectDirs::from("org", "orf-tools", "orf-tools")
            .map(|proj_dirs| proj_dirs.config_dir().join("config.toml"))
    }

    pub fn load() -> Self {
        match Self::path() {
            Some(config_path) if config_path.exists() => Self::load_from(&config_path),
            _ => Config::default(),
        }
    }

    /// Read settings from `path`, falling back to defaults when the file
    /// cannot be read or parsed.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str(&content) {
                Ok(config) => config,
                Err(e) => {
                    warn!("Ignoring {}: {}", path.display(), e);
                    Config::default()
                }
            },
            Err(e) => {
                warn!("Cannot read {}: {}", path.display(), e);
                Config::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf, Box<dyn std::error::Error>> {
        let config_path = Self::path().ok_or("Failed to determine project directories")?;
        self.save_to(&config_path)?;
        Ok(config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), Box<dyn std::error::Error>> {
        if let Some(config_dir) = path.parent() {
            fs::create_dir_all(config_dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Built-in names followed by the configured tables, in file order.
    pub fn name_table(&self) -> NameTable {
        let mut table = NameTable::builtin();
        for extra in &self.name_tables {
            table.merge(&extra.organism, extra.entries.clone());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_empty_file_gives_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_parse_policies_and_tables() {
        let text = r#"
unmatched = "emit"
start_scan = "frame"
skip_invalid = true

[[name_tables]]
organism = "MERS-CoV"
entries = { "NC_019843.3:278-21514" = "MERS ORF1ab" }

[[name_tables]]
organism = "overrides"
entries = { "NC_045512.2:266-13483" = "SARS-CoV-2 pp1a" }
"#;
        let config: Config = toml::from_str(text).unwrap();
        assert_eq!(config.unmatched, UnmatchedPolicy::Emit);
        assert_eq!(config.start_scan, StartScan::Frame);
        assert!(config.skip_invalid);

        let names = config.name_table();
        assert_eq!(names.get("NC_019843.3:278-21514"), Some("MERS ORF1ab"));
        assert_eq!(names.get("NC_045512.2:266-13483"), Some("SARS-CoV-2 pp1a"));
        assert_eq!(names.get("MN996532.1:251-13465"), Some("ratG13 ORF1a"));
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let mut config = Config::default();
        config.unmatched = UnmatchedPolicy::Error;
        config.name_tables.push(NameTableConfig {
            organism: "local".to_string(),
            entries: BTreeMap::from([("chr1:0-9".to_string(), "gene A".to_string())]),
        });

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path), config);
    }

    #[test]
    fn test_unparsable_file_falls_back_to_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "unmatched = \"sometimes\"").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }
}
