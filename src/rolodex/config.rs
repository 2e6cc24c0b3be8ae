use crate::error::{Result, RolodexError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_PAGE_SIZE: usize = 5;
const DEFAULT_DATA_FILE: &str = "contacts.jsonl";

/// Configuration for rolodex, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RolodexConfig {
    /// Contacts per page for `show`
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Backup file name, relative to the data directory
    #[serde(default = "default_data_file")]
    pub data_file: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_data_file() -> String {
    DEFAULT_DATA_FILE.to_string()
}

impl Default for RolodexConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            data_file: DEFAULT_DATA_FILE.to_string(),
        }
    }
}

impl RolodexConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RolodexError::Io)?;
        let config: RolodexConfig =
            serde_json::from_str(&content).map_err(RolodexError::Serialization)?;
        Ok(config)
    }

    /// Page size, never below 1
    pub fn page_size(&self) -> usize {
        self.page_size.max(1)
    }

    pub fn set_page_size(&mut self, size: usize) {
        self.page_size = size.max(1);
    }

    /// Full path of the backup file inside `data_dir`
    pub fn data_path<P: AsRef<Path>>(&self, data_dir: P) -> PathBuf {
        data_dir.as_ref().join(&self.data_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = RolodexConfig::default();
        assert_eq!(config.page_size, 5);
        assert_eq!(config.data_file, "contacts.jsonl");
    }

    #[test]
    fn test_page_size_never_zero() {
        let mut config = RolodexConfig::default();
        config.set_page_size(0);
        assert_eq!(config.page_size(), 1);

        let config = RolodexConfig {
            page_size: 0,
            ..RolodexConfig::default()
        };
        assert_eq!(config.page_size(), 1);
    }

    #[test]
    fn test_load_missing_config() {
        let temp = TempDir::new().unwrap();
        let config = RolodexConfig::load(temp.path()).unwrap();
        assert_eq!(config, RolodexConfig::default());
    }

    #[test]
    fn test_load_full_config() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(CONFIG_FILENAME),
            r#"{"page_size": 12, "data_file": "people.jsonl"}"#,
        )
        .unwrap();

        let loaded = RolodexConfig::load(temp.path()).unwrap();
        assert_eq!(loaded.page_size, 12);
        assert_eq!(loaded.data_file, "people.jsonl");
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(CONFIG_FILENAME), r#"{"page_size": 3}"#).unwrap();

        let config = RolodexConfig::load(temp.path()).unwrap();
        assert_eq!(config.page_size, 3);
        assert_eq!(config.data_file, "contacts.jsonl");
    }

    #[test]
    fn test_data_path() {
        let config = RolodexConfig::default();
        assert_eq!(
            config.data_path("/tmp/rolodex"),
            PathBuf::from("/tmp/rolodex/contacts.jsonl")
        );
    }
}
