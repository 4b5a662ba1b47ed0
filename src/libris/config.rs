use crate::error::{LibrisError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for libris, stored as config.json in the config directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LibrisConfig {
    /// Overrides the directory the shelf data files live in.
    #[serde(default)]
    pub data_dir: Option<PathBuf>,
}

impl LibrisConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(LibrisError::Io)?;
        let config: LibrisConfig =
            serde_json::from_str(&content).map_err(LibrisError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(LibrisError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(LibrisError::Serialization)?;
        fs::write(config_path, content).map_err(LibrisError::Io)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_has_no_data_dir_override() {
        let config = LibrisConfig::default();
        assert_eq!(config.data_dir, None);
    }

    #[test]
    fn load_missing_config_returns_defaults() {
        let temp = tempfile::tempdir().unwrap();
        let config = LibrisConfig::load(temp.path().join("nope")).unwrap();
        assert_eq!(config, LibrisConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = tempfile::tempdir().unwrap();

        let config = LibrisConfig {
            data_dir: Some(PathBuf::from("/var/lib/libris")),
        };
        config.save(temp.path()).unwrap();

        let loaded = LibrisConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
    }
}
