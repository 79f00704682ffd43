use crate::error::{OrgzError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for orgz, stored in `config.json` inside the data directory.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrgzConfig {
    /// Directory CSV exports and finance reports are written to.
    /// Defaults to the current directory.
    #[serde(default)]
    pub export_dir: Option<PathBuf>,
}

impl OrgzConfig {
    /// Load config from the given directory, or return defaults if not found.
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(OrgzError::Io)?;
        let config: OrgzConfig =
            serde_json::from_str(&content).map_err(OrgzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory.
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(OrgzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(OrgzError::Serialization)?;
        fs::write(config_path, content).map_err(OrgzError::Io)?;
        Ok(())
    }

    pub fn export_dir(&self) -> PathBuf {
        self.export_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn default_export_dir_is_cwd() {
        let config = OrgzConfig::default();
        assert_eq!(config.export_dir(), PathBuf::from("."));
    }

    #[test]
    fn load_missing_config_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let config = OrgzConfig::load(temp.path()).unwrap();
        assert_eq!(config, OrgzConfig::default());
    }

    #[test]
    fn save_and_load_round_trip() {
        let temp = TempDir::new().unwrap();
        let config = OrgzConfig {
            export_dir: Some(PathBuf::from("/tmp/exports")),
        };
        config.save(temp.path()).unwrap();

        let loaded = OrgzConfig::load(temp.path()).unwrap();
        assert_eq!(loaded, config);
        assert_eq!(loaded.export_dir(), PathBuf::from("/tmp/exports"));
    }
}
