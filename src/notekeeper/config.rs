use crate::error::{NotekeeperError, Result};
use crate::store::persist::DEFAULT_SLOT;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for notekeeper, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotekeeperConfig {
    /// Name of the durable slot the state snapshot is written to
    #[serde(default = "default_slot")]
    pub slot: String,

    /// Pretty-print snapshots (larger, but readable by hand)
    #[serde(default)]
    pub pretty: bool,
}

fn default_slot() -> String {
    DEFAULT_SLOT.to_string()
}

impl Default for NotekeeperConfig {
    fn default() -> Self {
        Self {
            slot: default_slot(),
            pretty: false,
        }
    }
}

impl NotekeeperConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(NotekeeperError::Io)?;
        let config: NotekeeperConfig =
            serde_json::from_str(&content).map_err(NotekeeperError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(NotekeeperError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(NotekeeperError::Serialization)?;
        fs::write(config_path, content).map_err(NotekeeperError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "slot" => Some(self.slot.clone()),
            "pretty" => Some(self.pretty.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "slot" => {
                let value = value.trim();
                if value.is_empty() || value.contains(['/', '\\']) {
                    return Err(format!("Invalid slot name: {:?}", value));
                }
                self.slot = value.to_string();
                Ok(())
            }
            "pretty" => {
                self.pretty = value
                    .parse()
                    .map_err(|_| format!("Expected true or false, got: {}", value))?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_config() {
        let config = NotekeeperConfig::default();
        assert_eq!(config.slot, "store");
        assert!(!config.pretty);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = TempDir::new().unwrap();
        let config = NotekeeperConfig::load(dir.path()).unwrap();
        assert_eq!(config, NotekeeperConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = TempDir::new().unwrap();
        let mut config = NotekeeperConfig::default();
        config.set("pretty", "true").unwrap();
        config.set("slot", "notes").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = NotekeeperConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.slot, "notes");
        assert!(loaded.pretty);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"pretty": true}"#).unwrap();
        let loaded = NotekeeperConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.slot, "store");
        assert!(loaded.pretty);
    }

    #[test]
    fn test_rejects_bad_values() {
        let mut config = NotekeeperConfig::default();
        assert!(config.set("pretty", "maybe").is_err());
        assert!(config.set("slot", "../escape").is_err());
        assert!(config.set("color", "red").is_err());
        assert_eq!(config, NotekeeperConfig::default());
    }
}
