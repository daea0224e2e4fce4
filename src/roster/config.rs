use crate::error::{Result, RosterError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_FILENAME: &str = "config.json";

pub const KEYS: [&str; 3] = ["view-mode", "seed-sample-data", "export-dir"];

/// How the roster is listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Table,
    Cards,
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewMode::Table => f.write_str("table"),
            ViewMode::Cards => f.write_str("cards"),
        }
    }
}

impl FromStr for ViewMode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "table" => Ok(ViewMode::Table),
            "cards" | "card" => Ok(ViewMode::Cards),
            _ => Err(format!("Invalid view mode '{}' (expected table or cards)", s)),
        }
    }
}

/// Configuration for roster, stored in `<data dir>/config.json`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterConfig {
    /// Preferred listing layout
    #[serde(default)]
    pub view_mode: ViewMode,

    /// Seed the sample employees when the stored roster is empty
    #[serde(default = "default_seed")]
    pub seed_sample_data: bool,

    /// Where exported CSV files go (defaults to the working directory)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub export_dir: Option<PathBuf>,
}

fn default_seed() -> bool {
    true
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            seed_sample_data: default_seed(),
            export_dir: None,
        }
    }
}

impl RosterConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(RosterError::Io)?;
        let config: RosterConfig =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(RosterError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(RosterError::Serialization)?;
        fs::write(config_path, content).map_err(RosterError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "view-mode" => Some(self.view_mode.to_string()),
            "seed-sample-data" => Some(self.seed_sample_data.to_string()),
            "export-dir" => Some(
                self.export_dir
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| ".".to_string()),
            ),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            "view-mode" => self.view_mode = value.parse()?,
            "seed-sample-data" => {
                self.seed_sample_data = match value.to_ascii_lowercase().as_str() {
                    "true" | "yes" | "on" | "1" => true,
                    "false" | "no" | "off" | "0" => false,
                    _ => return Err(format!("Invalid boolean '{}'", value)),
                }
            }
            "export-dir" => {
                self.export_dir = match value.trim() {
                    "" | "." => None,
                    dir => Some(PathBuf::from(dir)),
                }
            }
            _ => return Err(format!("Unknown config key: {}", key)),
        }
        Ok(())
    }

    /// `(key, value)` pairs for every known key.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        KEYS.iter()
            .filter_map(|k| self.get(k).map(|v| (*k, v)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = RosterConfig::default();
        assert_eq!(config.view_mode, ViewMode::Table);
        assert!(config.seed_sample_data);
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn test_load_missing_config() {
        let dir = tempdir().unwrap();
        let config = RosterConfig::load(dir.path().join("absent")).unwrap();
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let mut config = RosterConfig::default();
        config.set("view-mode", "cards").unwrap();
        config.set("seed-sample-data", "no").unwrap();
        config.save(dir.path()).unwrap();

        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.view_mode, ViewMode::Cards);
        assert!(!loaded.seed_sample_data);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join(CONFIG_FILENAME), r#"{"view_mode":"cards"}"#).unwrap();
        let loaded = RosterConfig::load(dir.path()).unwrap();
        assert_eq!(loaded.view_mode, ViewMode::Cards);
        assert!(loaded.seed_sample_data);
    }

    #[test]
    fn test_set_rejects_unknown_key_and_bad_values() {
        let mut config = RosterConfig::default();
        assert!(config.set("colour", "blue").is_err());
        assert!(config.set("view-mode", "grid").is_err());
        assert!(config.set("seed-sample-data", "maybe").is_err());
        assert_eq!(config, RosterConfig::default());
    }

    #[test]
    fn test_export_dir_get_set() {
        let mut config = RosterConfig::default();
        assert_eq!(config.get("export-dir").unwrap(), ".");
        config.set("export-dir", "/tmp/out").unwrap();
        assert_eq!(config.export_dir, Some(PathBuf::from("/tmp/out")));
        config.set("export-dir", ".").unwrap();
        assert_eq!(config.export_dir, None);
    }

    #[test]
    fn test_entries_cover_all_keys() {
        let keys: Vec<_> = RosterConfig::default()
            .entries()
            .into_iter()
            .map(|(k, _)| k)
            .collect();
        assert_eq!(keys, KEYS.to_vec());
    }
}
