//! Ambient CLI configuration persisted under the platform config directory.

use serde::{Deserialize, Serialize};
use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::ledger::DEFAULT_ACCOUNT_NAME;

const CONFIG_DIR: &str = "budget_tracker";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("no configuration directory available on this platform")]
    MissingConfigDir,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub default_account_name: String,
    pub currency_symbol: String,
    #[serde(default)]
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_account_name: DEFAULT_ACCOUNT_NAME.into(),
            currency_symbol: "$".into(),
            quiet: false,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Result<Self, ConfigError> {
        let base = dirs::config_dir().ok_or(ConfigError::MissingConfigDir)?;
        Ok(Self::from_base(base))
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> Self {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> Self {
        Self {
            path: base.join(CONFIG_DIR).join(CONFIG_FILE),
        }
    }

    /// Loads the saved configuration, falling back to defaults when no file
    /// exists yet.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    /// Saves the configuration through a temp-file sibling then renames, so
    /// a crash mid-write never leaves a truncated file behind.
    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_defaults_when_no_file_exists() {
        let base = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(base.path().to_path_buf());

        let config = manager.load().unwrap();
        assert_eq!(config.default_account_name, DEFAULT_ACCOUNT_NAME);
        assert_eq!(config.currency_symbol, "$");
        assert!(!config.quiet);
    }

    #[test]
    fn save_then_load_round_trips() {
        let base = tempfile::tempdir().unwrap();
        let manager = ConfigManager::with_base_dir(base.path().to_path_buf());

        let config = Config {
            default_account_name: "Household".into(),
            currency_symbol: "€".into(),
            quiet: true,
        };
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded.default_account_name, "Household");
        assert_eq!(loaded.currency_symbol, "€");
        assert!(loaded.quiet);
        assert!(manager.path().ends_with("budget_tracker/config.json"));
    }
}
