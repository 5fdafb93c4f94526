use crate::{
    error::{Error, Result},
    guess::GuessRange,
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::{ConfigValidator, DefaultValidator};

/// File names searched for, in order, in each directory
pub const CONFIG_FILE_NAMES: [&str; 2] = [".drills.json", "drills.json"];

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Config {
    #[serde(default)]
    pub guess: GuessConfig,
    #[serde(default)]
    pub atm: AtmConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct GuessConfig {
    pub min: i32,
    pub max: i32,
    pub attempt_limit: u32,
    /// Fixed seed for reproducible targets
    pub seed: Option<u64>,
}

impl Default for GuessConfig {
    fn default() -> Self {
        Self {
            min: 1,
            max: 100,
            attempt_limit: 10,
            seed: None,
        }
    }
}

impl GuessConfig {
    pub fn range(&self) -> Result<GuessRange> {
        GuessRange::new(self.min, self.max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct AtmConfig {
    pub initial_balance: f64,
    pub currency_symbol: String,
    pub currency_code: String,
}

impl Default for AtmConfig {
    fn default() -> Self {
        Self {
            initial_balance: 10000.0,
            currency_symbol: "₹".to_string(),
            currency_code: "INR".to_string(),
        }
    }
}

impl Config {
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&contents)
            .map_err(|e| Error::ConfigError(format!("Failed to parse {}: {e}", path.display())))?;
        debug!("Loaded settings from {}", path.display());
        Ok(config)
    }

    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, contents)?;
        Ok(())
    }

    /// Walk up from `start_path` looking for a settings file.
    pub fn find_config_file(start_path: &Path) -> Option<PathBuf> {
        let mut current = start_path;

        loop {
            for name in CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            current = current.parent()?;
        }
    }

    /// Load the explicit file if given, otherwise the nearest discovered
    /// file, otherwise the defaults.
    pub fn resolve(explicit: Option<&Path>, start_path: &Path) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => Self::find_config_file(start_path),
        };

        match path {
            Some(path) => Self::load_from_file(&path),
            None => {
                debug!("No settings file found from {}", start_path.display());
                Ok(Self::default())
            }
        }
    }

    pub fn validate(&self) -> Result<()> {
        DefaultValidator.validate(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_match_console_programs() {
        let config = Config::default();
        assert_eq!(config.guess.min, 1);
        assert_eq!(config.guess.max, 100);
        assert_eq!(config.guess.attempt_limit, 10);
        assert_eq!(config.guess.seed, None);
        assert_eq!(config.atm.initial_balance, 10000.0);
        assert_eq!(config.atm.currency_symbol, "₹");
        assert_eq!(config.atm.currency_code, "INR");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "guess": { "max": 20 } }"#).unwrap();
        assert_eq!(config.guess.min, 1);
        assert_eq!(config.guess.max, 20);
        assert_eq!(config.guess.attempt_limit, 10);
        assert_eq!(config.atm, AtmConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join(".drills.json");

        let mut config = Config::default();
        config.guess.seed = Some(7);
        config.atm.initial_balance = 250.5;
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_rejects_malformed_json() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("drills.json");
        std::fs::write(&path, "{ not json").unwrap();

        let err = Config::load_from_file(&path).unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_find_config_file_walks_up() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();
        std::fs::write(temp_dir.path().join("drills.json"), "{}").unwrap();

        let found = Config::find_config_file(&nested).unwrap();
        assert_eq!(found, temp_dir.path().join("drills.json"));
    }

    #[test]
    fn test_dotfile_takes_precedence() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(temp_dir.path().join("drills.json"), "{}").unwrap();
        std::fs::write(temp_dir.path().join(".drills.json"), "{}").unwrap();

        let found = Config::find_config_file(temp_dir.path()).unwrap();
        assert_eq!(found, temp_dir.path().join(".drills.json"));
    }

    #[test]
    fn test_resolve_prefers_explicit_path() {
        let temp_dir = TempDir::new().unwrap();
        std::fs::write(
            temp_dir.path().join(".drills.json"),
            r#"{ "guess": { "max": 50 } }"#,
        )
        .unwrap();
        let explicit = temp_dir.path().join("custom.json");
        std::fs::write(&explicit, r#"{ "guess": { "max": 5 } }"#).unwrap();

        let config = Config::resolve(Some(&explicit), temp_dir.path()).unwrap();
        assert_eq!(config.guess.max, 5);

        let config = Config::resolve(None, temp_dir.path()).unwrap();
        assert_eq!(config.guess.max, 50);
    }
}
