use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::{errors::BudgetError, utils::paths};

/// User preferences read from `config.json` in the application home.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Custom directory for record documents. Defaults to `<home>/files`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub store_dir: Option<PathBuf>,
    /// Log level applied to this crate when `RUST_LOG` is unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Config {
    pub fn resolve_store_dir(&self, home: &Path) -> PathBuf {
        match &self.store_dir {
            Some(path) => path.clone(),
            None => paths::store_dir_in(home),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ConfigManager {
    home: PathBuf,
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> Self {
        Self::with_base_dir(paths::app_home())
    }

    pub fn with_base_dir(home: PathBuf) -> Self {
        let path = paths::config_file_in(&home);
        Self { home, path }
    }

    /// Missing configuration yields the defaults.
    pub fn load(&self) -> Result<Config, BudgetError> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)
                .map_err(|err| BudgetError::from(err).with_context("config.json"))
        } else {
            Ok(Config::default())
        }
    }

    pub fn home(&self) -> &Path {
        &self.home
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(
            config.resolve_store_dir(manager.home()),
            temp.path().join("files")
        );
    }

    #[test]
    fn written_config_is_loaded() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        let config = Config {
            store_dir: Some(temp.path().join("elsewhere")),
            log_level: Some("debug".into()),
        };
        fs::write(manager.path(), serde_json::to_string_pretty(&config).unwrap()).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        assert_eq!(
            config.resolve_store_dir(manager.home()),
            temp.path().join("elsewhere")
        );
    }

    #[test]
    fn malformed_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        fs::write(manager.path(), "{ broken").unwrap();
        assert_eq!(manager.load().unwrap_err().kind(), ErrorKind::Serialization);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_base_dir(temp.path().to_path_buf());
        fs::write(manager.path(), r#"{"theme": "plain", "log_level": "info"}"#).unwrap();
        let config = manager.load().unwrap();
        assert_eq!(config.log_level.as_deref(), Some("info"));
        assert!(config.store_dir.is_none());
    }
}
