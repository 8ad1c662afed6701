use dirs::home_dir;
use std::{env, path::Path, path::PathBuf};

pub const HOME_ENV: &str = "SMARTBUDGET_HOME";

const DEFAULT_DIR_NAME: &str = ".smartbudget";
const STORE_DIR: &str = "files";
const CONFIG_FILE: &str = "config.json";

/// Returns the application data directory, defaulting to `~/.smartbudget`.
pub fn app_home() -> PathBuf {
    if let Some(custom) = env::var_os(HOME_ENV) {
        return PathBuf::from(custom);
    }
    home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(DEFAULT_DIR_NAME)
}

/// Directory holding the JSON documents.
pub fn store_dir_in(home: &Path) -> PathBuf {
    home.join(STORE_DIR)
}

pub fn config_file_in(home: &Path) -> PathBuf {
    home.join(CONFIG_FILE)
}
