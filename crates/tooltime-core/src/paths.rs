//! Home directory and config file locations.

use dirs::home_dir;
use std::path::{Path, PathBuf};

/// Environment variable overriding the home directory.
pub const HOME_ENV: &str = "TOOLTIME_HOME";

/// Returns the configuration directory (`$TOOLTIME_HOME` or `~/.tooltime`),
/// or None if the user's home cannot be resolved.
pub fn try_tooltime_home() -> Option<PathBuf> {
    if let Ok(val) = std::env::var(HOME_ENV) {
        return Some(PathBuf::from(val));
    }
    home_dir().map(|h| h.join(".tooltime"))
}

/// Store catalog override inside a home directory: `<home>/catalog.toml`
pub fn catalog_path(home: &Path) -> PathBuf {
    home.join("catalog.toml")
}
