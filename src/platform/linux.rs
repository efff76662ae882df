// Keyhaven platform paths for Linux
// Config: ~/.config/keyhaven
// Data:   ~/.local/share/keyhaven

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Keyhaven on Linux.
/// Uses `$XDG_CONFIG_HOME/keyhaven` if set, otherwise `~/.config/keyhaven`.
pub fn get_config_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_CONFIG_HOME") {
        PathBuf::from(xdg).join("keyhaven")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home).join(".config").join("keyhaven")
    }
}

/// Returns the data directory for Keyhaven on Linux.
/// Uses `$XDG_DATA_HOME/keyhaven` if set, otherwise `~/.local/share/keyhaven`.
pub fn get_data_dir() -> PathBuf {
    if let Ok(xdg) = env::var("XDG_DATA_HOME") {
        PathBuf::from(xdg).join("keyhaven")
    } else {
        let home = env::var("HOME").unwrap_or_else(|_| String::from("/tmp"));
        PathBuf::from(home)
            .join(".local")
            .join("share")
            .join("keyhaven")
    }
}
