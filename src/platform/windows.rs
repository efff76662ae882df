// Keyhaven platform paths for Windows
// Config: %APPDATA%/Keyhaven
// Data:   %APPDATA%/Keyhaven

use std::env;
use std::path::PathBuf;

/// Returns the configuration directory for Keyhaven on Windows.
/// `%APPDATA%/Keyhaven`
pub fn get_config_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Keyhaven")
}

/// Returns the data directory for Keyhaven on Windows.
/// `%APPDATA%/Keyhaven`
pub fn get_data_dir() -> PathBuf {
    let appdata =
        env::var("APPDATA").unwrap_or_else(|_| String::from("C:\\Users\\Default\\AppData\\Roaming"));
    PathBuf::from(appdata).join("Keyhaven")
}
