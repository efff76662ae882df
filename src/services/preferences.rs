// Keyhaven generator preferences
// Load/save/reset of the persisted generator controls. Preferences are
// stored as a JSON file at the platform-specific config path.

use std::fs;
use std::path::Path;

use crate::platform;
use crate::types::errors::PreferencesError;
use crate::types::preferences::GeneratorPreferences;

/// Trait defining the preferences store interface.
pub trait PreferencesStoreTrait {
    fn load(&mut self) -> Result<GeneratorPreferences, PreferencesError>;
    fn save(&self) -> Result<(), PreferencesError>;
    fn get(&self) -> &GeneratorPreferences;
    fn set(&mut self, prefs: GeneratorPreferences) -> Result<(), PreferencesError>;
    fn reset(&mut self) -> Result<(), PreferencesError>;
    fn get_config_path(&self) -> &str;
}

/// Preferences store that persists generator controls as JSON on disk.
pub struct PreferencesStore {
    config_path: String,
    prefs: GeneratorPreferences,
}

impl PreferencesStore {
    /// Creates a new PreferencesStore.
    ///
    /// If `path_override` is `Some`, uses that path for the config file.
    /// Otherwise, uses the platform-specific config directory with
    /// `preferences.json`.
    pub fn new(path_override: Option<String>) -> Self {
        let config_path = match path_override {
            Some(p) => p,
            None => {
                let config_dir = platform::get_config_dir();
                config_dir
                    .join("preferences.json")
                    .to_string_lossy()
                    .to_string()
            }
        };

        Self {
            config_path,
            prefs: GeneratorPreferences::default(),
        }
    }
}

impl PreferencesStoreTrait for PreferencesStore {
    /// Loads preferences from the JSON config file.
    ///
    /// A missing file yields defaults. A malformed file is a serialization
    /// error. Out-of-range values in a well-formed file are clamped, not
    /// rejected.
    fn load(&mut self) -> Result<GeneratorPreferences, PreferencesError> {
        let path = Path::new(&self.config_path);

        if !path.exists() {
            self.prefs = GeneratorPreferences::default();
            return Ok(self.prefs.clone());
        }

        let content = fs::read_to_string(path)
            .map_err(|e| PreferencesError::IoError(format!("Failed to read config file: {}", e)))?;

        let prefs: GeneratorPreferences = serde_json::from_str(&content).map_err(|e| {
            PreferencesError::SerializationError(format!("Failed to parse config file: {}", e))
        })?;

        self.prefs = prefs.clamped();
        Ok(self.prefs.clone())
    }

    /// Saves the current preferences to the JSON config file.
    ///
    /// Creates parent directories if they don't exist.
    fn save(&self) -> Result<(), PreferencesError> {
        let path = Path::new(&self.config_path);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PreferencesError::IoError(format!("Failed to create config directory: {}", e))
            })?;
        }

        let json = serde_json::to_string_pretty(&self.prefs).map_err(|e| {
            PreferencesError::SerializationError(format!("Failed to serialize preferences: {}", e))
        })?;

        fs::write(path, json)
            .map_err(|e| PreferencesError::IoError(format!("Failed to write config file: {}", e)))?;

        Ok(())
    }

    /// Returns a reference to the current in-memory preferences.
    fn get(&self) -> &GeneratorPreferences {
        &self.prefs
    }

    /// Replaces the preferences, clamping out-of-range values, and persists
    /// to disk.
    fn set(&mut self, prefs: GeneratorPreferences) -> Result<(), PreferencesError> {
        self.prefs = prefs.clamped();
        self.save()
    }

    /// Resets preferences to factory defaults and saves to disk.
    fn reset(&mut self) -> Result<(), PreferencesError> {
        self.prefs = GeneratorPreferences::default();
        self.save()
    }

    /// Returns the path to the config file.
    fn get_config_path(&self) -> &str {
        &self.config_path
    }
}
