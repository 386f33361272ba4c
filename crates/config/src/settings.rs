// Application settings
// Loaded from ~/.config/tutor/settings.json

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use tutor_protocol::DEFAULT_DIFFICULTY;

/// Base URL of the tutor backend when nothing is configured.
pub const DEFAULT_SERVER_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Base URL of the tutor backend
    #[serde(rename = "server.url")]
    pub server_url: String,

    /// Difficulty used when none is given on the command line
    #[serde(rename = "correction.defaultDifficulty")]
    pub default_difficulty: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: DEFAULT_SERVER_URL.to_string(),
            default_difficulty: DEFAULT_DIFFICULTY.to_string(),
        }
    }
}

impl Settings {
    pub fn config_path() -> PathBuf {
        let config_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("tutor");
        config_dir.join("settings.json")
    }

    /// Load settings from disk, falling back to defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    /// Load from an explicit path. Missing or unreadable files yield
    /// defaults — configuration problems must never be fatal.
    pub fn load_from(path: &Path) -> Self {
        if !path.exists() {
            return Self::default();
        }

        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    eprintln!("Failed to parse settings ({}), using defaults", e);
                    Self::default()
                }
            },
            Err(e) => {
                eprintln!("Failed to read settings ({}), using defaults", e);
                Self::default()
            }
        }
    }

    /// Save settings to disk.
    pub fn save(&self) -> Result<(), String> {
        self.save_to(&Self::config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        // Ensure directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(self).map_err(|e| e.to_string())?;

        fs::write(path, json).map_err(|e| e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let settings = Settings::load_from(&dir.path().join("nope.json"));
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
        assert_eq!(settings.default_difficulty, DEFAULT_DIFFICULTY);
    }

    #[test]
    fn test_corrupt_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.server_url, DEFAULT_SERVER_URL);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"server.url": "http://10.0.0.5:9000"}"#).unwrap();
        let settings = Settings::load_from(&path);
        assert_eq!(settings.server_url, "http://10.0.0.5:9000");
        assert_eq!(settings.default_difficulty, DEFAULT_DIFFICULTY);
    }

    #[test]
    fn test_save_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("settings.json");
        let settings = Settings {
            server_url: "http://example.test:8000".into(),
            default_difficulty: "advanced".into(),
        };
        settings.save_to(&path).unwrap();

        let loaded = Settings::load_from(&path);
        assert_eq!(loaded.server_url, "http://example.test:8000");
        assert_eq!(loaded.default_difficulty, "advanced");
    }
}
