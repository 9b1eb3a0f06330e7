//! Application settings persistence
//!
//! Handles saving and loading user preferences. Only configuration lives
//! here; demo state (selection, tab, scroll) is never persisted.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Display and interface settings
    #[serde(default)]
    pub display: DisplaySettings,
    /// Manual animate-in timing
    #[serde(default)]
    pub animation: AnimationSettings,
    /// Scroll sampling for the event-driven tab
    #[serde(default)]
    pub scroll: ScrollSettings,
    /// Demo image source
    #[serde(default)]
    pub asset: AssetSettings,
}

/// Display and interface settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplaySettings {
    /// Dark mode enabled
    pub dark_mode: bool,
    /// Window width in logical pixels
    #[serde(default = "default_window_width")]
    pub window_width: f32,
    /// Window height in logical pixels
    #[serde(default = "default_window_height")]
    pub window_height: f32,
}

fn default_window_width() -> f32 {
    480.0
}

fn default_window_height() -> f32 {
    800.0
}

/// Manual animation settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    /// Duration of one animate-in pass in milliseconds
    pub duration_ms: u64,
}

impl AnimationSettings {
    pub fn duration(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.duration_ms)
    }
}

/// Scroll sampling settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScrollSettings {
    /// Minimum interval between scroll samples on the Event tab
    pub event_throttle_ms: u64,
    /// Minimum interval between scroll samples on the Static tab
    pub static_throttle_ms: u64,
    /// Scroll pixels to progress units (input range is 0..100)
    #[serde(default = "default_progress_scale")]
    pub progress_scale: f32,
}

fn default_progress_scale() -> f32 {
    1.0
}

/// Demo image settings
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetSettings {
    /// Path to a PNG/JPEG to animate. The built-in avatar is used when unset.
    pub image_path: Option<String>,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            window_width: default_window_width(),
            window_height: default_window_height(),
        }
    }
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self { duration_ms: 600 }
    }
}

impl Default for ScrollSettings {
    fn default() -> Self {
        Self {
            event_throttle_ms: 16,
            static_throttle_ms: 100_000,
            progress_scale: default_progress_scale(),
        }
    }
}

impl Settings {
    /// Get the settings file path
    pub fn file_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "animators", "AnimatorsDemo")
            .map(|dirs| dirs.config_dir().join("settings.json"))
    }

    /// Load settings from file, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = Self::file_path() else {
            return Self::default();
        };

        match Self::load_from_file(&path) {
            Ok(settings) => settings,
            Err(SettingsError::Io(_)) => Self::default(),
            Err(e) => {
                tracing::warn!("Ignoring settings at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Load settings from a specific file
    pub fn load_from_file(path: &Path) -> Result<Self, SettingsError> {
        let content =
            std::fs::read_to_string(path).map_err(|e| SettingsError::Io(e.to_string()))?;
        serde_json::from_str(&content).map_err(|e| SettingsError::Parse(e.to_string()))
    }

    /// Save settings to the default file
    pub fn save(&self) -> Result<(), SettingsError> {
        if let Some(path) = Self::file_path() {
            self.save_to_file(&path)
        } else {
            Err(SettingsError::Io(
                "Could not determine config directory".to_string(),
            ))
        }
    }

    /// Save settings to a specific file
    pub fn save_to_file(&self, path: &Path) -> Result<(), SettingsError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| SettingsError::Io(e.to_string()))?;
        }

        let content =
            serde_json::to_string_pretty(self).map_err(|e| SettingsError::Parse(e.to_string()))?;
        std::fs::write(path, content).map_err(|e| SettingsError::Io(e.to_string()))?;
        Ok(())
    }
}

/// Errors that can occur with settings
#[derive(Debug, Clone)]
pub enum SettingsError {
    Io(String),
    Parse(String),
}

impl std::fmt::Display for SettingsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SettingsError::Io(e) => write!(f, "IO error: {}", e),
            SettingsError::Parse(e) => write!(f, "Parse error: {}", e),
        }
    }
}

impl std::error::Error for SettingsError {}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_settings_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("animators-demo-{}-{}", name, std::process::id()))
            .join("settings.json")
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let path = temp_settings_path("roundtrip");
        let mut settings = Settings::default();
        settings.display.dark_mode = true;
        settings.animation.duration_ms = 250;
        settings.asset.image_path = Some("/tmp/avatar.png".to_string());

        settings.save_to_file(&path).unwrap();
        let loaded = Settings::load_from_file(&path).unwrap();
        assert_eq!(loaded, settings);

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let settings: Settings =
            serde_json::from_str(r#"{ "animation": { "duration_ms": 900 } }"#).unwrap();
        assert_eq!(settings.animation.duration_ms, 900);
        assert_eq!(settings.scroll, ScrollSettings::default());
        assert_eq!(settings.display.window_width, 480.0);
    }

    #[test]
    fn test_invalid_file_is_parse_error() {
        let path = temp_settings_path("invalid");
        std::fs::create_dir_all(path.parent().unwrap()).unwrap();
        std::fs::write(&path, "not json").unwrap();

        let result = Settings::load_from_file(&path);
        assert!(matches!(result, Err(SettingsError::Parse(_))));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let path = temp_settings_path("missing");
        assert!(matches!(
            Settings::load_from_file(&path),
            Err(SettingsError::Io(_))
        ));
    }
}
