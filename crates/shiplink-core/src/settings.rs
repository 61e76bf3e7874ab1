// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Settings persistence
//
// Frontend preferences are stored in a local JSON file.
// App data (profiles, cards, chats) is never written anywhere.

use crate::types::{AppError, AppSettings};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::RwLock;

/// In-memory cache of settings, persisted to disk on changes
pub struct SettingsStore {
    settings: RwLock<AppSettings>,
    file_path: PathBuf,
}

impl SettingsStore {
    /// Create a settings store in the platform config directory
    pub fn new() -> Result<Self, AppError> {
        let file_path = Self::get_settings_path()?;
        Self::at(file_path)
    }

    /// Create a settings store backed by an explicit file, loading it if present
    pub fn at(file_path: impl Into<PathBuf>) -> Result<Self, AppError> {
        let file_path = file_path.into();
        tracing::info!("Settings file path: {:?}", file_path);

        let settings = if file_path.exists() {
            tracing::info!("Loading settings from disk");
            let content = fs::read_to_string(&file_path)
                .map_err(|e| AppError::FileIo(format!("Failed to read settings: {}", e)))?;

            Self::parse(&content)
        } else {
            tracing::info!("No settings file found, using defaults");
            AppSettings::default()
        };

        let store = Self {
            settings: RwLock::new(settings),
            file_path,
        };

        // Persist default settings if file doesn't exist
        if !store.file_path.exists() {
            tracing::info!("Creating initial settings file");
            store.persist()?;
        }

        Ok(store)
    }

    /// Parse settings, falling back to defaults for unreadable or invalid content
    fn parse(content: &str) -> AppSettings {
        let settings: AppSettings = match serde_json::from_str(content) {
            Ok(settings) => settings,
            Err(e) => {
                tracing::warn!("Failed to parse settings, using defaults: {}", e);
                return AppSettings::default();
            }
        };

        match settings.validate() {
            Ok(()) => settings,
            Err(e) => {
                tracing::warn!("{}, using defaults", e);
                AppSettings::default()
            }
        }
    }

    /// Get the path to the settings file
    fn get_settings_path() -> Result<PathBuf, AppError> {
        let config_dir = directories::ProjectDirs::from("com", "shiplink", "prototype")
            .ok_or_else(|| AppError::FileIo("Could not determine config directory".to_string()))?
            .config_dir()
            .to_path_buf();

        // Ensure the directory exists
        fs::create_dir_all(&config_dir)
            .map_err(|e| AppError::FileIo(format!("Failed to create config dir: {}", e)))?;

        Ok(config_dir.join("settings.json"))
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Persist settings to disk
    fn persist(&self) -> Result<(), AppError> {
        let content = {
            let settings = self
                .settings
                .read()
                .map_err(|_| AppError::InvalidConfig("settings lock poisoned".to_string()))?;
            serde_json::to_string_pretty(&*settings).map_err(|e| {
                AppError::Serialization(format!("Failed to serialize settings: {}", e))
            })?
        };

        fs::write(&self.file_path, content)
            .map_err(|e| AppError::FileIo(format!("Failed to write settings: {}", e)))?;

        Ok(())
    }

    /// Get current settings
    pub fn get(&self) -> AppSettings {
        match self.settings.read() {
            Ok(settings) => settings.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Validate, update and persist settings
    pub fn update(&self, new_settings: AppSettings) -> Result<(), AppError> {
        new_settings.validate()?;
        tracing::info!(
            "Updating settings, initial screen: {}, theme: {}",
            new_settings.initial_screen,
            new_settings.theme
        );
        {
            let mut settings = self
                .settings
                .write()
                .map_err(|_| AppError::InvalidConfig("settings lock poisoned".to_string()))?;
            *settings = new_settings;
        }

        let result = self.persist();
        if result.is_ok() {
            tracing::info!("Settings persisted successfully");
        } else {
            tracing::error!("Failed to persist settings: {:?}", result);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::screen::ScreenId;
    use crate::types::PayloadRetention;

    #[test]
    fn test_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::at(&path).unwrap();
        assert!(path.exists());
        assert_eq!(store.get(), AppSettings::default());
        assert_eq!(store.path(), path.as_path());
    }

    #[test]
    fn test_update_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");

        let store = SettingsStore::at(&path).unwrap();
        let mut settings = store.get();
        settings.initial_screen = ScreenId::Home;
        settings.payload_retention = PayloadRetention::ClearOnConsume;
        store.update(settings.clone()).unwrap();

        let reloaded = SettingsStore::at(&path).unwrap();
        assert_eq!(reloaded.get(), settings);
    }

    #[test]
    fn test_corrupt_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, "{ not json").unwrap();

        let store = SettingsStore::at(&path).unwrap();
        assert_eq!(store.get(), AppSettings::default());
    }

    #[test]
    fn test_invalid_values_fall_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("settings.json");
        fs::write(&path, r#"{"theme":"neon","initialScreen":"home"}"#).unwrap();

        let store = SettingsStore::at(&path).unwrap();
        assert_eq!(store.get().initial_screen, ScreenId::Splash);
    }

    #[test]
    fn test_update_rejects_invalid_settings() {
        let dir = tempfile::tempdir().unwrap();
        let store = SettingsStore::at(dir.path().join("settings.json")).unwrap();
        let settings = AppSettings {
            frame_width: 0.0,
            ..AppSettings::default()
        };
        assert!(store.update(settings).is_err());
        assert_eq!(store.get(), AppSettings::default());
    }
}
