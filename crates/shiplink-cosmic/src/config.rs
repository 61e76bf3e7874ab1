// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Configuration

use shiplink_core::{AppSettings, SettingsStore};
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct CosmicConfig {
    pub settings: AppSettings,
}

impl Default for CosmicConfig {
    fn default() -> Self {
        Self::from(AppSettings::default())
    }
}

impl From<AppSettings> for CosmicConfig {
    fn from(settings: AppSettings) -> Self {
        Self { settings }
    }
}

impl CosmicConfig {
    /// Read settings from the platform config dir, falling back to defaults
    pub fn load() -> Self {
        match SettingsStore::new() {
            Ok(store) => Self::from(store.get()),
            Err(e) => {
                tracing::warn!("Settings unavailable, using defaults: {}", e);
                Self::default()
            }
        }
    }

    /// Phone frame size in logical pixels
    pub fn frame_size(&self) -> (f32, f32) {
        (self.settings.frame_width, self.settings.frame_height)
    }

    pub fn cosmic_theme(&self) -> Option<cosmic::Theme> {
        match self.settings.theme.as_str() {
            "dark" => Some(cosmic::Theme::dark()),
            "light" => Some(cosmic::Theme::light()),
            _ => None,
        }
    }

    pub fn save_redirect_delay(&self) -> Duration {
        Duration::from_millis(self.settings.save_redirect_delay_ms)
    }

    pub fn card_notice_delay(&self) -> Duration {
        Duration::from_millis(self.settings.card_notice_delay_ms)
    }

    pub fn password_notice_delay(&self) -> Duration {
        Duration::from_millis(self.settings.password_notice_delay_ms)
    }

    pub fn capture_delay(&self) -> Duration {
        Duration::from_millis(self.settings.capture_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delays_follow_settings() {
        let config = CosmicConfig::from(AppSettings {
            capture_delay_ms: 250,
            ..AppSettings::default()
        });
        assert_eq!(config.capture_delay(), Duration::from_millis(250));
        assert_eq!(config.save_redirect_delay(), Duration::from_millis(1500));
        assert_eq!(config.frame_size(), (390.0, 844.0));
    }

    #[test]
    fn test_frame_and_theme_read_from_settings() {
        let config = CosmicConfig::from(AppSettings {
            frame_width: 375.0,
            frame_height: 667.0,
            theme: "dark".to_string(),
            ..AppSettings::default()
        });
        assert_eq!(config.frame_size(), (375.0, 667.0));
        assert!(config.cosmic_theme().is_some());
    }

    #[test]
    fn test_system_theme_keeps_default() {
        assert!(CosmicConfig::default().cosmic_theme().is_none());
    }
}
