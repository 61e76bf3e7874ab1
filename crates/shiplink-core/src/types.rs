// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Type definitions

use crate::screen::ScreenId;
use serde::{Deserialize, Serialize};

/// Counterpart shown at the top of a conversation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRecipient {
    pub name: String,
    pub initial: String,
    #[serde(default)]
    pub rating: Option<String>,
    #[serde(default)]
    pub deliveries: Option<String>,
    pub verified: bool,
}

impl ChatRecipient {
    /// Recipient with only the mandatory fields set
    pub fn new(name: impl Into<String>, verified: bool) -> Self {
        let name = name.into();
        Self {
            initial: initial_of(&name),
            name,
            rating: None,
            deliveries: None,
            verified,
        }
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    pub fn with_deliveries(mut self, deliveries: impl Into<String>) -> Self {
        self.deliveries = Some(deliveries.into());
        self
    }

    /// Rating label, or a dash when the recipient has none
    pub fn rating_label(&self) -> &str {
        self.rating.as_deref().unwrap_or("-")
    }
}

/// Summary of the person who posted a request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SenderSummary {
    pub name: String,
    pub rating: String,
    pub deliveries: String,
}

/// One delivery request, as handed from a detail screen to the acceptance screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestData {
    pub title: String,
    pub destination: String,
    pub package_type: String,
    pub weight: String,
    pub reward: String,
    pub sender: SenderSummary,
    pub expected_delivery: String,
}

impl RequestData {
    /// Chat counterpart for the sender of this request.
    ///
    /// Senders reachable from a request card are always verified students.
    pub fn sender_recipient(&self) -> ChatRecipient {
        ChatRecipient::new(&self.sender.name, true)
            .with_rating(&self.sender.rating)
            .with_deliveries(&self.sender.deliveries)
    }
}

/// Full public profile of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfileData {
    pub name: String,
    pub initial: String,
    pub verified: bool,
    pub rating: String,
    pub review_count: String,
    pub university: String,
    pub major: String,
    pub year: String,
    pub location: String,
    pub total_deliveries: String,
    pub success_rate: String,
    pub member_since: String,
    pub about: String,
}

impl UserProfileData {
    /// Chat counterpart derived from this profile
    pub fn to_chat_recipient(&self) -> ChatRecipient {
        ChatRecipient {
            name: self.name.clone(),
            initial: self.initial.clone(),
            rating: Some(self.rating.clone()),
            deliveries: Some(self.total_deliveries.clone()),
            verified: self.verified,
        }
    }
}

/// First character of a display name, used for avatar placeholders
pub fn initial_of(name: &str) -> String {
    name.chars().next().map(String::from).unwrap_or_default()
}

/// What happens to payload slots once a screen has read them
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PayloadRetention {
    /// Slots keep their value until a later navigation overwrites them
    #[default]
    Retain,
    /// Slots read by the rendered screen are emptied
    ClearOnConsume,
}

/// Application settings (GUI-agnostic)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppSettings {
    /// Screen shown at startup
    #[serde(default)]
    pub initial_screen: ScreenId,
    /// Theme preference: "dark", "light", or "system"
    #[serde(default = "default_theme")]
    pub theme: String,
    /// Payload slot carry-over policy
    #[serde(default)]
    pub payload_retention: PayloadRetention,
    /// Delay before leaving the edit-profile screen after saving
    #[serde(default = "default_save_redirect_delay_ms")]
    pub save_redirect_delay_ms: u64,
    /// How long the "card added" notice stays up
    #[serde(default = "default_card_notice_delay_ms")]
    pub card_notice_delay_ms: u64,
    /// How long the "password changed" notice stays up
    #[serde(default = "default_password_notice_delay_ms")]
    pub password_notice_delay_ms: u64,
    /// Simulated ID / face capture duration during sign-up
    #[serde(default = "default_capture_delay_ms")]
    pub capture_delay_ms: u64,
    /// Phone frame width in logical pixels
    #[serde(default = "default_frame_width")]
    pub frame_width: f32,
    /// Phone frame height in logical pixels
    #[serde(default = "default_frame_height")]
    pub frame_height: f32,
}

fn default_theme() -> String {
    "system".to_string()
}

fn default_save_redirect_delay_ms() -> u64 {
    1500
}

fn default_card_notice_delay_ms() -> u64 {
    2000
}

fn default_password_notice_delay_ms() -> u64 {
    3000
}

fn default_capture_delay_ms() -> u64 {
    800
}

fn default_frame_width() -> f32 {
    390.0
}

fn default_frame_height() -> f32 {
    844.0
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            initial_screen: ScreenId::default(),
            theme: default_theme(),
            payload_retention: PayloadRetention::default(),
            save_redirect_delay_ms: default_save_redirect_delay_ms(),
            card_notice_delay_ms: default_card_notice_delay_ms(),
            password_notice_delay_ms: default_password_notice_delay_ms(),
            capture_delay_ms: default_capture_delay_ms(),
            frame_width: default_frame_width(),
            frame_height: default_frame_height(),
        }
    }
}

impl AppSettings {
    /// Check values a frontend cannot work with
    pub fn validate(&self) -> Result<(), AppError> {
        if !matches!(self.theme.as_str(), "system" | "light" | "dark") {
            return Err(AppError::InvalidConfig(format!(
                "unknown theme: {}",
                self.theme
            )));
        }
        if self.frame_width <= 0.0 || self.frame_height <= 0.0 {
            return Err(AppError::InvalidConfig(
                "phone frame dimensions must be positive".to_string(),
            ));
        }
        Ok(())
    }
}

/// Error types for the application
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    FileIo(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown screen: {0}")]
    UnknownScreen(String),

    #[error("Navigation from {from} to {to} is not allowed")]
    TransitionNotAllowed { from: ScreenId, to: ScreenId },
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::FileIo(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Serialization(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AppSettings::default();
        assert_eq!(settings.initial_screen, ScreenId::Splash);
        assert_eq!(settings.theme, "system");
        assert_eq!(settings.payload_retention, PayloadRetention::Retain);
        assert_eq!(settings.save_redirect_delay_ms, 1500);
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let settings: AppSettings =
            serde_json::from_str(r#"{"initialScreen":"home","payloadRetention":"clear-on-consume"}"#)
                .unwrap();
        assert_eq!(settings.initial_screen, ScreenId::Home);
        assert_eq!(settings.payload_retention, PayloadRetention::ClearOnConsume);
        assert_eq!(settings.capture_delay_ms, 800);
        assert_eq!(settings.frame_height, 844.0);
    }

    #[test]
    fn test_invalid_theme_rejected() {
        let settings = AppSettings {
            theme: "neon".to_string(),
            ..AppSettings::default()
        };
        assert!(matches!(settings.validate(), Err(AppError::InvalidConfig(_))));
    }

    #[test]
    fn test_recipient_optional_fields() {
        let recipient: ChatRecipient =
            serde_json::from_str(r#"{"name":"Sarah Johnson","initial":"S","verified":true}"#)
                .unwrap();
        assert_eq!(recipient.rating, None);
        assert_eq!(recipient.rating_label(), "-");
        assert_eq!(recipient, ChatRecipient::new("Sarah Johnson", true));
    }

    #[test]
    fn test_sender_recipient_from_request() {
        let request = RequestData {
            title: "Books".to_string(),
            destination: "Lyon, France".to_string(),
            package_type: "Books".to_string(),
            weight: "1 kg".to_string(),
            reward: "$10".to_string(),
            sender: SenderSummary {
                name: "Marie Curie".to_string(),
                rating: "4.6".to_string(),
                deliveries: "12 deliveries".to_string(),
            },
            expected_delivery: "December 22, 2024".to_string(),
        };
        let recipient = request.sender_recipient();
        assert_eq!(recipient.initial, "M");
        assert_eq!(recipient.rating.as_deref(), Some("4.6"));
        assert!(recipient.verified);
    }

    #[test]
    fn test_initial_of_empty_name() {
        assert_eq!(initial_of(""), "");
        assert_eq!(initial_of("Émile"), "É");
    }
}
