// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Navigation and screen state for all frontends
//
// This crate provides:
// - ScreenId and the Router that moves between screens
// - Delayed navigations that can be cancelled or superseded
// - Sample travelers, parcels and notifications shown by the screens
// - Screen-local form state (chat, sign-up, wallet, ...)
// - AppSettings, AppError and the SettingsStore
//
// Rendering lives in the frontend crates.

pub mod forms;
pub mod router;
pub mod sample;
pub mod schedule;
pub mod screen;
pub mod search;
pub mod settings;
pub mod types;

// Re-export commonly used items
pub use forms::FormError;
pub use router::{
    AdjacencyGuard, AnyTransition, NavigationIntent, NavigationPayload, Router, RouterState,
    ScreenProps, TransitionGuard,
};
pub use schedule::{ScheduledNavigation, Ticket};
pub use screen::ScreenId;
pub use search::{search, RequestFilter, SearchResults};
pub use settings::SettingsStore;
pub use types::{
    AppError, AppSettings, ChatRecipient, PayloadRetention, RequestData, SenderSummary,
    UserProfileData,
};
