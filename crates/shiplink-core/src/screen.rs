// SPDX-License-Identifier: AGPL-3.0
// ShipLink Core - Screen identifiers

use crate::types::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Every screen the prototype can show
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ScreenId {
    #[default]
    Splash,
    SignIn,
    SignUp,
    Home,
    CreateRequest,
    RequestDetails,
    Chat,
    ConfirmDelivery,
    Notifications,
    Profile,
    AcceptedParcels,
    AvailableTravelers,
    AllRequests,
    RequestAccepted,
    HandoverQr,
    SearchResults,
    RatePeer,
    ViewUserProfile,
    EditProfile,
    NotificationSettings,
    PrivacySecurity,
    PaymentMethods,
    HelpSupport,
    About,
}

impl ScreenId {
    pub const ALL: [ScreenId; 24] = [
        ScreenId::Splash,
        ScreenId::SignIn,
        ScreenId::SignUp,
        ScreenId::Home,
        ScreenId::CreateRequest,
        ScreenId::RequestDetails,
        ScreenId::Chat,
        ScreenId::ConfirmDelivery,
        ScreenId::Notifications,
        ScreenId::Profile,
        ScreenId::AcceptedParcels,
        ScreenId::AvailableTravelers,
        ScreenId::AllRequests,
        ScreenId::RequestAccepted,
        ScreenId::HandoverQr,
        ScreenId::SearchResults,
        ScreenId::RatePeer,
        ScreenId::ViewUserProfile,
        ScreenId::EditProfile,
        ScreenId::NotificationSettings,
        ScreenId::PrivacySecurity,
        ScreenId::PaymentMethods,
        ScreenId::HelpSupport,
        ScreenId::About,
    ];

    /// Stable route name, used in settings files and logs
    pub fn route(&self) -> &'static str {
        match self {
            Self::Splash => "splash",
            Self::SignIn => "signin",
            Self::SignUp => "signup",
            Self::Home => "home",
            Self::CreateRequest => "create",
            Self::RequestDetails => "details",
            Self::Chat => "chat",
            Self::ConfirmDelivery => "confirm",
            Self::Notifications => "notifications",
            Self::Profile => "profile",
            Self::AcceptedParcels => "parcels",
            Self::AvailableTravelers => "travelers",
            Self::AllRequests => "all-requests",
            Self::RequestAccepted => "request-accepted",
            Self::HandoverQr => "handover-qr",
            Self::SearchResults => "search",
            Self::RatePeer => "rate-peer",
            Self::ViewUserProfile => "view-user-profile",
            Self::EditProfile => "edit-profile",
            Self::NotificationSettings => "notification-settings",
            Self::PrivacySecurity => "privacy-security",
            Self::PaymentMethods => "payment-methods",
            Self::HelpSupport => "help-support",
            Self::About => "about-shiplink",
        }
    }

    /// Header title for this screen
    pub fn title(&self) -> &'static str {
        match self {
            Self::Splash => "ShipLink",
            Self::SignIn => "Sign In",
            Self::SignUp => "Create Account",
            Self::Home => "Home",
            Self::CreateRequest => "New Request",
            Self::RequestDetails => "Request Details",
            Self::Chat => "Chat",
            Self::ConfirmDelivery => "Confirm Delivery",
            Self::Notifications => "Notifications",
            Self::Profile => "Profile",
            Self::AcceptedParcels => "My Parcels",
            Self::AvailableTravelers => "Available Travelers",
            Self::AllRequests => "All Requests",
            Self::RequestAccepted => "Request Accepted",
            Self::HandoverQr => "Handover",
            Self::SearchResults => "Search Results",
            Self::RatePeer => "Rate Your Peer",
            Self::ViewUserProfile => "User Profile",
            Self::EditProfile => "Edit Profile",
            Self::NotificationSettings => "Notification Settings",
            Self::PrivacySecurity => "Privacy & Security",
            Self::PaymentMethods => "Payment Methods",
            Self::HelpSupport => "Help & Support",
            Self::About => "About ShipLink",
        }
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.route())
    }
}

impl FromStr for ScreenId {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|screen| screen.route() == s)
            .ok_or_else(|| AppError::UnknownScreen(s.to_string()))
    }
}

impl Serialize for ScreenId {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.route())
    }
}

impl<'de> Deserialize<'de> for ScreenId {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let route = String::deserialize(deserializer)?;
        route.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_routes_are_unique() {
        let routes: HashSet<_> = ScreenId::ALL.iter().map(ScreenId::route).collect();
        assert_eq!(routes.len(), ScreenId::ALL.len());
    }

    #[test]
    fn test_route_parse_round_trip() {
        for screen in ScreenId::ALL {
            assert_eq!(screen.route().parse::<ScreenId>().unwrap(), screen);
        }
    }

    #[test]
    fn test_unknown_route_is_an_error() {
        let err = "checkout".parse::<ScreenId>().unwrap_err();
        assert!(matches!(err, AppError::UnknownScreen(ref s) if s == "checkout"));
    }

    #[test]
    fn test_serializes_as_route() {
        let json = serde_json::to_string(&ScreenId::ViewUserProfile).unwrap();
        assert_eq!(json, "\"view-user-profile\"");
        assert!(serde_json::from_str::<ScreenId>("\"nowhere\"").is_err());
    }

    #[test]
    fn test_initial_screen_is_splash() {
        assert_eq!(ScreenId::default(), ScreenId::Splash);
    }
}
