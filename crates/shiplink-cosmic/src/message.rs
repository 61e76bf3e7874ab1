// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Messages

use crate::pages;
use shiplink_core::{NavigationIntent, Ticket};
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum Message {
    // Navigation
    Navigate(NavigationIntent),
    NavigateAfter(Duration, NavigationIntent),
    DelayElapsed(Ticket),

    // Page-specific messages
    SignIn(pages::sign_in::SignInMessage),
    SignUp(pages::sign_up::SignUpMessage),
    Home(pages::home::HomeMessage),
    CreateRequest(pages::create_request::CreateRequestMessage),
    Chat(pages::chat::ChatMessage),
    ConfirmDelivery(pages::confirm_delivery::ConfirmDeliveryMessage),
    AllRequests(pages::all_requests::AllRequestsMessage),
    RatePeer(pages::rate_peer::RatePeerMessage),
    EditProfile(pages::edit_profile::EditProfileMessage),
    NotificationSettings(pages::notification_settings::NotificationSettingsMessage),
    PrivacySecurity(pages::privacy_security::PrivacySecurityMessage),
    PaymentMethods(pages::payment_methods::PaymentMethodsMessage),
    HelpSupport(pages::help_support::HelpSupportMessage),
    About(pages::about::AboutMessage),
}

impl From<NavigationIntent> for Message {
    fn from(intent: NavigationIntent) -> Self {
        Message::Navigate(intent)
    }
}

macro_rules! page_messages {
    ($($variant:ident => $ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Message {
                fn from(msg: $ty) -> Self {
                    Message::$variant(msg)
                }
            }
        )*
    };
}

page_messages! {
    SignIn => pages::sign_in::SignInMessage,
    SignUp => pages::sign_up::SignUpMessage,
    Home => pages::home::HomeMessage,
    CreateRequest => pages::create_request::CreateRequestMessage,
    Chat => pages::chat::ChatMessage,
    ConfirmDelivery => pages::confirm_delivery::ConfirmDeliveryMessage,
    AllRequests => pages::all_requests::AllRequestsMessage,
    RatePeer => pages::rate_peer::RatePeerMessage,
    EditProfile => pages::edit_profile::EditProfileMessage,
    NotificationSettings => pages::notification_settings::NotificationSettingsMessage,
    PrivacySecurity => pages::privacy_security::PrivacySecurityMessage,
    PaymentMethods => pages::payment_methods::PaymentMethodsMessage,
    HelpSupport => pages::help_support::HelpSupportMessage,
    About => pages::about::AboutMessage,
}
