// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Pages module
//
// One module per screen. Pages with local state own a struct with
// new/view/update; the rest are plain view functions over sample data.

pub mod about;
pub mod accepted_parcels;
pub mod all_requests;
pub mod available_travelers;
pub mod chat;
pub mod confirm_delivery;
pub mod create_request;
pub mod edit_profile;
pub mod handover_qr;
pub mod help_support;
pub mod home;
pub mod notification_settings;
pub mod notifications;
pub mod payment_methods;
pub mod privacy_security;
pub mod profile;
pub mod rate_peer;
pub mod request_accepted;
pub mod request_details;
pub mod search_results;
pub mod sign_in;
pub mod sign_up;
pub mod splash;
pub mod view_profile;

use crate::message::Message;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, text};
use cosmic::{theme, Element, Task};
use shiplink_core::{NavigationIntent, ScreenId};
use std::time::Duration;

/// Message that navigates straight to `intent`
pub fn go(intent: impl Into<NavigationIntent>) -> Message {
    Message::Navigate(intent.into())
}

/// Emit a message from an update handler
pub fn dispatch(message: Message) -> Task<Message> {
    cosmic::task::future(async move { message })
}

/// Emit a message once `delay` has elapsed
pub fn after(delay: Duration, message: Message) -> Task<Message> {
    cosmic::task::future(async move {
        tokio::time::sleep(delay).await;
        message
    })
}

/// Back arrow plus screen title
pub fn header<'a>(back: ScreenId, title: &'a str) -> Element<'a, Message> {
    widget::row()
        .push(button::icon(widget::icon::from_name("go-previous-symbolic")).on_press(go(back)))
        .push(text::title3(title))
        .push(widget::horizontal_space())
        .align_y(Alignment::Center)
        .spacing(theme::active().cosmic().spacing.space_s)
        .into()
}

pub fn card<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    container(content)
        .padding(theme::active().cosmic().spacing.space_s)
        .width(Length::Fill)
        .class(theme::Container::Card)
        .into()
}

/// Label on the left, value on the right
pub fn detail_row<'a>(label: &'a str, value: impl Into<String>) -> Element<'a, Message> {
    widget::row()
        .push(text::caption(label))
        .push(widget::horizontal_space())
        .push(text::body(value.into()))
        .align_y(Alignment::Center)
        .into()
}

/// Five stars; pressing one reports its position (1-based)
pub fn stars<'a>(rating: u8, on_press: impl Fn(u8) -> Message) -> Element<'a, Message> {
    let mut row = widget::row().spacing(theme::active().cosmic().spacing.space_xxs);
    for star in 1..=5u8 {
        let icon = if star <= rating {
            "starred-symbolic"
        } else {
            "non-starred-symbolic"
        };
        row = row.push(button::icon(widget::icon::from_name(icon)).on_press(on_press(star)));
    }
    row.into()
}

/// Read-only star row for reviews
pub fn star_label(rating: u8) -> String {
    (1..=5u8)
        .map(|star| if star <= rating { '★' } else { '☆' })
        .collect()
}

/// Zero-sized placeholder for optional content
pub fn empty<'a>() -> Element<'a, Message> {
    widget::Space::with_width(Length::Shrink).into()
}

/// Scrollable page body with the standard page padding
pub fn page<'a>(content: impl Into<Element<'a, Message>>) -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;
    widget::scrollable(container(content).padding(spacing.space_m)).into()
}
