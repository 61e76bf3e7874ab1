// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Available Travelers Page

use super::{card, go, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text};
use cosmic::{theme, Element};
use shiplink_core::sample::{format_rating, AvailableTraveler, AVAILABLE_TRAVELERS};
use shiplink_core::{NavigationIntent, ScreenId};

pub fn view() -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut list = widget::column().spacing(spacing.space_s);
    for traveler in AVAILABLE_TRAVELERS.iter() {
        list = list.push(traveler_card(traveler));
    }

    page(
        widget::column()
            .push(header(ScreenId::Home, "Available Travelers"))
            .push(text::caption(format!(
                "{} travelers heading your way",
                AVAILABLE_TRAVELERS.len()
            )))
            .push(list)
            .spacing(spacing.space_m),
    )
}

fn traveler_card(traveler: &AvailableTraveler) -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let contact = NavigationIntent::to(ScreenId::Chat)
        .recipient(traveler.to_chat_recipient())
        .profile(traveler.to_profile());

    card(
        widget::column()
            .push(
                widget::row()
                    .push(text::title4(traveler.name))
                    .push(widget::horizontal_space())
                    .push(text::caption(traveler.status)),
            )
            .push(text::caption(format!(
                "★ {} ({} reviews)",
                format_rating(traveler.rating),
                traveler.reviews
            )))
            .push(text::body(format!(
                "{} → {} · {}",
                traveler.from, traveler.to, traveler.date
            )))
            .push(text::caption(format!(
                "{} · {}",
                traveler.capacity, traveler.transport
            )))
            .push(
                widget::row()
                    .push(widget::horizontal_space())
                    .push(button::suggested("Contact").on_press(go(contact)))
                    .align_y(Alignment::Center),
            )
            .spacing(spacing.space_xxs),
    )
}
