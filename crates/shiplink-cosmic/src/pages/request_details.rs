// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Request Details Page

use super::{card, detail_row, go, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text};
use cosmic::{theme, Element};
use shiplink_core::sample;
use shiplink_core::{NavigationIntent, ScreenId};

pub fn view() -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;
    let request = sample::default_request();
    let sender_profile = sample::default_profile();
    let sender = request.sender_recipient();

    let route = card(
        widget::row()
            .push(widget::icon::from_name("mark-location-symbolic").size(32))
            .push(text::title4("Berlin → Munich"))
            .push(widget::horizontal_space())
            .push(text::caption("Current Location"))
            .align_y(Alignment::Center)
            .spacing(spacing.space_s),
    );

    let facts = card(
        widget::column()
            .push(text::title4(request.title.clone()))
            .push(detail_row("Destination", request.destination.clone()))
            .push(detail_row("Package Type", request.package_type.clone()))
            .push(detail_row("Weight", request.weight.clone()))
            .push(detail_row("Reward", request.reward.clone()))
            .push(detail_row("Expected Delivery", request.expected_delivery.clone()))
            .spacing(spacing.space_xs),
    );

    let sender_card = card(
        widget::row()
            .push(
                widget::column()
                    .push(text::caption("Sender"))
                    .push(text::title4(request.sender.name.clone()))
                    .push(text::caption(format!(
                        "★ {} • {}",
                        request.sender.rating, request.sender.deliveries
                    ))),
            )
            .push(widget::horizontal_space())
            .push(
                button::text("View Profile").on_press(go(
                    NavigationIntent::to(ScreenId::ViewUserProfile).profile(sender_profile),
                )),
            )
            .align_y(Alignment::Center),
    );

    let actions = widget::row()
        .push(
            button::text("Message")
                .on_press(go(NavigationIntent::to(ScreenId::Chat).recipient(sender))),
        )
        .push(widget::horizontal_space())
        .push(
            button::suggested("Accept Request")
                .on_press(go(NavigationIntent::to(ScreenId::RequestAccepted).request(request))),
        )
        .align_y(Alignment::Center);

    page(
        widget::column()
            .push(header(ScreenId::Home, "Request Details"))
            .push(route)
            .push(facts)
            .push(sender_card)
            .push(actions)
            .spacing(spacing.space_m),
    )
}
