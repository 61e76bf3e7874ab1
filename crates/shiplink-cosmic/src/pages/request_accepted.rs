// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Request Accepted Page

use super::{card, detail_row, go, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text};
use cosmic::{theme, Element};
use shiplink_core::{NavigationIntent, RequestData, ScreenId};

const NEXT_STEPS: [&str; 3] = [
    "Coordinate pickup details with the sender",
    "Ensure package is properly secured for travel",
    "Update delivery status upon completion",
];

pub fn view(request: RequestData) -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let summary = card(
        widget::column()
            .push(
                widget::row()
                    .push(text::title4(request.title.clone()))
                    .push(widget::horizontal_space())
                    .push(text::caption("Active")),
            )
            .push(detail_row("Destination", request.destination.clone()))
            .push(detail_row("Package Type", request.package_type.clone()))
            .push(detail_row("Weight", request.weight.clone()))
            .push(detail_row("Reward", request.reward.clone()))
            .push(detail_row("Expected Delivery", request.expected_delivery.clone()))
            .spacing(spacing.space_xs),
    );

    let sender = card(
        widget::column()
            .push(text::caption("Sender"))
            .push(text::title4(request.sender.name.clone()))
            .push(text::caption(format!(
                "★ {} • {}",
                request.sender.rating, request.sender.deliveries
            ))),
    );

    let mut steps = widget::column()
        .push(text::title4("Next Steps"))
        .spacing(spacing.space_xxs);
    for step in NEXT_STEPS {
        steps = steps.push(text::body(format!("• {}", step)));
    }

    // The chat opens with the sender and keeps the request in its slot
    let chat = NavigationIntent::to(ScreenId::Chat)
        .recipient(request.sender_recipient())
        .request(request);

    page(
        widget::column()
            .push(
                widget::column()
                    .push(widget::icon::from_name("emblem-ok-symbolic").size(96))
                    .push(text::title3("Request Accepted!"))
                    .push(text::body("You're now responsible for this delivery"))
                    .spacing(spacing.space_s)
                    .align_x(Alignment::Center),
            )
            .push(summary)
            .push(sender)
            .push(card(steps))
            .push(button::suggested("Message Sender").on_press(go(chat)))
            .push(button::text("Back to Home").on_press(go(ScreenId::Home)))
            .spacing(spacing.space_m),
    )
}
