// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Handover QR Page

use super::{card, go, header, page};
use crate::message::Message;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, text};
use cosmic::{theme, Element};
use shiplink_core::sample::HANDOVER_CODE;
use shiplink_core::ScreenId;

pub fn view() -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let code = container(
        widget::column()
            .push(widget::icon::from_name("view-grid-symbolic").size(192))
            .push(text::title3(HANDOVER_CODE))
            .spacing(spacing.space_s)
            .align_x(Alignment::Center),
    )
    .width(Length::Fill)
    .padding(spacing.space_l)
    .class(theme::Container::Card);

    let parcel = card(
        widget::column()
            .push(text::caption("Parcel Details"))
            .push(text::title4("Electronics Package"))
            .push(text::body("Berlin → Munich")),
    );

    let notice = card(
        widget::column()
            .push(text::body("🔒 Secure Handover"))
            .push(text::caption(
                "Once scanned, the sender confirms you have the parcel. The $45 payment will be released to you after successful delivery.",
            ))
            .spacing(spacing.space_xxs),
    );

    page(
        widget::column()
            .push(header(ScreenId::AcceptedParcels, "Handover QR Code"))
            .push(text::body("The sender will scan this code to confirm handover"))
            .push(code)
            .push(parcel)
            .push(notice)
            .push(
                button::suggested("Confirm Handover Scan")
                    .on_press(go(ScreenId::ConfirmDelivery)),
            )
            .spacing(spacing.space_m),
    )
}
