// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Accepted Parcels Page

use super::{card, detail_row, go, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text};
use cosmic::{theme, Element};
use shiplink_core::sample::{AcceptedParcel, ACCEPTED_PARCELS};
use shiplink_core::ScreenId;

const TIMELINE: [&str; 3] = ["Picked Up", "In Transit", "Delivered"];

pub fn view() -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut list = widget::column().spacing(spacing.space_s);
    for parcel in ACCEPTED_PARCELS.iter() {
        list = list.push(parcel_card(parcel));
    }

    page(
        widget::column()
            .push(header(ScreenId::Home, "Accepted Parcels"))
            .push(text::caption(format!("{} active deliveries", ACCEPTED_PARCELS.len())))
            .push(list)
            .spacing(spacing.space_m),
    )
}

fn parcel_card(parcel: &AcceptedParcel) -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    // Steps up to and including the current status are marked done
    let reached = TIMELINE.iter().position(|step| *step == parcel.status);
    let mut timeline = widget::row().spacing(spacing.space_xs);
    for (idx, step) in TIMELINE.iter().enumerate() {
        let marker = if reached.is_some_and(|r| idx <= r) { "●" } else { "○" };
        timeline = timeline.push(text::caption(format!("{} {}", marker, step)));
    }

    card(
        widget::column()
            .push(
                widget::row()
                    .push(text::title4(parcel.title))
                    .push(widget::horizontal_space())
                    .push(text::caption(parcel.status)),
            )
            .push(text::caption(format!("{} → {}", parcel.from, parcel.to)))
            .push(detail_row("Type", parcel.kind))
            .push(detail_row("Weight", parcel.weight))
            .push(detail_row("Dimensions", parcel.dimensions))
            .push(detail_row("Date", parcel.date))
            .push(detail_row("Reward", parcel.reward))
            .push(detail_row("Traveler", parcel.traveler))
            .push(text::caption("Delivery Timeline"))
            .push(timeline)
            .push(
                widget::row()
                    .push(widget::horizontal_space())
                    .push(
                        button::suggested("Show Handover QR")
                            .on_press(go(ScreenId::HandoverQr)),
                    )
                    .align_y(Alignment::Center),
            )
            .spacing(spacing.space_xxs),
    )
}
