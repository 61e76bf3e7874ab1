// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Search Results Page

use super::{card, go, header, page};
use crate::message::Message;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, text};
use cosmic::{theme, Element};
use shiplink_core::sample::format_rating;
use shiplink_core::{search, ScreenId};

pub fn view(query: &str) -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;
    let results = search(query);

    let summary = text::caption(format!(
        "{} results for \"{}\"",
        results.total(),
        results.query
    ));

    let content: Element<Message> = if !results.has_results() {
        container(
            widget::column()
                .push(widget::icon::from_name("system-search-symbolic").size(64))
                .push(text::title4("No results found"))
                .push(text::body("Try a different city or name"))
                .spacing(spacing.space_s)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(spacing.space_l)
        .into()
    } else {
        let mut column = widget::column().spacing(spacing.space_s);

        if !results.travelers.is_empty() {
            column = column.push(text::title4(format!("Travelers ({})", results.travelers.len())));
        }
        for traveler in &results.travelers {
            let mut name = widget::row()
                .push(text::body(traveler.name))
                .spacing(spacing.space_xxs);
            if traveler.verified_student {
                name = name.push(text::caption("Verified Student"));
            }
            column = column.push(card(
                widget::row()
                    .push(
                        widget::column()
                            .push(name)
                            .push(text::caption(format!(
                                "{} → {} · {}",
                                traveler.from, traveler.to, traveler.date
                            )))
                            .push(text::caption(format!("★ {}", format_rating(traveler.rating)))),
                    )
                    .push(widget::horizontal_space())
                    .push(button::text("Chat").on_press(go(ScreenId::Chat)))
                    .align_y(Alignment::Center),
            ));
        }

        if !results.parcels.is_empty() {
            column = column.push(text::title4(format!("Parcels ({})", results.parcels.len())));
        }
        for parcel in &results.parcels {
            column = column.push(card(
                widget::row()
                    .push(
                        widget::column()
                            .push(text::body(parcel.title))
                            .push(text::caption(format!("{} → {}", parcel.from, parcel.to)))
                            .push(text::caption(format!("{} · {}", parcel.weight, parcel.status))),
                    )
                    .push(widget::horizontal_space())
                    .push(text::title4(parcel.reward))
                    .push(
                        button::icon(widget::icon::from_name("go-next-symbolic"))
                            .on_press(go(ScreenId::RequestDetails)),
                    )
                    .align_y(Alignment::Center)
                    .spacing(spacing.space_s),
            ));
        }

        column.into()
    };

    page(
        widget::column()
            .push(header(ScreenId::Home, "Search Results"))
            .push(summary)
            .push(content)
            .spacing(spacing.space_m),
    )
}
