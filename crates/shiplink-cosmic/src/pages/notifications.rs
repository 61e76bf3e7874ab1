// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Notifications Page

use super::{card, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, text};
use cosmic::{theme, Element};
use shiplink_core::sample::{self, NOTIFICATIONS};
use shiplink_core::ScreenId;

pub fn view() -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut list = widget::column().spacing(spacing.space_xs);
    for notification in NOTIFICATIONS.iter() {
        let mut title = widget::row()
            .push(text::body(notification.title))
            .spacing(spacing.space_xxs);
        if notification.unread {
            title = title.push(text::caption("•"));
        }

        let row = widget::row()
            .push(widget::icon::from_name(notification.kind.icon_name()).size(24))
            .push(
                widget::column()
                    .push(title)
                    .push(text::caption(notification.message))
                    .push(text::caption(notification.time))
                    .spacing(spacing.space_xxxs),
            )
            .align_y(Alignment::Center)
            .spacing(spacing.space_s);
        list = list.push(card(row));
    }

    page(
        widget::column()
            .push(header(ScreenId::Home, "Notifications"))
            .push(text::caption(format!(
                "{} unread",
                sample::unread_notifications()
            )))
            .push(list)
            .spacing(spacing.space_m),
    )
}
