// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Profile Page (signed-in user)

use super::{card, go, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text};
use cosmic::{theme, Element};
use shiplink_core::ScreenId;

const ACCOUNT_MENU: [(&str, &str, ScreenId); 4] = [
    ("document-edit-symbolic", "Edit Profile", ScreenId::EditProfile),
    ("notification-symbolic", "Notifications", ScreenId::NotificationSettings),
    ("changes-prevent-symbolic", "Privacy & Security", ScreenId::PrivacySecurity),
    ("payment-card-symbolic", "Payment Methods", ScreenId::PaymentMethods),
];

const SUPPORT_MENU: [(&str, &str, ScreenId); 2] = [
    ("help-browser-symbolic", "Help & Support", ScreenId::HelpSupport),
    ("help-about-symbolic", "About ShipLink", ScreenId::About),
];

const STATS: [(&str, &str); 3] = [("4.9", "Rating"), ("24", "Sent"), ("18", "Delivered")];

pub fn view() -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let identity = widget::column()
        .push(widget::icon::from_name("avatar-default-symbolic").size(96))
        .push(
            widget::row()
                .push(text::title3("Alex Thompson"))
                .push(widget::icon::from_name("emblem-ok-symbolic").size(16))
                .align_y(Alignment::Center)
                .spacing(spacing.space_xxs),
        )
        .push(text::caption("Stanford University · Verified Student"))
        .spacing(spacing.space_xxs)
        .align_x(Alignment::Center);

    let mut stats = widget::row().spacing(spacing.space_s);
    for (value, label) in STATS {
        stats = stats.push(card(
            widget::column()
                .push(text::title4(value))
                .push(text::caption(label))
                .align_x(Alignment::Center),
        ));
    }

    let contact = card(
        widget::column()
            .push(text::body("alex.thompson@email.com"))
            .push(text::body("+1 (555) 123-4567"))
            .push(text::caption("MEMBER SINCE"))
            .push(text::body("January 2024"))
            .spacing(spacing.space_xxs),
    );

    page(
        widget::column()
            .push(header(ScreenId::Home, "Profile"))
            .push(identity)
            .push(stats)
            .push(contact)
            .push(menu("Account", &ACCOUNT_MENU))
            .push(menu("Support", &SUPPORT_MENU))
            .push(button::destructive("Log Out").on_press(go(ScreenId::Splash)))
            .spacing(spacing.space_m),
    )
}

fn menu(
    title: &'static str,
    items: &[(&'static str, &'static str, ScreenId)],
) -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut column = widget::column()
        .push(text::title4(title))
        .spacing(spacing.space_xs);
    for (icon, label, target) in items {
        column = column.push(
            widget::row()
                .push(widget::icon::from_name(*icon).size(20))
                .push(text::body(*label))
                .push(widget::horizontal_space())
                .push(
                    button::icon(widget::icon::from_name("go-next-symbolic"))
                        .on_press(go(*target)),
                )
                .align_y(Alignment::Center)
                .spacing(spacing.space_s),
        );
    }
    card(column)
}
