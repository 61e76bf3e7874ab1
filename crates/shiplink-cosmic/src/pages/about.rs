// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - About Page

use super::{card, detail_row, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text};
use cosmic::{theme, Element, Task};
use shiplink_core::ScreenId;

const APP_VERSION: &str = "2.4.1";
const CONTACT_EMAIL: &str = "mailto:hello@shiplink.com";
const PRESS_EMAIL: &str = "mailto:press@shiplink.com";

const STATS: [(&str, &str); 4] = [
    ("Active Students", "50,000+"),
    ("Deliveries Completed", "250,000+"),
    ("Universities", "500+"),
    ("Success Rate", "99.2%"),
];

const FEATURES: [(&str, &str); 3] = [
    (
        "Verified Students Only",
        "All users are verified with .edu emails or student IDs for your safety",
    ),
    (
        "Secure Escrow System",
        "Payments held safely until delivery is confirmed by both parties",
    ),
    (
        "Community Driven",
        "Built by students, for students. Help each other save money and travel smarter",
    ),
];

const LEGAL: [&str; 4] = [
    "Terms of Service",
    "Privacy Policy",
    "Community Guidelines",
    "Open Source Licenses",
];

#[derive(Debug, Clone)]
pub enum AboutMessage {
    EmailUs,
    EmailPress,
}

pub fn view<'a>() -> Element<'a, Message> {
    let spacing = theme::active().cosmic().spacing;

    let hero = widget::column()
        .push(widget::icon::from_name("package-x-generic-symbolic").size(64))
        .push(text::title1("ShipLink"))
        .push(text::body(format!("Version {}", APP_VERSION)))
        .push(text::caption("Student-to-Student Delivery Network"))
        .align_x(Alignment::Center)
        .spacing(spacing.space_xxs);

    let mission = widget::column()
        .push(text::title4("Our Mission"))
        .push(text::body(
            "Founded in 2025 by international students, ShipLink is redefining student logistics. \
             Traditional courier services were never built for the global, mobile lifestyle of a university student.",
        ))
        .push(text::body(
            "We built a secure, peer-to-peer ecosystem centered on Trust through Verification and Financial Transparency. \
             Student networks make international shipping affordable, fast and remarkably human.",
        ))
        .spacing(spacing.space_xs);

    let stats = STATS.iter().fold(
        widget::column()
            .push(text::title4("By The Numbers"))
            .spacing(spacing.space_xs),
        |col, (label, value)| col.push(detail_row(label, *value)),
    );

    let features = FEATURES.iter().fold(
        widget::column()
            .push(text::title4("What Makes Us Different"))
            .spacing(spacing.space_s),
        |col, (title, body)| {
            col.push(
                widget::column()
                    .push(text::body(*title))
                    .push(text::caption(*body))
                    .spacing(spacing.space_xxxs),
            )
        },
    );

    let legal = LEGAL.iter().fold(
        widget::column()
            .push(text::title4("Legal & Policies"))
            .spacing(spacing.space_xs),
        |col, label| col.push(detail_row(label, "→")),
    );

    let contact = widget::column()
        .push(text::title4("Get In Touch"))
        .push(button::text("Email: hello@shiplink.com").on_press(AboutMessage::EmailUs.into()))
        .push(text::body("Support: support@shiplink.com"))
        .push(button::text("Press: press@shiplink.com").on_press(AboutMessage::EmailPress.into()))
        .spacing(spacing.space_xs);

    page(
        widget::column()
            .push(header(ScreenId::Profile, "About ShipLink"))
            .push(hero)
            .push(card(mission))
            .push(card(stats))
            .push(card(features))
            .push(card(legal))
            .push(card(contact))
            .push(text::caption("© 2024 ShipLink, Inc. All rights reserved."))
            .spacing(spacing.space_m)
            .align_x(Alignment::Center),
    )
}

pub fn update(message: AboutMessage) -> Task<Message> {
    let target = match message {
        AboutMessage::EmailUs => CONTACT_EMAIL,
        AboutMessage::EmailPress => PRESS_EMAIL,
    };
    if let Err(e) = open::that(target) {
        tracing::warn!("Failed to open {}: {}", target, e);
    }
    Task::none()
}
