// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - View User Profile Page

use super::{card, detail_row, header, page, star_label};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, text};
use cosmic::{theme, Element};
use shiplink_core::sample::REVIEWS;
use shiplink_core::{ScreenId, UserProfileData};

pub fn view(profile: UserProfileData) -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut badges = widget::row().spacing(spacing.space_xs);
    if profile.verified {
        badges = badges
            .push(text::caption("✓ Verified Student"))
            .push(text::caption("✓ ID Verified"));
    }
    badges = badges.push(text::caption("★ Top Carrier"));

    let identity = widget::column()
        .push(text::title1(profile.initial.clone()))
        .push(text::title3(profile.name.clone()))
        .push(badges)
        .spacing(spacing.space_xs)
        .align_x(Alignment::Center);

    let details = card(
        widget::column()
            .push(text::title4("Student Details"))
            .push(detail_row("University", profile.university.clone()))
            .push(detail_row("Major", profile.major.clone()))
            .push(detail_row("Year", profile.year.clone()))
            .push(detail_row("Location", profile.location.clone()))
            .push(detail_row("Member Since", profile.member_since.clone()))
            .spacing(spacing.space_xs),
    );

    let mut activity = widget::row().spacing(spacing.space_s);
    for (value, label) in [
        (profile.total_deliveries.clone(), "Deliveries"),
        (profile.success_rate.clone(), "Success"),
        (profile.rating.clone(), "Rating"),
    ] {
        activity = activity.push(
            widget::column()
                .push(text::title4(value))
                .push(text::caption(label))
                .align_x(Alignment::Center),
        );
    }

    let mut reviews = widget::column()
        .push(text::title4(format!("Reviews ({})", profile.review_count)))
        .spacing(spacing.space_s);
    for review in REVIEWS.iter() {
        reviews = reviews.push(
            widget::column()
                .push(
                    widget::row()
                        .push(text::body(review.reviewer))
                        .push(widget::horizontal_space())
                        .push(text::caption(star_label(review.rating))),
                )
                .push(text::caption(review.comment))
                .push(text::caption(review.date))
                .spacing(spacing.space_xxxs),
        );
    }

    page(
        widget::column()
            .push(header(ScreenId::Chat, "Profile"))
            .push(identity)
            .push(details)
            .push(card(
                widget::column()
                    .push(text::title4("Activity"))
                    .push(activity)
                    .spacing(spacing.space_xs),
            ))
            .push(card(
                widget::column()
                    .push(text::title4("About"))
                    .push(text::body(profile.about.clone()))
                    .spacing(spacing.space_xs),
            ))
            .push(card(reviews))
            .spacing(spacing.space_m),
    )
}
