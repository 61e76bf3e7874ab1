// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Splash Page

use super::go;
use crate::message::Message;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, text};
use cosmic::{theme, Element};
use shiplink_core::ScreenId;

const UNIVERSITIES: [&str; 4] = ["Stanford", "MIT", "TU Munich", "Oxford"];

pub fn view() -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut universities = widget::row().spacing(spacing.space_s);
    for name in UNIVERSITIES {
        universities = universities.push(text::caption(name));
    }

    container(
        widget::column()
            .push(widget::icon::from_name("package-x-generic-symbolic").size(96))
            .push(text::title1("ShipLink"))
            .push(text::body("Student-powered parcel delivery"))
            .push(widget::Space::with_height(spacing.space_l))
            .push(text::caption("Trusted at Universities"))
            .push(universities)
            .push(widget::Space::with_height(spacing.space_l))
            .push(button::suggested("Get Started").on_press(go(ScreenId::SignUp)))
            .push(button::text("Sign In").on_press(go(ScreenId::SignIn)))
            .spacing(spacing.space_s)
            .align_x(Alignment::Center),
    )
    .padding(spacing.space_l)
    .width(Length::Fill)
    .height(Length::Fill)
    .align_y(cosmic::iced::alignment::Vertical::Center)
    .into()
}
