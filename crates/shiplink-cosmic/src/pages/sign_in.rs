// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Sign In Page

use super::{go, header};
use crate::message::Message;
use cosmic::widget::{self, button, text, text_input};
use cosmic::{theme, Element, Task};
use shiplink_core::ScreenId;

#[derive(Debug, Clone)]
pub enum SignInMessage {
    EmailChanged(String),
    PasswordChanged(String),
}

/// Credentials are only held for display; any input signs in
pub struct SignInPage {
    email: String,
    password: String,
}

impl SignInPage {
    pub fn new() -> Self {
        Self {
            email: String::new(),
            password: String::new(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        widget::column()
            .push(header(ScreenId::Splash, "Sign In"))
            .push(text::title1("Welcome back"))
            .push(text::body("Sign in to continue shipping with fellow students"))
            .push(
                widget::column()
                    .push(text::body("Email or Phone"))
                    .push(
                        text_input("john@example.com or +1 234 567 8900", &self.email)
                            .on_input(|v| SignInMessage::EmailChanged(v).into()),
                    )
                    .spacing(spacing.space_xxs),
            )
            .push(
                widget::column()
                    .push(text::body("Password"))
                    .push(
                        text_input("••••••••", &self.password)
                            .on_input(|v| SignInMessage::PasswordChanged(v).into()),
                    )
                    .spacing(spacing.space_xxs),
            )
            .push(button::suggested("Sign In").on_press(go(ScreenId::Home)))
            .push(
                widget::row()
                    .push(text::body("Don't have an account?"))
                    .push(button::text("Sign Up").on_press(go(ScreenId::SignUp)))
                    .align_y(cosmic::iced::Alignment::Center)
                    .spacing(spacing.space_xxs),
            )
            .spacing(spacing.space_m)
            .padding(spacing.space_m)
            .into()
    }

    pub fn update(&mut self, message: SignInMessage) -> Task<Message> {
        match message {
            SignInMessage::EmailChanged(email) => {
                self.email = email;
                Task::none()
            }
            SignInMessage::PasswordChanged(password) => {
                self.password = password;
                Task::none()
            }
        }
    }
}
