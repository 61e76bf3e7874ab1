// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Privacy & Security Page

use super::{after, card, detail_row, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text, text_input, toggler};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::security::{PasswordField, SecurityForm, MIN_PASSWORD_LEN};
use shiplink_core::ScreenId;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum PrivacySecurityMessage {
    PasswordChanged(PasswordField, String),
    ChangePassword,
    NoticeElapsed,
    TwoFactorToggled(bool),
}

pub struct PrivacySecurityPage {
    form: SecurityForm,
    notice_delay: Duration,
}

impl PrivacySecurityPage {
    pub fn new(notice_delay: Duration) -> Self {
        Self {
            form: SecurityForm::default(),
            notice_delay,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut two_factor = widget::column()
            .push(
                widget::row()
                    .push(
                        widget::column()
                            .push(text::body("Two-Factor Authentication"))
                            .push(text::caption("Add an extra layer of security")),
                    )
                    .push(widget::horizontal_space())
                    .push(
                        toggler(self.form.two_factor_enabled)
                            .on_toggle(|v| PrivacySecurityMessage::TwoFactorToggled(v).into()),
                    )
                    .align_y(Alignment::Center),
            )
            .spacing(spacing.space_xs);
        if self.form.two_factor_enabled {
            two_factor = two_factor.push(text::caption("✓ 2FA Active"));
        }

        let mut password = widget::column()
            .push(text::title4("Change Password"))
            .spacing(spacing.space_s);
        if self.form.changed {
            password = password.push(text::body("✓ Password changed successfully!"));
        }
        if let Some(error) = &self.form.error {
            password = password.push(text::body(error.to_string()));
        }
        password = password
            .push(password_input(
                "Current Password",
                "Enter current password",
                PasswordField::Current,
                &self.form.current_password,
            ))
            .push(password_input(
                "New Password",
                "Enter new password",
                PasswordField::New,
                &self.form.new_password,
            ))
            .push(text::caption(format!(
                "Must be at least {} characters",
                MIN_PASSWORD_LEN
            )))
            .push(password_input(
                "Confirm New Password",
                "Confirm new password",
                PasswordField::Confirm,
                &self.form.confirm_password,
            ))
            .push(
                button::suggested("Update Password")
                    .on_press(PrivacySecurityMessage::ChangePassword.into()),
            );

        let privacy = widget::column()
            .push(text::title4("Privacy Controls"))
            .push(detail_row("Profile Visibility", "Students Only"))
            .push(detail_row("Show Activity Status", "On"))
            .push(detail_row("Data & Privacy", "→"))
            .spacing(spacing.space_xs);

        page(
            widget::column()
                .push(header(ScreenId::Profile, "Privacy & Security"))
                .push(card(two_factor))
                .push(card(password))
                .push(card(privacy))
                .spacing(spacing.space_m),
        )
    }

    pub fn update(&mut self, message: PrivacySecurityMessage) -> Task<Message> {
        match message {
            PrivacySecurityMessage::PasswordChanged(field, value) => {
                self.form.set(field, value);
                Task::none()
            }
            PrivacySecurityMessage::ChangePassword => match self.form.submit() {
                Ok(()) => after(self.notice_delay, PrivacySecurityMessage::NoticeElapsed.into()),
                Err(e) => {
                    tracing::debug!("Password change rejected: {}", e);
                    Task::none()
                }
            },
            PrivacySecurityMessage::NoticeElapsed => {
                self.form.dismiss_notice();
                Task::none()
            }
            PrivacySecurityMessage::TwoFactorToggled(enabled) => {
                if enabled != self.form.two_factor_enabled {
                    self.form.toggle_two_factor();
                }
                Task::none()
            }
        }
    }
}

fn password_input<'a>(
    label: &'static str,
    placeholder: &'static str,
    field: PasswordField,
    value: &'a str,
) -> Element<'a, Message> {
    widget::column()
        .push(text::body(label))
        .push(
            text_input(placeholder, value)
                .on_input(move |v| PrivacySecurityMessage::PasswordChanged(field, v).into()),
        )
        .spacing(theme::active().cosmic().spacing.space_xxs)
        .into()
}
