// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Notification Settings Page

use super::{card, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, text, toggler};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::notifications::{NotificationPreferences, NotificationToggle};
use shiplink_core::ScreenId;

#[derive(Debug, Clone)]
pub enum NotificationSettingsMessage {
    Toggled(NotificationToggle, bool),
}

pub struct NotificationSettingsPage {
    preferences: NotificationPreferences,
}

impl NotificationSettingsPage {
    pub fn new() -> Self {
        Self {
            preferences: NotificationPreferences::default(),
        }
    }

    fn section(&self, title: &'static str, toggles: &[NotificationToggle]) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut column = widget::column()
            .push(text::title4(title))
            .spacing(spacing.space_s);
        for toggle in toggles.iter().copied() {
            column = column.push(
                widget::row()
                    .push(
                        widget::column()
                            .push(text::body(toggle.label()))
                            .push(text::caption(toggle.description())),
                    )
                    .push(widget::horizontal_space())
                    .push(
                        toggler(self.preferences.get(toggle))
                            .on_toggle(move |v| NotificationSettingsMessage::Toggled(toggle, v).into()),
                    )
                    .align_y(Alignment::Center),
            );
        }
        card(column)
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        page(
            widget::column()
                .push(header(ScreenId::Profile, "Notifications"))
                .push(self.section("Notification Channels", &NotificationToggle::CHANNELS))
                .push(self.section("What to be notified about", &NotificationToggle::TOPICS))
                .spacing(spacing.space_m),
        )
    }

    pub fn update(&mut self, message: NotificationSettingsMessage) -> Task<Message> {
        match message {
            NotificationSettingsMessage::Toggled(toggle, enabled) => {
                tracing::debug!("{} set to {}", toggle.label(), enabled);
                self.preferences.set(toggle, enabled);
            }
        }
        Task::none()
    }
}
