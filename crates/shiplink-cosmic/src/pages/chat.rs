// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Chat Page

use super::{empty, go};
use crate::message::Message;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, text, text_input};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::chat::{ChatThread, MessageBody, Sender};
use shiplink_core::{ChatRecipient, NavigationIntent, ScreenId, UserProfileData};

/// Simulated device position shared from the attach menu (Munich)
const SHARED_POSITION: (f64, f64) = (48.135_125, 11.581_981);

/// Name given to the simulated photo attachment
const PHOTO_NAME: &str = "photo.jpg";

#[derive(Debug, Clone)]
pub enum ChatMessage {
    DraftChanged(String),
    Send,
    ToggleAttachMenu,
    AttachPhoto,
    ShareLocation,
    OpenMap(f64, f64),
}

pub struct ChatPage {
    thread: ChatThread,
}

impl ChatPage {
    pub fn new() -> Self {
        Self {
            thread: ChatThread::seeded(),
        }
    }

    pub fn view(
        &self,
        recipient: ChatRecipient,
        profile: Option<UserProfileData>,
    ) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        // Counterpart header; the profile slot is forwarded as-is
        let mut view_profile = NavigationIntent::to(ScreenId::ViewUserProfile);
        if let Some(profile) = profile {
            view_profile = view_profile.profile(profile);
        }

        let mut name_row = widget::row()
            .push(text::title4(recipient.name.clone()))
            .spacing(spacing.space_xxs)
            .align_y(Alignment::Center);
        if recipient.verified {
            name_row = name_row.push(widget::icon::from_name("emblem-ok-symbolic").size(16));
        }

        let mut subtitle = format!("★ {}", recipient.rating_label());
        if let Some(deliveries) = &recipient.deliveries {
            subtitle.push_str(&format!(" • {}", deliveries));
        }

        let header = widget::row()
            .push(
                button::icon(widget::icon::from_name("go-previous-symbolic"))
                    .on_press(go(ScreenId::Home)),
            )
            .push(text::title3(recipient.initial.clone()))
            .push(
                widget::column()
                    .push(name_row)
                    .push(text::caption(subtitle)),
            )
            .push(widget::horizontal_space())
            .push(
                button::icon(widget::icon::from_name("avatar-default-symbolic"))
                    .on_press(go(view_profile)),
            )
            .align_y(Alignment::Center)
            .spacing(spacing.space_s);

        let escrow = container(text::body("🔒 $45 Secure in Escrow"))
            .padding(spacing.space_xs)
            .width(Length::Fill)
            .class(theme::Container::Card);

        // Conversation
        let mut messages = widget::column()
            .push(text::caption(
                "Payment is held in escrow and released once the parcel is delivered.",
            ))
            .spacing(spacing.space_s);
        for message in self.thread.messages() {
            let body: Element<Message> = match &message.body {
                MessageBody::Text(content) => text::body(content.as_str()).into(),
                MessageBody::Image(name) => widget::row()
                    .push(widget::icon::from_name("image-x-generic-symbolic").size(32))
                    .push(text::body(name.as_str()))
                    .spacing(spacing.space_xs)
                    .align_y(Alignment::Center)
                    .into(),
                MessageBody::Location {
                    latitude,
                    longitude,
                } => button::text(format!("📍 My Location\n{:.6}, {:.6}", latitude, longitude))
                    .on_press(ChatMessage::OpenMap(*latitude, *longitude).into())
                    .into(),
            };

            let bubble = container(
                widget::column()
                    .push(body)
                    .push(text::caption(message.time.as_str()))
                    .spacing(spacing.space_xxxs),
            )
            .padding(spacing.space_xs)
            .class(theme::Container::Card);

            let row = match message.sender {
                Sender::Me => widget::row().push(widget::horizontal_space()).push(bubble),
                Sender::Other => widget::row().push(bubble).push(widget::horizontal_space()),
            };
            messages = messages.push(row);
        }

        // Attach menu
        let attach_menu: Element<Message> = if self.thread.show_attach_menu {
            widget::row()
                .push(button::text("Share Location").on_press(ChatMessage::ShareLocation.into()))
                .push(button::text("Photos").on_press(ChatMessage::AttachPhoto.into()))
                .spacing(spacing.space_s)
                .into()
        } else {
            empty()
        };

        let send_button = if self.thread.draft.trim().is_empty() {
            button::icon(widget::icon::from_name("mail-send-symbolic"))
        } else {
            button::icon(widget::icon::from_name("mail-send-symbolic"))
                .on_press(ChatMessage::Send.into())
        };

        let composer = widget::row()
            .push(
                button::icon(widget::icon::from_name("list-add-symbolic"))
                    .on_press(ChatMessage::ToggleAttachMenu.into()),
            )
            .push(
                text_input("Type a message...", &self.thread.draft)
                    .on_input(|v| ChatMessage::DraftChanged(v).into()),
            )
            .push(send_button)
            .align_y(Alignment::Center)
            .spacing(spacing.space_xs);

        widget::column()
            .push(header)
            .push(escrow)
            .push(widget::scrollable(messages).height(Length::Fill))
            .push(attach_menu)
            .push(composer)
            .spacing(spacing.space_s)
            .padding(spacing.space_m)
            .into()
    }

    pub fn update(&mut self, message: ChatMessage) -> Task<Message> {
        match message {
            ChatMessage::DraftChanged(draft) => {
                self.thread.draft = draft;
            }
            ChatMessage::Send => {
                self.thread.send_draft();
            }
            ChatMessage::ToggleAttachMenu => self.thread.toggle_attach_menu(),
            ChatMessage::AttachPhoto => {
                self.thread.attach_image(PHOTO_NAME);
            }
            ChatMessage::ShareLocation => {
                let (latitude, longitude) = SHARED_POSITION;
                self.thread.share_location(latitude, longitude);
            }
            ChatMessage::OpenMap(latitude, longitude) => {
                let url = format!("https://www.google.com/maps?q={},{}", latitude, longitude);
                if let Err(e) = open::that(&url) {
                    tracing::warn!("Failed to open map: {}", e);
                }
            }
        }
        Task::none()
    }
}
