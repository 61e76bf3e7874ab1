// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Rate Peer Page

use super::{card, dispatch, empty, header, page, stars};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text, text_input, toggler};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::delivery::RatePeerForm;
use shiplink_core::{FormError, ScreenId};

#[derive(Debug, Clone)]
pub enum RatePeerMessage {
    SetRating(u8),
    CommentChanged(String),
    ShareToggled(bool),
    Submit,
}

pub struct RatePeerPage {
    form: RatePeerForm,
    error: Option<FormError>,
}

impl RatePeerPage {
    pub fn new() -> Self {
        Self {
            form: RatePeerForm::default(),
            error: None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let peer = widget::column()
            .push(widget::icon::from_name("avatar-default-symbolic").size(64))
            .push(text::title4("Sarah Johnson"))
            .push(text::caption("Delivered your Electronics Package to Munich"))
            .spacing(spacing.space_xxs)
            .align_x(Alignment::Center);

        let rating = card(
            widget::column()
                .push(text::caption("How was your experience?"))
                .push(stars(self.form.rating, |star| RatePeerMessage::SetRating(star).into()))
                .push(text::body(self.form.rating_label()))
                .spacing(spacing.space_s)
                .align_x(Alignment::Center),
        );

        let share = card(
            widget::row()
                .push(
                    widget::column()
                        .push(text::body("Share to community feed"))
                        .push(text::caption("Help other students find reliable travelers")),
                )
                .push(widget::horizontal_space())
                .push(
                    toggler(self.form.share_to_feed)
                        .on_toggle(|v| RatePeerMessage::ShareToggled(v).into()),
                )
                .align_y(Alignment::Center),
        );

        let error: Element<Message> = match &self.error {
            Some(e) => text::body(e.to_string()).into(),
            None => empty(),
        };

        let submit = if self.form.rating > 0 {
            button::suggested("Submit Review").on_press(RatePeerMessage::Submit.into())
        } else {
            button::suggested("Submit Review")
        };

        page(
            widget::column()
                .push(header(ScreenId::Home, "Rate Your Peer"))
                .push(peer)
                .push(rating)
                .push(
                    text_input("Write a public thank-you note to Sarah...", &self.form.comment)
                        .on_input(|v| RatePeerMessage::CommentChanged(v).into()),
                )
                .push(share)
                .push(error)
                .push(submit)
                .push(text::caption("Reviews are public and help build trust in the community"))
                .spacing(spacing.space_m),
        )
    }

    pub fn update(&mut self, message: RatePeerMessage) -> Task<Message> {
        match message {
            RatePeerMessage::SetRating(star) => {
                self.form.set_rating(star);
                self.error = None;
                Task::none()
            }
            RatePeerMessage::CommentChanged(comment) => {
                self.form.comment = comment;
                Task::none()
            }
            RatePeerMessage::ShareToggled(share) => {
                if share != self.form.share_to_feed {
                    self.form.toggle_share();
                }
                Task::none()
            }
            RatePeerMessage::Submit => match self.form.submit() {
                Ok(intent) => dispatch(Message::Navigate(intent)),
                Err(e) => {
                    self.error = Some(e);
                    Task::none()
                }
            },
        }
    }
}
