// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Confirm Delivery Page

use super::{card, dispatch, go, header, page, stars};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text, text_input};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::delivery::ConfirmDeliveryForm;
use shiplink_core::ScreenId;

#[derive(Debug, Clone)]
pub enum ConfirmDeliveryMessage {
    SetRating(u8),
    FeedbackChanged(String),
    Submit,
}

pub struct ConfirmDeliveryPage {
    form: ConfirmDeliveryForm,
}

impl ConfirmDeliveryPage {
    pub fn new() -> Self {
        Self {
            form: ConfirmDeliveryForm::default(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let parcel = card(
            widget::row()
                .push(widget::icon::from_name("package-x-generic-symbolic").size(48))
                .push(
                    widget::column()
                        .push(text::title4("Electronics Package"))
                        .push(text::caption("Delivered to Munich")),
                )
                .push(widget::horizontal_space())
                .push(
                    widget::column()
                        .push(text::caption("Reward Earned"))
                        .push(text::title4("$45")),
                )
                .align_y(Alignment::Center)
                .spacing(spacing.space_s),
        );

        let rating = card(
            widget::column()
                .push(text::title4("Rate your experience"))
                .push(
                    widget::row()
                        .push(text::title3("S"))
                        .push(
                            widget::column()
                                .push(text::body("Sarah Johnson"))
                                .push(text::caption("Traveler")),
                        )
                        .align_y(Alignment::Center)
                        .spacing(spacing.space_s),
                )
                .push(stars(self.form.rating, |star| {
                    ConfirmDeliveryMessage::SetRating(star).into()
                }))
                .push(
                    text_input("Share your experience with Sarah...", &self.form.feedback)
                        .on_input(|v| ConfirmDeliveryMessage::FeedbackChanged(v).into()),
                )
                .spacing(spacing.space_s)
                .align_x(Alignment::Center),
        );

        page(
            widget::column()
                .push(header(ScreenId::Home, "Confirm Delivery"))
                .push(
                    widget::column()
                        .push(widget::icon::from_name("emblem-ok-symbolic").size(96))
                        .push(text::title1("Confirm Delivery"))
                        .push(text::body("Thank you!"))
                        .align_x(Alignment::Center),
                )
                .push(parcel)
                .push(rating)
                .push(
                    button::suggested("Confirm & Release Payment")
                        .on_press(ConfirmDeliveryMessage::Submit.into()),
                )
                .push(button::text("Write a public review").on_press(go(ScreenId::RatePeer)))
                .push(text::caption(
                    "The payment held in escrow is released to the traveler once you confirm.",
                ))
                .spacing(spacing.space_m),
        )
    }

    pub fn update(&mut self, message: ConfirmDeliveryMessage) -> Task<Message> {
        match message {
            ConfirmDeliveryMessage::SetRating(star) => {
                self.form.set_rating(star);
                Task::none()
            }
            ConfirmDeliveryMessage::FeedbackChanged(feedback) => {
                self.form.feedback = feedback;
                Task::none()
            }
            ConfirmDeliveryMessage::Submit => dispatch(Message::Navigate(self.form.submit())),
        }
    }
}
