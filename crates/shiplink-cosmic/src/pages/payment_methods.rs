// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Payment Methods Page

use super::{after, card, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text, text_input};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::wallet::{CardField, PaymentCard, Wallet};
use shiplink_core::ScreenId;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum PaymentMethodsMessage {
    ToggleAddForm,
    FieldChanged(CardField, String),
    AddCard,
    NoticeElapsed,
    SetDefault(u32),
    Delete(u32),
}

pub struct PaymentMethodsPage {
    wallet: Wallet,
    notice_delay: Duration,
}

impl PaymentMethodsPage {
    pub fn new(notice_delay: Duration) -> Self {
        Self {
            wallet: Wallet::seeded(),
            notice_delay,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut content = widget::column()
            .push(header(ScreenId::Profile, "Payment Methods"))
            .spacing(spacing.space_m);

        if self.wallet.added {
            content = content.push(text::body("✓ Card added successfully!"));
        }

        let mut cards = widget::column()
            .push(text::title4("Saved Cards"))
            .spacing(spacing.space_s);
        if self.wallet.cards().is_empty() {
            cards = cards.push(text::caption("No saved cards"));
        }
        for payment_card in self.wallet.cards() {
            cards = cards.push(card_row(payment_card));
        }
        content = content.push(cards);

        if self.wallet.show_add_form {
            content = content.push(card(self.add_form()));
        } else {
            content = content.push(
                button::suggested("Add New Card")
                    .on_press(PaymentMethodsMessage::ToggleAddForm.into()),
            );
        }

        content = content.push(card(
            widget::column()
                .push(text::body("Secure Payments"))
                .push(text::caption(
                    "Your payment information is encrypted and stored securely.",
                ))
                .spacing(spacing.space_xxs),
        ));

        page(content)
    }

    fn add_form(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let draft = &self.wallet.draft;

        let mut form = widget::column()
            .push(text::title4("Add New Card"))
            .spacing(spacing.space_s);
        if let Some(error) = &self.wallet.error {
            form = form.push(text::body(error.to_string()));
        }

        form.push(card_input(
            "Card Number",
            "1234 5678 9012 3456",
            CardField::Number,
            &draft.number,
        ))
        .push(
            widget::row()
                .push(card_input("Expiry", "MM/YY", CardField::Expiry, &draft.expiry))
                .push(card_input("CVV", "123", CardField::Cvv, &draft.cvv))
                .spacing(spacing.space_s),
        )
        .push(card_input(
            "Cardholder Name",
            "John Doe",
            CardField::Holder,
            &draft.holder,
        ))
        .push(
            widget::row()
                .push(
                    button::text("Cancel").on_press(PaymentMethodsMessage::ToggleAddForm.into()),
                )
                .push(button::suggested("Add Card").on_press(PaymentMethodsMessage::AddCard.into()))
                .spacing(spacing.space_s),
        )
        .into()
    }

    pub fn update(&mut self, message: PaymentMethodsMessage) -> Task<Message> {
        match message {
            PaymentMethodsMessage::ToggleAddForm => {
                self.wallet.toggle_add_form();
                Task::none()
            }
            PaymentMethodsMessage::FieldChanged(field, value) => {
                self.wallet.set(field, value);
                Task::none()
            }
            PaymentMethodsMessage::AddCard => match self.wallet.add_card() {
                Ok(_) => after(self.notice_delay, PaymentMethodsMessage::NoticeElapsed.into()),
                Err(e) => {
                    tracing::debug!("Card rejected: {}", e);
                    Task::none()
                }
            },
            PaymentMethodsMessage::NoticeElapsed => {
                self.wallet.dismiss_added();
                Task::none()
            }
            PaymentMethodsMessage::SetDefault(id) => {
                self.wallet.set_default(id);
                Task::none()
            }
            PaymentMethodsMessage::Delete(id) => {
                self.wallet.delete(id);
                Task::none()
            }
        }
    }
}

fn card_row(payment_card: &PaymentCard) -> Element<'_, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut details = widget::column()
        .push(text::body(format!(
            "{} •••• {}",
            payment_card.brand.label(),
            payment_card.last_four
        )))
        .push(text::caption(format!("Expires {}", payment_card.expiry)))
        .spacing(spacing.space_xxxs);
    if payment_card.is_default {
        details = details.push(text::caption("Default"));
    }

    let mut actions = widget::row().spacing(spacing.space_xs);
    if !payment_card.is_default {
        actions = actions.push(
            button::text("Set Default")
                .on_press(PaymentMethodsMessage::SetDefault(payment_card.id).into()),
        );
    }
    actions = actions.push(
        button::icon(widget::icon::from_name("user-trash-symbolic"))
            .on_press(PaymentMethodsMessage::Delete(payment_card.id).into()),
    );

    card(
        widget::row()
            .push(details)
            .push(widget::horizontal_space())
            .push(actions)
            .align_y(Alignment::Center),
    )
}

fn card_input<'a>(
    label: &'static str,
    placeholder: &'static str,
    field: CardField,
    value: &'a str,
) -> Element<'a, Message> {
    widget::column()
        .push(text::body(label))
        .push(
            text_input(placeholder, value)
                .on_input(move |v| PaymentMethodsMessage::FieldChanged(field, v).into()),
        )
        .spacing(theme::active().cosmic().spacing.space_xxs)
        .into()
}
