// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Help & Support Page

use super::{card, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::help::FaqAccordion;
use shiplink_core::sample::FAQS;
use shiplink_core::ScreenId;

const SUPPORT_EMAIL: &str = "mailto:support@shiplink.com";
const SUPPORT_PHONE: &str = "tel:1-800-744-7546";

const RESOURCES: [&str; 4] = [
    "Community Guidelines",
    "Terms of Service",
    "Privacy Policy",
    "Safety Tips",
];

#[derive(Debug, Clone)]
pub enum HelpSupportMessage {
    ToggleFaq(usize),
    EmailSupport,
    CallSupport,
}

#[derive(Default)]
pub struct HelpSupportPage {
    faqs: FaqAccordion,
}

impl HelpSupportPage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let contact_option = |title: &'static str, detail: &'static str, icon: &'static str| {
            widget::row()
                .push(widget::icon::from_name(icon).size(20))
                .push(
                    widget::column()
                        .push(text::body(title))
                        .push(text::caption(detail)),
                )
                .align_y(Alignment::Center)
                .spacing(spacing.space_s)
        };

        let contact = widget::column()
            .push(text::title4("Contact Us"))
            .push(
                button::custom(contact_option(
                    "Email Support",
                    "support@shiplink.com",
                    "mail-unread-symbolic",
                ))
                .on_press(HelpSupportMessage::EmailSupport.into()),
            )
            .push(contact_option(
                "Live Chat",
                "Available 9 AM - 9 PM EST",
                "chat-symbolic",
            ))
            .push(
                button::custom(contact_option(
                    "Phone Support",
                    "1-800-SHIPLINK",
                    "call-start-symbolic",
                ))
                .on_press(HelpSupportMessage::CallSupport.into()),
            )
            .spacing(spacing.space_s);

        let mut faq_list = widget::column()
            .push(text::title4("Frequently Asked Questions"))
            .spacing(spacing.space_xs);
        for (index, faq) in FAQS.iter().enumerate() {
            let expanded = self.faqs.is_expanded(index);
            let chevron = if expanded {
                "go-up-symbolic"
            } else {
                "go-down-symbolic"
            };
            faq_list = faq_list.push(
                button::custom(
                    widget::row()
                        .push(text::body(faq.question))
                        .push(widget::horizontal_space())
                        .push(widget::icon::from_name(chevron).size(16))
                        .align_y(Alignment::Center),
                )
                .on_press(HelpSupportMessage::ToggleFaq(index).into()),
            );
            if expanded {
                faq_list = faq_list.push(text::caption(faq.answer));
            }
        }

        let resources = RESOURCES.iter().fold(
            widget::column()
                .push(text::title4("Resources"))
                .spacing(spacing.space_xs),
            |col, label| {
                col.push(
                    widget::row()
                        .push(text::body(*label))
                        .push(widget::horizontal_space())
                        .push(text::caption("→")),
                )
            },
        );

        page(
            widget::column()
                .push(header(ScreenId::Profile, "Help & Support"))
                .push(card(contact))
                .push(card(faq_list))
                .push(card(resources))
                .push(text::caption(
                    "For urgent issues, please use live chat or call our support line. We're here to help!",
                ))
                .spacing(spacing.space_m),
        )
    }

    pub fn update(&mut self, message: HelpSupportMessage) -> Task<Message> {
        match message {
            HelpSupportMessage::ToggleFaq(index) => {
                self.faqs.toggle(index);
            }
            HelpSupportMessage::EmailSupport => {
                if let Err(e) = open::that(SUPPORT_EMAIL) {
                    tracing::warn!("Failed to open mail client: {}", e);
                }
            }
            HelpSupportMessage::CallSupport => {
                if let Err(e) = open::that(SUPPORT_PHONE) {
                    tracing::warn!("Failed to open dialer: {}", e);
                }
            }
        }
        Task::none()
    }
}
