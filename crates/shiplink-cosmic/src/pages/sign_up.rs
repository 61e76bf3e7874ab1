// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Sign Up Page

use super::{after, dispatch, go};
use crate::message::Message;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, text, text_input, toggler};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::signup::{Capture, CaptureId, SignUpFlow, LAST_STEP};
use shiplink_core::sample::COUNTRIES;
use shiplink_core::ScreenId;
use std::time::Duration;

#[derive(Debug, Clone)]
pub enum SignUpMessage {
    NameChanged(String),
    EmailChanged(String),
    PhoneChanged(String),
    PasswordChanged(String),
    TermsToggled(bool),
    ToggleCountryMenu,
    SelectCountry(usize),
    Next,
    Back,
    StartCapture(Capture),
    CaptureFinished(CaptureId),
}

pub struct SignUpPage {
    flow: SignUpFlow,
    name: String,
    email: String,
    phone: String,
    password: String,
    accepted_terms: bool,
    capture_delay: Duration,
}

impl SignUpPage {
    pub fn new(capture_delay: Duration) -> Self {
        Self {
            flow: SignUpFlow::default(),
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            password: String::new(),
            accepted_terms: false,
            capture_delay,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let progress = widget::row()
            .push(
                button::icon(widget::icon::from_name("go-previous-symbolic"))
                    .on_press(SignUpMessage::Back.into()),
            )
            .push(text::caption(format!("Step {} of {}", self.flow.step(), LAST_STEP)))
            .align_y(Alignment::Center)
            .spacing(spacing.space_s);

        let body = match self.flow.step() {
            1 => self.details_view(),
            2 => self.capture_view(
                Capture::StudentId,
                "Scan your student ID",
                "Tap to capture ID",
                "ID Captured!",
            ),
            3 => self.capture_view(
                Capture::Face,
                "Verify it's you",
                "Tap to verify",
                "Verified!",
            ),
            _ => self.success_view(),
        };

        widget::column()
            .push(progress)
            .push(body)
            .spacing(spacing.space_m)
            .padding(spacing.space_m)
            .into()
    }

    fn details_view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let country = self.flow.country();

        let mut country_menu = widget::column().spacing(spacing.space_xxs);
        if self.flow.show_country_menu {
            for (idx, c) in COUNTRIES.iter().enumerate() {
                country_menu = country_menu.push(
                    button::text(format!("{} {} {}", c.flag, c.name, c.code))
                        .on_press(SignUpMessage::SelectCountry(idx).into()),
                );
            }
        }

        let phone_row = widget::row()
            .push(
                button::text(format!("{} {}", country.flag, country.code))
                    .on_press(SignUpMessage::ToggleCountryMenu.into()),
            )
            .push(
                text_input("123 456 7890", &self.phone)
                    .on_input(|v| SignUpMessage::PhoneChanged(v).into()),
            )
            .spacing(spacing.space_xs);

        let next_button = if self.accepted_terms {
            button::suggested("Next").on_press(SignUpMessage::Next.into())
        } else {
            button::suggested("Next")
        };

        widget::column()
            .push(text::title3("Create your account"))
            .push(
                widget::column()
                    .push(text::body("Full Name"))
                    .push(
                        text_input("John Doe", &self.name)
                            .on_input(|v| SignUpMessage::NameChanged(v).into()),
                    )
                    .spacing(spacing.space_xxs),
            )
            .push(
                widget::column()
                    .push(text::body("University Email"))
                    .push(
                        text_input("john@example.com", &self.email)
                            .on_input(|v| SignUpMessage::EmailChanged(v).into()),
                    )
                    .spacing(spacing.space_xxs),
            )
            .push(
                widget::column()
                    .push(text::body("Phone Number"))
                    .push(phone_row)
                    .spacing(spacing.space_xxs),
            )
            .push(country_menu)
            .push(
                widget::column()
                    .push(text::body("Password"))
                    .push(
                        text_input("••••••••", &self.password)
                            .on_input(|v| SignUpMessage::PasswordChanged(v).into()),
                    )
                    .spacing(spacing.space_xxs),
            )
            .push(
                widget::row()
                    .push(text::caption("I agree to the Terms of Service and Privacy Policy"))
                    .push(widget::horizontal_space())
                    .push(
                        toggler(self.accepted_terms)
                            .on_toggle(|v| SignUpMessage::TermsToggled(v).into()),
                    ),
            )
            .push(next_button)
            .push(
                widget::row()
                    .push(text::body("Already have an account?"))
                    .push(button::text("Sign In").on_press(go(ScreenId::SignIn)))
                    .align_y(Alignment::Center),
            )
            .spacing(spacing.space_s)
            .into()
    }

    fn capture_view(
        &self,
        capture: Capture,
        title: &'static str,
        prompt: &'static str,
        done: &'static str,
    ) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;
        let in_progress = self.flow.capturing() == Some(capture);

        let target: Element<Message> = if in_progress {
            widget::column()
                .push(widget::icon::from_name("emblem-ok-symbolic").size(64))
                .push(text::body(done))
                .spacing(spacing.space_s)
                .align_x(Alignment::Center)
                .into()
        } else {
            button::icon(widget::icon::from_name("camera-photo-symbolic"))
                .on_press(SignUpMessage::StartCapture(capture).into())
                .into()
        };

        container(
            widget::column()
                .push(text::title3(title))
                .push(target)
                .push(text::caption(if in_progress { "" } else { prompt }))
                .spacing(spacing.space_m)
                .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(spacing.space_l)
        .class(theme::Container::Card)
        .into()
    }

    fn success_view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        widget::column()
            .push(widget::icon::from_name("emblem-ok-symbolic").size(128))
            .push(text::title3("You're verified!"))
            .push(text::body("Start sending and delivering parcels with fellow students."))
            .push(button::suggested("Go to Dashboard").on_press(go(self.flow.complete())))
            .spacing(spacing.space_m)
            .align_x(Alignment::Center)
            .into()
    }

    pub fn update(&mut self, message: SignUpMessage) -> Task<Message> {
        match message {
            SignUpMessage::NameChanged(name) => {
                self.name = name;
                Task::none()
            }
            SignUpMessage::EmailChanged(email) => {
                self.email = email;
                Task::none()
            }
            SignUpMessage::PhoneChanged(phone) => {
                self.phone = phone;
                Task::none()
            }
            SignUpMessage::PasswordChanged(password) => {
                self.password = password;
                Task::none()
            }
            SignUpMessage::TermsToggled(accepted) => {
                self.accepted_terms = accepted;
                Task::none()
            }
            SignUpMessage::ToggleCountryMenu => {
                self.flow.toggle_country_menu();
                Task::none()
            }
            SignUpMessage::SelectCountry(idx) => {
                self.flow.select_country(idx);
                Task::none()
            }
            SignUpMessage::Next => {
                self.flow.next();
                Task::none()
            }
            SignUpMessage::Back => match self.flow.back() {
                Some(intent) => dispatch(Message::Navigate(intent)),
                None => Task::none(),
            },
            SignUpMessage::StartCapture(capture) => {
                let started = self.flow.start_capture(capture);
                after(self.capture_delay, SignUpMessage::CaptureFinished(started).into())
            }
            SignUpMessage::CaptureFinished(capture) => {
                self.flow.finish_capture(capture);
                Task::none()
            }
        }
    }
}
