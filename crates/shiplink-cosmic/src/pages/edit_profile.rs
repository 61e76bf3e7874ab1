// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Edit Profile Page

use super::{dispatch, empty, header};
use crate::message::Message;
use cosmic::iced::{Alignment, Length};
use cosmic::widget::{self, button, container, text, text_input};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::profile::{EditProfileForm, ProfileField};
use shiplink_core::ScreenId;
use std::time::Duration;

const YEAR_OPTIONS: [&str; 5] = [
    "1st Year (Freshman)",
    "2nd Year (Sophomore)",
    "3rd Year",
    "4th Year (Senior)",
    "Graduate Student",
];

const PERSONAL: [ProfileField; 4] = [
    ProfileField::Name,
    ProfileField::Email,
    ProfileField::Phone,
    ProfileField::Location,
];

const STUDENT: [ProfileField; 2] = [ProfileField::University, ProfileField::Major];

#[derive(Debug, Clone)]
pub enum EditProfileMessage {
    FieldChanged(ProfileField, String),
    ToggleYearMenu,
    SelectYear(usize),
    Save,
}

pub struct EditProfilePage {
    form: EditProfileForm,
    show_year_menu: bool,
    redirect_delay: Duration,
}

impl EditProfilePage {
    pub fn new(redirect_delay: Duration) -> Self {
        Self {
            form: EditProfileForm::default(),
            show_year_menu: false,
            redirect_delay,
        }
    }

    fn field(&self, field: ProfileField) -> Element<'_, Message> {
        widget::column()
            .push(text::body(field.label()))
            .push(
                text_input(field.label(), self.form.get(field))
                    .on_input(move |v| EditProfileMessage::FieldChanged(field, v).into()),
            )
            .spacing(theme::active().cosmic().spacing.space_xxs)
            .into()
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let save_button = if self.form.saved {
            button::suggested("Saved")
        } else {
            button::suggested("Save").on_press(EditProfileMessage::Save.into())
        };

        let title = widget::row()
            .push(header(ScreenId::Profile, "Edit Profile"))
            .push(save_button)
            .align_y(Alignment::Center);

        let banner: Element<Message> = if self.form.saved {
            container(text::body("✓ Profile updated successfully"))
                .padding(spacing.space_xs)
                .width(Length::Fill)
                .class(theme::Container::Card)
                .into()
        } else {
            empty()
        };

        let photo = widget::column()
            .push(widget::icon::from_name("avatar-default-symbolic").size(96))
            .push(button::text("Change profile photo"))
            .align_x(Alignment::Center);

        let mut personal = widget::column()
            .push(text::title4("Personal Information"))
            .spacing(spacing.space_s);
        for field in PERSONAL {
            personal = personal.push(self.field(field));
        }

        let mut year = widget::column()
            .push(text::body(ProfileField::Year.label()))
            .push(
                button::text(format!("{} ▾", self.form.year))
                    .on_press(EditProfileMessage::ToggleYearMenu.into()),
            )
            .spacing(spacing.space_xxs);
        if self.show_year_menu {
            for (idx, option) in YEAR_OPTIONS.iter().enumerate() {
                year = year.push(
                    button::text(*option).on_press(EditProfileMessage::SelectYear(idx).into()),
                );
            }
        }

        let mut student = widget::column()
            .push(text::title4("Student Information"))
            .spacing(spacing.space_s);
        for field in STUDENT {
            student = student.push(self.field(field));
        }
        student = student.push(year).push(self.field(ProfileField::Bio));

        widget::column()
            .push(title)
            .push(banner)
            .push(
                widget::scrollable(
                    widget::column()
                        .push(photo)
                        .push(
                            container(personal)
                                .padding(spacing.space_m)
                                .class(theme::Container::Card),
                        )
                        .push(
                            container(student)
                                .padding(spacing.space_m)
                                .class(theme::Container::Card),
                        )
                        .spacing(spacing.space_m),
                )
                .height(Length::Fill),
            )
            .spacing(spacing.space_m)
            .padding(spacing.space_m)
            .into()
    }

    pub fn update(&mut self, message: EditProfileMessage) -> Task<Message> {
        match message {
            EditProfileMessage::FieldChanged(field, value) => {
                self.form.set(field, value);
                Task::none()
            }
            EditProfileMessage::ToggleYearMenu => {
                self.show_year_menu = !self.show_year_menu;
                Task::none()
            }
            EditProfileMessage::SelectYear(idx) => {
                if let Some(option) = YEAR_OPTIONS.get(idx) {
                    self.form.set(ProfileField::Year, option.to_string());
                }
                self.show_year_menu = false;
                Task::none()
            }
            EditProfileMessage::Save => {
                // The banner stays up until the delayed redirect lands
                let intent = self.form.save();
                dispatch(Message::NavigateAfter(self.redirect_delay, intent))
            }
        }
    }
}
