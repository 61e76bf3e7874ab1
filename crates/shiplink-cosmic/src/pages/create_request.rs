// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Create Request Page

use super::{dispatch, empty, header};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, container, text, text_input};
use cosmic::{theme, Element, Task};
use shiplink_core::forms::delivery::CreateRequestForm;
use shiplink_core::sample::PACKAGE_TYPES;
use shiplink_core::{FormError, ScreenId};

/// Name given to the simulated parcel photo
const PHOTO_NAME: &str = "parcel-photo.jpg";

#[derive(Debug, Clone)]
pub enum CreateRequestMessage {
    FromChanged(String),
    ToChanged(String),
    WeightChanged(String),
    RewardChanged(String),
    NotesChanged(String),
    TogglePackageMenu,
    SelectPackageType(usize),
    AttachPhoto,
    RemovePhoto,
    Submit,
}

pub struct CreateRequestPage {
    form: CreateRequestForm,
    from: String,
    to: String,
    weight: String,
    reward: String,
    notes: String,
    error: Option<FormError>,
}

impl CreateRequestPage {
    pub fn new() -> Self {
        Self {
            form: CreateRequestForm::default(),
            from: String::new(),
            to: String::new(),
            weight: String::new(),
            reward: String::new(),
            notes: String::new(),
            error: None,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        // Package type dropdown
        let package_label = self.form.package_type.unwrap_or("Select package type");
        let mut package_picker = widget::column()
            .push(text::body("Package Type"))
            .push(
                button::text(format!("{} ▾", package_label))
                    .on_press(CreateRequestMessage::TogglePackageMenu.into()),
            )
            .spacing(spacing.space_xxs);
        if self.form.show_package_menu {
            for (idx, kind) in PACKAGE_TYPES.iter().enumerate() {
                package_picker = package_picker.push(
                    button::text(*kind)
                        .on_press(CreateRequestMessage::SelectPackageType(idx).into()),
                );
            }
        }

        // Photo
        let photo: Element<Message> = match &self.form.photo {
            Some(name) => widget::row()
                .push(widget::icon::from_name("image-x-generic-symbolic").size(32))
                .push(text::body(name.as_str()))
                .push(widget::horizontal_space())
                .push(
                    button::icon(widget::icon::from_name("user-trash-symbolic"))
                        .on_press(CreateRequestMessage::RemovePhoto.into()),
                )
                .align_y(Alignment::Center)
                .spacing(spacing.space_s)
                .into(),
            None => button::text("Add parcel photo")
                .on_press(CreateRequestMessage::AttachPhoto.into())
                .into(),
        };

        let error: Element<Message> = match &self.error {
            Some(e) => text::body(e.to_string()).into(),
            None => empty(),
        };

        let form = container(
            widget::column()
                .push(labeled_input(
                    "From",
                    "New York, USA",
                    &self.from,
                    CreateRequestMessage::FromChanged,
                ))
                .push(labeled_input(
                    "To",
                    "London, UK",
                    &self.to,
                    CreateRequestMessage::ToChanged,
                ))
                .push(package_picker)
                .push(
                    widget::row()
                        .push(labeled_input(
                            "Weight (kg)",
                            "2.5",
                            &self.weight,
                            CreateRequestMessage::WeightChanged,
                        ))
                        .push(labeled_input(
                            "Reward ($)",
                            "50",
                            &self.reward,
                            CreateRequestMessage::RewardChanged,
                        ))
                        .spacing(spacing.space_s),
                )
                .push(photo)
                .push(labeled_input(
                    "Notes",
                    "Add any special instructions or details...",
                    &self.notes,
                    CreateRequestMessage::NotesChanged,
                ))
                .spacing(spacing.space_s),
        )
        .padding(spacing.space_m)
        .class(theme::Container::Card);

        widget::scrollable(
            widget::column()
                .push(header(ScreenId::Home, "Create Request"))
                .push(form)
                .push(error)
                .push(
                    button::suggested("Post Request")
                        .on_press(CreateRequestMessage::Submit.into()),
                )
                .spacing(spacing.space_m)
                .padding(spacing.space_m),
        )
        .into()
    }

    pub fn update(&mut self, message: CreateRequestMessage) -> Task<Message> {
        match message {
            CreateRequestMessage::FromChanged(value) => {
                self.from = value;
                Task::none()
            }
            CreateRequestMessage::ToChanged(value) => {
                self.to = value;
                Task::none()
            }
            CreateRequestMessage::WeightChanged(value) => {
                self.weight = value;
                Task::none()
            }
            CreateRequestMessage::RewardChanged(value) => {
                self.reward = value;
                Task::none()
            }
            CreateRequestMessage::NotesChanged(value) => {
                self.notes = value;
                Task::none()
            }
            CreateRequestMessage::TogglePackageMenu => {
                self.form.toggle_package_menu();
                Task::none()
            }
            CreateRequestMessage::SelectPackageType(idx) => {
                self.form.select_package_type(idx);
                self.error = None;
                Task::none()
            }
            CreateRequestMessage::AttachPhoto => {
                self.form.attach_photo(PHOTO_NAME);
                Task::none()
            }
            CreateRequestMessage::RemovePhoto => {
                self.form.remove_photo();
                Task::none()
            }
            CreateRequestMessage::Submit => match self.form.submit() {
                Ok(intent) => {
                    tracing::info!("Request posted: {} → {}", self.from, self.to);
                    dispatch(Message::Navigate(intent))
                }
                Err(e) => {
                    self.error = Some(e);
                    Task::none()
                }
            },
        }
    }
}

fn labeled_input<'a>(
    label: &'static str,
    placeholder: &'static str,
    value: &'a str,
    on_input: fn(String) -> CreateRequestMessage,
) -> Element<'a, Message> {
    widget::column()
        .push(text::body(label))
        .push(text_input(placeholder, value).on_input(move |v| on_input(v).into()))
        .spacing(theme::active().cosmic().spacing.space_xxs)
        .into()
}
