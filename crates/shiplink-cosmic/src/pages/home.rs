// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - Home Dashboard Page

use super::{card, dispatch, go};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text, text_input};
use cosmic::{theme, Element, Task};
use shiplink_core::sample::{self, format_rating, FeaturedTraveler, FEATURED_TRAVELERS};
use shiplink_core::{NavigationIntent, ScreenId};

#[derive(Debug, Clone)]
pub enum HomeMessage {
    QueryChanged(String),
    Search,
}

pub struct HomePage {
    query: String,
}

impl HomePage {
    pub fn new() -> Self {
        Self {
            query: String::new(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        // Greeting and shortcuts
        let unread = sample::unread_notifications();
        let bell = if unread > 0 {
            "notification-new-symbolic"
        } else {
            "notification-symbolic"
        };
        let header = widget::row()
            .push(
                widget::column()
                    .push(text::title1("Hi, Alex!"))
                    .push(text::body("Welcome back!")),
            )
            .push(widget::horizontal_space())
            .push(button::icon(widget::icon::from_name(bell)).on_press(go(ScreenId::Notifications)))
            .push(
                button::icon(widget::icon::from_name("avatar-default-symbolic"))
                    .on_press(go(ScreenId::Profile)),
            )
            .align_y(Alignment::Center)
            .spacing(spacing.space_xs);

        let search_button = if self.query.trim().is_empty() {
            button::icon(widget::icon::from_name("system-search-symbolic"))
        } else {
            button::icon(widget::icon::from_name("system-search-symbolic"))
                .on_press(HomeMessage::Search.into())
        };
        let search_row = widget::row()
            .push(
                text_input("Search travelers or parcels...", &self.query)
                    .on_input(|v| HomeMessage::QueryChanged(v).into()),
            )
            .push(search_button)
            .align_y(Alignment::Center)
            .spacing(spacing.space_xs);

        // Featured travelers
        let mut travelers = widget::column().spacing(spacing.space_s);
        for featured in FEATURED_TRAVELERS.iter() {
            travelers = travelers.push(traveler_card(featured));
        }

        // Parcel requests
        let mut parcels = widget::column().spacing(spacing.space_s);
        for parcel in sample::dashboard_parcels() {
            let row = widget::row()
                .push(widget::icon::from_name("package-x-generic-symbolic").size(32))
                .push(
                    widget::column()
                        .push(text::title4(parcel.title))
                        .push(text::caption(format!("{} → {}", parcel.from, parcel.to)))
                        .push(text::caption(parcel.weight)),
                )
                .push(widget::horizontal_space())
                .push(text::body(parcel.reward))
                .push(
                    button::icon(widget::icon::from_name("go-next-symbolic"))
                        .on_press(go(ScreenId::RequestDetails)),
                )
                .align_y(Alignment::Center)
                .spacing(spacing.space_s);
            parcels = parcels.push(card(row));
        }

        let content = widget::column()
            .push(header)
            .push(search_row)
            .push(section_header("Featured Travelers", ScreenId::AvailableTravelers))
            .push(travelers)
            .push(section_header("Parcel Requests", ScreenId::AllRequests))
            .push(parcels)
            .spacing(spacing.space_m)
            .padding(spacing.space_m);

        widget::column()
            .push(widget::scrollable(content).height(cosmic::iced::Length::Fill))
            .push(bottom_nav())
            .into()
    }

    pub fn update(&mut self, message: HomeMessage) -> Task<Message> {
        match message {
            HomeMessage::QueryChanged(query) => {
                self.query = query;
                Task::none()
            }
            HomeMessage::Search => {
                let query = self.query.trim();
                if query.is_empty() {
                    return Task::none();
                }
                let intent = NavigationIntent::to(ScreenId::SearchResults).search(query);
                dispatch(Message::Navigate(intent))
            }
        }
    }
}

fn section_header(title: &'static str, see_all: ScreenId) -> Element<'static, Message> {
    widget::row()
        .push(text::title4(title))
        .push(widget::horizontal_space())
        .push(button::text("See all").on_press(go(see_all)))
        .align_y(Alignment::Center)
        .into()
}

fn traveler_card(featured: &FeaturedTraveler) -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;
    let traveler = &featured.traveler;

    let chat = NavigationIntent::to(ScreenId::Chat)
        .recipient(featured.to_chat_recipient())
        .profile(featured.to_profile());

    let mut name_row = widget::row()
        .push(text::title4(traveler.name))
        .spacing(spacing.space_xxs);
    if traveler.verified_student {
        name_row = name_row.push(widget::icon::from_name("emblem-ok-symbolic").size(16));
    }

    let row = widget::row()
        .push(
            widget::column()
                .push(name_row)
                .push(text::caption(traveler.bio))
                .push(text::caption(format!(
                    "{} → {} · {}",
                    traveler.from, traveler.to, traveler.date
                )))
                .push(text::caption(format!(
                    "★ {} · {} mutual connections",
                    format_rating(traveler.rating),
                    traveler.mutual_connections
                )))
                .spacing(spacing.space_xxxs),
        )
        .push(widget::horizontal_space())
        .push(button::text("Chat").on_press(go(chat)))
        .align_y(Alignment::Center);

    card(row)
}

fn bottom_nav() -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;
    let item = |icon: &'static str, target: ScreenId| {
        button::icon(widget::icon::from_name(icon)).on_press(go(target))
    };

    widget::container(
        widget::row()
            .push(item("go-home-symbolic", ScreenId::Home))
            .push(widget::horizontal_space())
            .push(item("mail-message-new-symbolic", ScreenId::Chat))
            .push(widget::horizontal_space())
            .push(item("list-add-symbolic", ScreenId::CreateRequest))
            .push(widget::horizontal_space())
            .push(item("package-x-generic-symbolic", ScreenId::AcceptedParcels))
            .push(widget::horizontal_space())
            .push(item("avatar-default-symbolic", ScreenId::Profile))
            .align_y(Alignment::Center),
    )
    .padding(spacing.space_s)
    .class(theme::Container::Card)
    .into()
}
