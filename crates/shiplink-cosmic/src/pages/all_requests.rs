// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - All Parcel Requests Page

use super::{card, go, header, page};
use crate::message::Message;
use cosmic::iced::Alignment;
use cosmic::widget::{self, button, text};
use cosmic::{theme, Element, Task};
use shiplink_core::sample::ParcelRequest;
use shiplink_core::{RequestFilter, ScreenId};

#[derive(Debug, Clone)]
pub enum AllRequestsMessage {
    FilterSelected(RequestFilter),
}

pub struct AllRequestsPage {
    filter: RequestFilter,
}

impl AllRequestsPage {
    pub fn new() -> Self {
        Self {
            filter: RequestFilter::All,
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let spacing = theme::active().cosmic().spacing;

        let mut filters = widget::row().spacing(spacing.space_xxs);
        for filter in RequestFilter::ALL {
            let chip = if filter == self.filter {
                button::suggested(filter.label())
            } else {
                button::text(filter.label())
            };
            filters = filters.push(chip.on_press(AllRequestsMessage::FilterSelected(filter).into()));
        }

        let requests = self.filter.apply();
        let mut list = widget::column().spacing(spacing.space_s);
        if requests.is_empty() {
            list = list.push(text::caption("No requests match this filter"));
        }
        for request in &requests {
            list = list.push(request_card(request));
        }

        page(
            widget::column()
                .push(header(ScreenId::Home, "All Requests"))
                .push(filters)
                .push(text::caption(format!("{} requests", requests.len())))
                .push(list)
                .spacing(spacing.space_m),
        )
    }

    pub fn update(&mut self, message: AllRequestsMessage) -> Task<Message> {
        match message {
            AllRequestsMessage::FilterSelected(filter) => {
                tracing::debug!("Request filter: {}", filter.label());
                self.filter = filter;
            }
        }
        Task::none()
    }
}

fn request_card(request: &ParcelRequest) -> Element<'static, Message> {
    let spacing = theme::active().cosmic().spacing;

    let mut tags = widget::row()
        .push(text::caption(request.status))
        .spacing(spacing.space_xs);
    if request.is_fragile {
        tags = tags.push(text::caption("Fragile"));
    }

    card(
        widget::row()
            .push(
                widget::column()
                    .push(text::title4(request.title))
                    .push(text::caption(format!("{} → {}", request.from, request.to)))
                    .push(text::caption(format!(
                        "{} · Due {}",
                        request.weight, request.deadline
                    )))
                    .push(tags)
                    .spacing(spacing.space_xxxs),
            )
            .push(widget::horizontal_space())
            .push(text::title4(request.reward))
            .push(
                button::icon(widget::icon::from_name("go-next-symbolic"))
                    .on_press(go(ScreenId::RequestDetails)),
            )
            .align_y(Alignment::Center)
            .spacing(spacing.space_s),
    )
}
