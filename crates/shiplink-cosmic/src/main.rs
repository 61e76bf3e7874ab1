// SPDX-License-Identifier: AGPL-3.0
// ShipLink COSMIC - libcosmic frontend

mod app;
mod config;
mod message;
mod pages;

use cosmic::app::Settings;
use cosmic::iced::Size;

const APP_ID: &str = "com.shiplink.prototype";

/// Space around the phone frame inside the window
const FRAME_MARGIN: f32 = 48.0;

fn main() -> cosmic::iced::Result {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("shiplink_cosmic=info".parse().unwrap())
                .add_directive("shiplink_core=info".parse().unwrap()),
        )
        .init();

    tracing::info!("Starting ShipLink COSMIC v{}", env!("CARGO_PKG_VERSION"));

    let config = config::CosmicConfig::load();
    let (frame_width, frame_height) = config.frame_size();
    let (width, height) = (frame_width + FRAME_MARGIN, frame_height + FRAME_MARGIN);

    let mut settings = Settings::default()
        .size(Size::new(width, height))
        .size_limits(cosmic::iced::Limits::NONE.min_width(width).min_height(height));
    if let Some(theme) = config.cosmic_theme() {
        settings = settings.theme(theme);
    }

    cosmic::app::run::<app::App>(settings, app::Flags { config })
}
