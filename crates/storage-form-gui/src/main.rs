//! SFTP Storage Form - Desktop GUI Application
//!
//! Collects a first name, last name and SFTP host address, validates them as
//! you type, and shows the last saved record while nothing was changed since.
//!
//! Built with Iced 0.14.0 using the Elm architecture (State, Message, Update, View).

use iced::Size;
use iced::window;

use storage_form_gui::app::App;
use storage_form_gui::logging::{LogConfig, init_logging};
use storage_form_gui::state::Settings;

/// Application entry point.
///
/// Loads settings, initializes logging, and runs the Iced application.
pub fn main() -> iced::Result {
    let loaded = Settings::load();
    let settings = loaded.as_ref().cloned().unwrap_or_default();

    if let Err(err) = init_logging(&LogConfig::from_settings(&settings.logging)) {
        eprintln!("Failed to initialize logging: {}", err);
    }

    if let Err(err) = &loaded {
        tracing::warn!("{}; using default settings", err.user_message());
    }

    tracing::info!("Starting SFTP Storage Form");

    iced::application(move || App::new(settings.clone()), App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .font(iced_fonts::LUCIDE_FONT_BYTES)
        .window(window::Settings {
            size: Size::new(560.0, 720.0),
            min_size: Some(Size::new(420.0, 560.0)),
            ..Default::default()
        })
        .run()
}
