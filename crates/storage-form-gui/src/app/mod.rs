//! Main application module for the storage form.
//!
//! This module implements the Iced 0.14.0 application using the builder pattern.
//! The architecture follows the Elm pattern: State → Message → Update → View.
//!
//! # Key Design Principles
//!
//! - **All state changes happen in `update()`** - Views are pure functions
//! - **No channels/polling** - Debounce timers are `Task::perform` sleeps

use iced::widget::container;
use iced::{Element, Length, Task, Theme};

use crate::handler::{FormHandler, MessageHandler};
use crate::message::Message;
use crate::state::{AppState, Settings};
use crate::theme::app_theme;
use crate::view::view_form;

/// Main application struct.
///
/// This is the root of the Iced application. It holds the application state
/// and implements the Elm architecture methods.
pub struct App {
    /// All application state.
    pub state: AppState,
}

impl App {
    /// Create a new application instance.
    ///
    /// Called once at startup with the loaded settings.
    pub fn new(settings: Settings) -> (Self, Task<Message>) {
        tracing::debug!(
            quiet_period_ms = settings.input.quiet_period_ms,
            theme = ?settings.display.theme,
            "Creating form"
        );
        let app = Self {
            state: AppState::with_settings(settings),
        };
        (app, Task::none())
    }

    /// Update application state in response to a message.
    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(form_msg) => FormHandler.handle(&mut self.state, form_msg),
        }
    }

    /// Render the current state.
    pub fn view(&self) -> Element<'_, Message> {
        container(view_form(&self.state))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Window title, with a dirty indicator while there are unsaved edits.
    pub fn title(&self) -> String {
        let dirty_indicator = if self.state.form.is_dirty() { " *" } else { "" };
        format!("SFTP Storage Form{}", dirty_indicator)
    }

    /// Theme from the display settings.
    pub fn theme(&self) -> Theme {
        app_theme(self.state.settings.display.theme)
    }
}
