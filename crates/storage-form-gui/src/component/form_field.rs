//! Form field component.
//!
//! A labeled text input with an optional fixed prefix and a validation
//! message underneath.

use iced::widget::{Space, column, container, row, text, text_input};
use iced::{Alignment, Element, Length};

use crate::theme::{
    SPACING_SM, SPACING_XS, text_danger, text_input_default, text_input_error, text_muted,
};

// =============================================================================
// FORM FIELD
// =============================================================================

/// A text input field with label, prefix and validation message.
///
/// # Example
/// ```ignore
/// FormField::new("Your SFTP Storage", &value, "google.com", Message::HostChanged)
///     .prefix(Some("sftp://"))
///     .required(true)
///     .error(state.host_error)
///     .on_submit(Message::Save)
///     .view()
/// ```
pub struct FormField<'a, M> {
    label: &'a str,
    value: &'a str,
    placeholder: &'a str,
    on_change: Box<dyn Fn(String) -> M + 'a>,
    on_submit: Option<M>,
    prefix: Option<&'a str>,
    required: bool,
    error: Option<&'a str>,
}

impl<'a, M: Clone + 'a> FormField<'a, M> {
    /// Create a new form field.
    pub fn new(
        label: &'a str,
        value: &'a str,
        placeholder: &'a str,
        on_change: impl Fn(String) -> M + 'a,
    ) -> Self {
        Self {
            label,
            value,
            placeholder,
            on_change: Box::new(on_change),
            on_submit: None,
            prefix: None,
            required: false,
            error: None,
        }
    }

    /// Show a fixed literal in front of the input.
    pub fn prefix(mut self, prefix: Option<&'a str>) -> Self {
        self.prefix = prefix;
        self
    }

    /// Mark field as required.
    pub fn required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    /// Set an error message to display.
    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    /// Message emitted when Enter is pressed in the input.
    pub fn on_submit(mut self, message: M) -> Self {
        self.on_submit = Some(message);
        self
    }

    /// Build the form field element.
    pub fn view(self) -> Element<'a, M> {
        let has_error = self.error.is_some();

        // Label with optional required indicator
        let label_text = if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        };
        let label = text(label_text).size(13).style(text_muted);

        let mut input = text_input(self.placeholder, self.value)
            .on_input(self.on_change)
            .padding([8.0, 10.0])
            .size(14)
            .width(Length::Fill)
            .style(if has_error {
                text_input_error
            } else {
                text_input_default
            });
        if let Some(message) = self.on_submit {
            input = input.on_submit(message);
        }

        let input_row: Element<'a, M> = match self.prefix {
            Some(prefix) => row![
                container(text(prefix).size(14).style(text_muted)).padding([8.0, 0.0]),
                input,
            ]
            .spacing(SPACING_SM)
            .align_y(Alignment::Center)
            .into(),
            None => input.into(),
        };

        let error_el: Element<'a, M> = match self.error {
            Some(err) => row![
                iced_fonts::lucide::circle_alert().size(12).style(text_danger),
                Space::new().width(SPACING_XS),
                text(err).size(12).style(text_danger),
            ]
            .align_y(Alignment::Center)
            .into(),
            None => Space::new().height(0.0).into(),
        };

        column![label, input_row, error_el]
            .spacing(SPACING_XS)
            .width(Length::Fill)
            .into()
    }
}
