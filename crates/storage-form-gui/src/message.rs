//! Message module for the storage form.
//!
//! All user interactions and timer events flow through these message types.

use storage_form_core::FieldId;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Form messages
    Form(FormMessage),
}

/// Messages produced by the form view and its timers.
#[derive(Debug, Clone)]
pub enum FormMessage {
    /// Raw keystroke in an input
    InputChanged(FieldId, String),

    /// A quiet period started by an earlier keystroke has ended
    QuietPeriodElapsed,

    /// Save button pressed or Enter hit in an input
    Submit,
}

impl From<FormMessage> for Message {
    fn from(msg: FormMessage) -> Self {
        Self::Form(msg)
    }
}
