//! Message handlers organized by category.
//!
//! Each handler processes one message type, mutating `AppState` and returning
//! a follow-up task:
//! - `form` - keystrokes, debounce timers and submit

mod form;

pub use form::FormHandler;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

/// Trait for message handlers.
///
/// Handlers keep the root `update()` a thin dispatcher.
pub trait MessageHandler<M> {
    /// Handle a message, potentially mutating state and returning a follow-up task.
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
