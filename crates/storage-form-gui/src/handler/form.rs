//! Form message handler.
//!
//! Each keystroke starts a timer task for the quiet period. Timers are never
//! cancelled: when one fires, the debouncer releases only the values whose
//! deadline has really passed, so a timer superseded by a later keystroke
//! finds nothing to do.

use std::time::{Duration, Instant};

use iced::Task;

use super::MessageHandler;
use crate::message::{FormMessage, Message};
use crate::state::AppState;

/// Handler for [`FormMessage`].
pub struct FormHandler;

impl MessageHandler<FormMessage> for FormHandler {
    fn handle(&self, state: &mut AppState, msg: FormMessage) -> Task<Message> {
        match msg {
            FormMessage::InputChanged(field, value) => {
                let wait = state.record_input(field, value, Instant::now());
                quiet_period_timer(wait)
            }

            FormMessage::QuietPeriodElapsed => {
                state.apply_due_inputs(Instant::now());
                Task::none()
            }

            FormMessage::Submit => {
                if state.can_submit() {
                    if let Err(err) = state.submit() {
                        tracing::debug!("Submit failed: {}", err);
                    }
                } else {
                    tracing::debug!("Ignoring submit while the form is invalid");
                }
                Task::none()
            }
        }
    }
}

/// Sleep for `wait`, then report that a quiet period ended.
fn quiet_period_timer(wait: Duration) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(wait).await;
        },
        |_| Message::Form(FormMessage::QuietPeriodElapsed),
    )
}
