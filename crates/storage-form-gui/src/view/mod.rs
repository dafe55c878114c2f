//! View functions.
//!
//! Views are pure functions of `AppState`; all changes happen in `update()`.

mod form;

pub use form::{INSTRUCTIONS, view_form};
