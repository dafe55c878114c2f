//! Form state holder.
//!
//! Provides:
//! - `FormValues` - the current value of every field
//! - `DirtyTracker` - whether the form changed since the last submit
//! - `FormState` - values, errors and validity, kept consistent on every change

mod dirty;
mod state;
mod values;

pub use dirty::DirtyTracker;
pub use state::FormState;
pub use values::FormValues;
