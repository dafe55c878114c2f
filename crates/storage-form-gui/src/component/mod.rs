//! Reusable UI components.
//!
//! Components use the builder pattern and return `Element<M>`.

mod form_field;

pub use form_field::FormField;
