//! SFTP Storage Form - GUI Library
//!
//! This module provides the application types and modules for the storage
//! form desktop application. Form logic lives in `storage_form_core`; this
//! crate wires it into iced.
//!
//! Built with Iced 0.14.0 using the Elm architecture.

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod logging;
pub mod message;
pub mod state;
pub mod theme;
pub mod view;
