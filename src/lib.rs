//! Configure, preview and accept generated passwords.
//!
//! The [`Controller`] owns a [`config::GenerationConfig`] and the last
//! successfully generated password. Every configuration change is followed
//! by exactly one regeneration through a [`pass::Generator`].

pub mod config;
pub mod controller;
mod error;
pub mod pass;

pub use controller::{Controller, Failures, Intent, Status};
pub use error::{Error, GenerateError};

/// Result type for the library.
pub type Result<T> = std::result::Result<T, Error>;
