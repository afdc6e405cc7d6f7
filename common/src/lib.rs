//! # Keystone Common Library
//!
//! Shared building blocks for Keystone backend services: a layered,
//! process-wide configuration loader, a small error taxonomy mapped onto
//! response codes, and the leaf helpers every service ends up needing
//! (blank checks, timestamps, email validation, id and token generation).
//!
//! ## Modules
//!
//! - [`config`] - Configuration loading (base file + environment overrides) and string parsing
//! - [`error`] - Response codes, statuses and the [`error::ProjectError`] trait
//! - [`logger`] - `fern` based logger installation driven by configuration
//! - [`models`] - Shared enums with stable wire values
//! - [`utils`] - String, date, email, id and environment helpers

pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod utils;

pub use error::{ErrorResponse, ProjectError, ResponseCode, ResponseStatus};
