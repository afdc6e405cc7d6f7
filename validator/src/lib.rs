//! # Keystone Request Validator
//!
//! Mandatory-field checks for incoming API requests. Validators inspect the
//! JSON body of a [`Request`] and fail with a [`ValidationError`] that maps
//! onto the shared response codes from the `common` crate.
//!
//! ## Modules
//!
//! - [`request`] - The request envelope handed to validators
//! - [`keys`] - Request body key names
//! - [`base`] - The [`Validator`] trait and reusable parameter checks
//! - [`error`] - Validation failures
//! - [`system_settings`] - Validators for the system settings API

pub mod base;
pub mod error;
pub mod keys;
pub mod request;
pub mod system_settings;

pub use base::{BaseRequestValidator, Validator};
pub use error::ValidationError;
pub use request::Request;
pub use system_settings::SystemSettingsRequestValidator;
