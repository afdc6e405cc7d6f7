//! # Utilities
//!
//! Leaf helpers with no state worth modelling beyond a compiled pattern and
//! a per-generator sequence counter.
//!
//! - [`strings`] - Blank checks shared by the config and request validators
//! - [`date`] - Timestamp formatting
//! - [`email`] - Email address validation
//! - [`ids`] - UUIDs, auth tokens and timestamp-based ids
//! - [`env`] - Validated environment variable access and snapshots
//!
//! ```no_run
//! use common::utils::{email::is_email_valid, ids::generate_unique_id};
//!
//! if is_email_valid("ops@example.com") {
//!     println!("request {}", generate_unique_id());
//! }
//! ```

pub mod date;
pub mod email;
pub mod env;
pub mod ids;
pub mod strings;

pub use date::{format_date, formatted_date};
pub use email::is_email_valid;
pub use env::{EnvUtils, EnvVarError};
pub use ids::{UniqueIdGenerator, create_user_auth_token, generate_unique_id, name_based_uuid};
pub use strings::{is_blank, non_blank};
