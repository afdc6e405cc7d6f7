//! Layered configuration loading.
//!
//! A service configuration is a base source (a file found by name, see
//! [`source::FileResolver`]) with the process environment layered on top, so
//! deployments can override packaged defaults without editing shipped files.
//! Nested keys merge recursively; on a leaf collision the environment wins.
//! Environment names are matched against base keys case-sensitively.
//!
//! The free functions below share one process-wide [`ConfigProvider`]. It is
//! built on first access and then never rebuilt: later calls return the same
//! [`Config`] even when they name a different source. Code that wants its own
//! lifecycle (tests, tools) can construct a [`ConfigProvider`] directly.

use config::Config;
use once_cell::sync::Lazy;

pub mod environment;
pub mod error;
pub mod parser;
pub mod provider;
pub mod source;
pub mod validation;

pub use environment::{ENV_KEY_SEPARATOR, EnvironmentLayer};
pub use error::ConfigError;
pub use parser::{parse_config_string, parse_config_string_as};
pub use provider::{ConfigProvider, DEFAULT_SOURCE_NAME};
pub use source::{FileResolver, SourceResolver};
pub use validation::validate_mandatory_config_value;

/// Process-wide provider backing [`get_config`] and [`get_config_from`].
static PROCESS_CONFIG: Lazy<ConfigProvider> = Lazy::new(ConfigProvider::new);

/// Returns the process configuration, building it from
/// [`DEFAULT_SOURCE_NAME`] on first access.
pub fn get_config() -> Result<&'static Config, ConfigError> {
    PROCESS_CONFIG.get_config()
}

/// Returns the process configuration, building it from `source_name` if it
/// has not been built yet.
pub fn get_config_from(source_name: Option<&str>) -> Result<&'static Config, ConfigError> {
    PROCESS_CONFIG.get_config_from(source_name)
}

/// The provider behind the process-wide functions.
pub fn process_provider() -> &'static ConfigProvider {
    &PROCESS_CONFIG
}
