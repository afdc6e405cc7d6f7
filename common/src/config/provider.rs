use config::Config;
use once_cell::sync::OnceCell;
use std::fmt;

use super::environment::EnvironmentLayer;
use super::error::ConfigError;
use super::source::{FileResolver, SourceResolver};
use crate::utils::{env::EnvUtils, strings::is_blank};

/// Source name used when the caller does not ask for a specific one.
pub const DEFAULT_SOURCE_NAME: &str = "service";

/// Builds and caches one merged [`Config`].
///
/// The first successful `get_config*` call loads the named base source,
/// layers the process environment on top of it and stores the result.
/// Every later call, whatever name it asks for, returns that same instance.
///
/// A provider is an ordinary value: services can build one at startup and
/// pass it around by reference. The process-wide functions in
/// [`crate::config`] delegate to a single static instance.
pub struct ConfigProvider {
    resolver: Box<dyn SourceResolver>,
    environment: Option<EnvironmentLayer>,
    config: OnceCell<Config>,
}

impl ConfigProvider {
    /// Provider backed by the default [`FileResolver`] search path.
    pub fn new() -> Self {
        Self::with_resolver(FileResolver::default())
    }

    pub fn with_resolver(resolver: impl SourceResolver + 'static) -> Self {
        Self {
            resolver: Box::new(resolver),
            environment: None,
            config: OnceCell::new(),
        }
    }

    /// Uses a fixed set of variables as the environment layer instead of
    /// snapshotting the process environment at build time.
    pub fn with_environment<I, K, V>(mut self, vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        self.environment = Some(EnvironmentLayer::new(
            vars.into_iter().map(|(k, v)| (k.into(), v.into())),
        ));
        self
    }

    /// Returns the cached configuration, building it from
    /// [`DEFAULT_SOURCE_NAME`] on first use.
    pub fn get_config(&self) -> Result<&Config, ConfigError> {
        self.get_or_build(DEFAULT_SOURCE_NAME)
    }

    /// Returns the cached configuration, building it from `source_name` on
    /// first use.
    ///
    /// The name is validated on every call, but only the first successful
    /// call decides which source is loaded.
    pub fn get_config_from(&self, source_name: Option<&str>) -> Result<&Config, ConfigError> {
        let name = match source_name {
            Some(name) if !is_blank(Some(name)) => name,
            _ => {
                log::info!("Given configuration source name is absent or blank: {source_name:?}");
                return Err(ConfigError::InvalidArgument);
            }
        };
        self.get_or_build(name)
    }

    pub fn is_initialized(&self) -> bool {
        self.config.get().is_some()
    }

    fn get_or_build(&self, source_name: &str) -> Result<&Config, ConfigError> {
        if let Some(config) = self.config.get() {
            return Ok(config);
        }
        // Only one thread runs the builder; the others block and then
        // observe whatever it stored. A failed build leaves the cell empty.
        self.config.get_or_try_init(|| self.build(source_name))
    }

    fn build(&self, source_name: &str) -> Result<Config, ConfigError> {
        log::info!("Building configuration from source '{source_name}' with environment overrides");

        let mut builder = Config::builder();
        match self.resolver.resolve(source_name) {
            Some(base) => builder = builder.add_source(vec![base]),
            None => log::warn!(
                "Configuration source '{source_name}' not found, using environment variables only"
            ),
        }

        let environment = self
            .environment
            .clone()
            .unwrap_or_else(|| EnvironmentLayer::new(EnvUtils::snapshot()));
        builder = builder.add_source(environment);

        builder.build().map_err(|source| {
            log::error!("Failed to build configuration from '{source_name}': {source}");
            ConfigError::Load {
                source_name: source_name.to_string(),
                source,
            }
        })
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ConfigProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConfigProvider")
            .field("initialized", &self.is_initialized())
            .field("fixed_environment", &self.environment.is_some())
            .finish()
    }
}
