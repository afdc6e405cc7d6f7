use super::error::ConfigError;
use crate::utils::strings::is_blank;

/// Fails when a setting the caller cannot run without is absent or blank.
pub fn validate_mandatory_config_value(value: Option<&str>) -> Result<(), ConfigError> {
    if is_blank(value) {
        log::error!("Missing mandatory configuration parameter: {value:?}");
        return Err(ConfigError::MissingMandatoryConfig);
    }
    Ok(())
}
