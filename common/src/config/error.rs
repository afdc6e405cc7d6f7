use crate::error::{ProjectError, ResponseCode, ResponseStatus};
use thiserror::Error;

/// Failures raised while resolving, parsing or checking configuration.
///
/// Every variant is terminal: the provider never retries or substitutes a
/// default, it hands the error straight back to the caller.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source name was absent, empty or whitespace-only
    #[error("Please provide a valid file name.")]
    InvalidArgument,

    /// A value the service cannot run without was absent or blank
    #[error("Mandatory configuration parameter is missing.")]
    MissingMandatoryConfig,

    /// The configuration text handed to the parser was absent or blank
    #[error("Configuration string to parse is empty.")]
    EmptyInput,

    /// The configuration text could not be parsed
    #[error("Failed to parse configuration string: {0}")]
    ParseError(#[source] config::ConfigError),

    /// The configuration text parsed but contained no keys
    #[error("Parsed configuration contains no keys.")]
    EmptyResult,

    /// The base source or the environment layer could not be loaded
    #[error("Failed to load configuration from '{source_name}': {source}")]
    Load {
        source_name: String,
        #[source]
        source: config::ConfigError,
    },
}

impl ProjectError for ConfigError {
    fn response_code(&self) -> ResponseCode {
        match self {
            ConfigError::InvalidArgument => ResponseCode::InternalError,
            ConfigError::MissingMandatoryConfig => ResponseCode::MandatoryConfigParamMissing,
            ConfigError::EmptyInput => ResponseCode::ErrorConfigLoadEmptyString,
            ConfigError::ParseError(_) => ResponseCode::ErrorConfigLoadParseString,
            ConfigError::EmptyResult => ResponseCode::ErrorConfigLoadEmptyConfig,
            ConfigError::Load { .. } => ResponseCode::ErrorConfigLoad,
        }
    }

    fn status(&self) -> ResponseStatus {
        match self {
            ConfigError::InvalidArgument => ResponseStatus::ClientError,
            _ => ResponseStatus::ServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_is_client_error() {
        let error = ConfigError::InvalidArgument;
        assert_eq!(error.status(), ResponseStatus::ClientError);
        assert_eq!(error.error_code(), "INTERNAL_ERROR");
        assert_eq!(error.to_string(), "Please provide a valid file name.");
    }

    #[test]
    fn test_failure_conditions_have_distinct_codes() {
        let errors = [
            ConfigError::InvalidArgument,
            ConfigError::MissingMandatoryConfig,
            ConfigError::EmptyInput,
            ConfigError::ParseError(config::ConfigError::Message("bad".into())),
            ConfigError::EmptyResult,
        ];
        let mut codes: Vec<&str> = errors.iter().map(|e| e.error_code()).collect();
        codes.sort_unstable();
        codes.dedup();
        assert_eq!(codes.len(), errors.len());
    }

    #[test]
    fn test_to_response_carries_message_and_status() {
        let response = ConfigError::MissingMandatoryConfig.to_response();
        assert_eq!(response.code, "MANDATORY_CONFIG_PARAMETER_MISSING");
        assert_eq!(response.status, 500);
        assert!(response.message.contains("Mandatory"));
    }
}
