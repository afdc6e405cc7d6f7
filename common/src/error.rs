use serde::Serialize;
use std::fmt;

/// HTTP-style status category attached to every error surfaced to callers.
///
/// The numeric value is what an outer HTTP layer would put on the wire;
/// within this library it only classifies who is at fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResponseStatus {
    Ok,
    ClientError,
    ResourceNotFound,
    ServerError,
}

impl ResponseStatus {
    pub fn code(self) -> u16 {
        match self {
            ResponseStatus::Ok => 200,
            ResponseStatus::ClientError => 400,
            ResponseStatus::ResourceNotFound => 404,
            ResponseStatus::ServerError => 500,
        }
    }

    pub fn is_client_error(self) -> bool {
        (400..500).contains(&self.code())
    }

    pub fn is_server_error(self) -> bool {
        self.code() >= 500
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Stable, machine-readable error identities.
///
/// Codes are part of the public contract: clients match on
/// [`ResponseCode::error_code`], so existing values must never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ResponseCode {
    InternalError,
    MandatoryConfigParamMissing,
    ErrorConfigLoadEmptyString,
    ErrorConfigLoadParseString,
    ErrorConfigLoadEmptyConfig,
    ErrorConfigLoad,
    MandatoryParamsMissing,
    DataTypeError,
}

impl ResponseCode {
    pub fn error_code(self) -> &'static str {
        match self {
            ResponseCode::InternalError => "INTERNAL_ERROR",
            ResponseCode::MandatoryConfigParamMissing => "MANDATORY_CONFIG_PARAMETER_MISSING",
            ResponseCode::ErrorConfigLoadEmptyString => "ERROR_CONFIG_LOAD_EMPTY_STRING",
            ResponseCode::ErrorConfigLoadParseString => "ERROR_CONFIG_LOAD_PARSE_STRING",
            ResponseCode::ErrorConfigLoadEmptyConfig => "ERROR_CONFIG_LOAD_EMPTY_CONFIG",
            ResponseCode::ErrorConfigLoad => "ERROR_CONFIG_LOAD",
            ResponseCode::MandatoryParamsMissing => "MANDATORY_PARAMETER_MISSING",
            ResponseCode::DataTypeError => "DATA_TYPE_ERROR",
        }
    }

    pub fn error_message(self) -> &'static str {
        match self {
            ResponseCode::InternalError => "Process failed, please try again later.",
            ResponseCode::MandatoryConfigParamMissing => {
                "Mandatory configuration parameter is missing."
            }
            ResponseCode::ErrorConfigLoadEmptyString => {
                "Failed to load configuration due to an empty string."
            }
            ResponseCode::ErrorConfigLoadParseString => "Failed to parse configuration string.",
            ResponseCode::ErrorConfigLoadEmptyConfig => "Parsed configuration is empty.",
            ResponseCode::ErrorConfigLoad => "Failed to load configuration source.",
            ResponseCode::MandatoryParamsMissing => "Mandatory parameter is missing.",
            ResponseCode::DataTypeError => "Parameter has an unexpected data type.",
        }
    }
}

impl fmt::Display for ResponseCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.error_code())
    }
}

/// Common surface of every error type raised by Keystone libraries.
///
/// Implementors map themselves onto a [`ResponseCode`] and a
/// [`ResponseStatus`]; the human-readable message comes from `Display`.
pub trait ProjectError: std::error::Error {
    fn response_code(&self) -> ResponseCode;

    fn status(&self) -> ResponseStatus;

    fn error_code(&self) -> &'static str {
        self.response_code().error_code()
    }

    fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code(),
            message: self.to_string(),
            status: self.status().code(),
        }
    }
}

/// Serializable error body handed to whatever transport sits on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorResponse {
    pub code: &'static str,
    pub message: String,
    pub status: u16,
}

impl ErrorResponse {
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::json!({
            "code": self.code,
            "message": self.message,
            "status": self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    const ALL_CODES: [ResponseCode; 8] = [
        ResponseCode::InternalError,
        ResponseCode::MandatoryConfigParamMissing,
        ResponseCode::ErrorConfigLoadEmptyString,
        ResponseCode::ErrorConfigLoadParseString,
        ResponseCode::ErrorConfigLoadEmptyConfig,
        ResponseCode::ErrorConfigLoad,
        ResponseCode::MandatoryParamsMissing,
        ResponseCode::DataTypeError,
    ];

    #[test]
    fn test_error_codes_are_unique() {
        let codes: HashSet<&str> = ALL_CODES.iter().map(|c| c.error_code()).collect();
        assert_eq!(codes.len(), ALL_CODES.len());
    }

    #[test]
    fn test_status_categories() {
        assert_eq!(ResponseStatus::ClientError.code(), 400);
        assert!(ResponseStatus::ClientError.is_client_error());
        assert!(!ResponseStatus::ClientError.is_server_error());
        assert!(ResponseStatus::ServerError.is_server_error());
        assert!(!ResponseStatus::Ok.is_client_error());
        assert_eq!(ResponseStatus::ResourceNotFound.to_string(), "404");
    }

    #[test]
    fn test_error_response_json_shape() {
        let response = ErrorResponse {
            code: ResponseCode::DataTypeError.error_code(),
            message: "bad".to_string(),
            status: 400,
        };
        let json = response.to_json();
        assert_eq!(json["code"], "DATA_TYPE_ERROR");
        assert_eq!(json["message"], "bad");
        assert_eq!(json["status"], 400);
    }
}
