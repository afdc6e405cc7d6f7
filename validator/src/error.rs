use common::error::{ProjectError, ResponseCode, ResponseStatus};
use thiserror::Error;

/// Reasons a request fails validation. Both are the caller's fault.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required body entry was absent, null or blank
    #[error("{} Parameter: {field}", .code.error_message())]
    MissingParam { field: String, code: ResponseCode },

    /// A body entry was present but had the wrong JSON type
    #[error("Data type of {field} should be {expected}.")]
    DataType {
        field: String,
        expected: &'static str,
    },
}

impl ValidationError {
    pub fn missing(field: impl Into<String>, code: ResponseCode) -> Self {
        Self::MissingParam {
            field: field.into(),
            code,
        }
    }

    pub fn field(&self) -> &str {
        match self {
            Self::MissingParam { field, .. } | Self::DataType { field, .. } => field,
        }
    }
}

impl ProjectError for ValidationError {
    fn response_code(&self) -> ResponseCode {
        match self {
            Self::MissingParam { code, .. } => *code,
            Self::DataType { .. } => ResponseCode::DataTypeError,
        }
    }

    fn status(&self) -> ResponseStatus {
        ResponseStatus::ClientError
    }
}
