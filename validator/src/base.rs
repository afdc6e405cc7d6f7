use common::error::ResponseCode;
use common::utils::strings::is_blank;
use serde_json::Value;

use crate::error::ValidationError;
use crate::request::Request;

/// Core validation trait implemented by every request validator.
///
/// # Examples
///
/// ```no_run
/// use request_validator::{Request, Validator};
///
/// struct HasOperation;
///
/// impl Validator<Request> for HasOperation {
///     type Error = String;
///
///     fn validate(&self, input: &Request) -> Result<(), Self::Error> {
///         input.operation.as_ref().map(|_| ()).ok_or_else(|| "no operation".into())
///     }
/// }
/// ```
pub trait Validator<T: ?Sized> {
    type Error;

    fn validate(&self, input: &T) -> Result<(), Self::Error>;
}

/// Parameter checks shared by request validators.
pub trait BaseRequestValidator {
    /// Fails with `code` when `value` is absent or blank.
    fn validate_param(
        &self,
        field: &str,
        value: Option<&str>,
        code: ResponseCode,
    ) -> Result<(), ValidationError> {
        if is_blank(value) {
            log::debug!("Request parameter '{field}' is missing or blank");
            return Err(ValidationError::missing(field, code));
        }
        Ok(())
    }

    /// Checks that the body entry `field` is a non-blank string.
    ///
    /// Absent and `null` entries fail with `code`; any other non-string JSON
    /// value fails with [`ValidationError::DataType`].
    fn validate_string_param(
        &self,
        request: &Request,
        field: &str,
        code: ResponseCode,
    ) -> Result<(), ValidationError> {
        match request.get(field) {
            None | Some(Value::Null) => self.validate_param(field, None, code),
            Some(Value::String(value)) => self.validate_param(field, Some(value), code),
            Some(_) => {
                log::debug!("Request parameter '{field}' is not a string");
                Err(ValidationError::DataType {
                    field: field.to_string(),
                    expected: "String",
                })
            }
        }
    }
}
