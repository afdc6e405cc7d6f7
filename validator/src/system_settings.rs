use common::error::ResponseCode;

use crate::base::{BaseRequestValidator, Validator};
use crate::error::ValidationError;
use crate::keys;
use crate::request::Request;

/// Validates requests against the system settings API.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemSettingsRequestValidator;

impl BaseRequestValidator for SystemSettingsRequestValidator {}

impl SystemSettingsRequestValidator {
    pub fn new() -> Self {
        Self
    }

    /// An update must carry non-blank string `id`, `field` and `value`
    /// entries. They are checked in that order and the first failure wins.
    pub fn validate_update_system_setting(
        &self,
        request: &Request,
    ) -> Result<(), ValidationError> {
        for field in [keys::ID, keys::FIELD, keys::VALUE] {
            self.validate_string_param(request, field, ResponseCode::MandatoryParamsMissing)?;
        }
        Ok(())
    }
}

impl Validator<Request> for SystemSettingsRequestValidator {
    type Error = ValidationError;

    fn validate(&self, input: &Request) -> Result<(), Self::Error> {
        self.validate_update_system_setting(input)
    }
}
