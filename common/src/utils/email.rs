use once_cell::sync::Lazy;
use regex::Regex;

const EMAIL_PATTERN: &str =
    r"^[_A-Za-z0-9+-]+(\.[_A-Za-z0-9-]+)*@[A-Za-z0-9-]+(\.[A-Za-z0-9]+)*(\.[A-Za-z]{2,})$";

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern must compile"));

/// Checks `email` against a conservative address pattern.
///
/// The local part allows letters, digits, `_`, `-`, `+` and dot-separated
/// segments; the domain needs a top-level label of at least two letters.
pub fn is_email_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
