use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Invalid email address: {0}")]
    InvalidEmail(String),
}

/// Reject a field that is empty after trimming
pub fn require(field: &'static str, value: &str) -> Result<(), FormError> {
    if value.trim().is_empty() {
        return Err(FormError::MissingField(field));
    }
    Ok(())
}

/// One `@`, a non-empty local part and a dotted domain with no empty labels.
/// No whitespace anywhere.
static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@.]+(\.[^\s@.]+)+$").unwrap());

/// Loose address check equivalent to a browser's `type="email"` input
pub fn validate_email(field: &'static str, value: &str) -> Result<(), FormError> {
    require(field, value)?;

    let email = value.trim();
    if !EMAIL_RE.is_match(email) {
        return Err(FormError::InvalidEmail(email.to_string()));
    }

    Ok(())
}
