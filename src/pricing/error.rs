use thiserror::Error;

/// Errors raised when textual input does not name a known currency or module
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    #[error("Invalid currency: {0}")]
    InvalidCurrency(String),

    #[error("Unknown module: {0}")]
    UnknownModule(String),
}
