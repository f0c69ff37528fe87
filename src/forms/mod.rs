//! Mock form submissions for the contact section and the footer newsletter
//!
//! Submissions are validated, held for a fixed simulated latency and then
//! always acknowledged. Nothing is stored or forwarded.

pub mod submission;
pub mod validation;

use serde::{Deserialize, Serialize};

pub use submission::{FormKind, MockSubmitter, Receipt, SubmissionTiming};
pub use validation::FormError;

use validation::{require, validate_email};

/// A form that can be checked before it is submitted
pub trait FormPayload {
    const KIND: FormKind;

    fn validate(&self) -> Result<(), FormError>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl FormPayload for ContactForm {
    const KIND: FormKind = FormKind::Contact;

    fn validate(&self) -> Result<(), FormError> {
        require("first_name", &self.first_name)?;
        require("last_name", &self.last_name)?;
        validate_email("email", &self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewsletterSignup {
    pub email: String,
}

impl FormPayload for NewsletterSignup {
    const KIND: FormKind = FormKind::Newsletter;

    fn validate(&self) -> Result<(), FormError> {
        validate_email("email", &self.email)
    }
}
