use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::info;
use uuid::Uuid;

use crate::config::FormsConfig;
use crate::forms::{FormError, FormPayload};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormKind {
    Contact,
    Newsletter,
}

impl FormKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Contact => "contact",
            Self::Newsletter => "newsletter",
        }
    }
}

/// Simulated latency and success-message window for one kind of form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmissionTiming {
    pub latency: Duration,
    pub success_display: Duration,
}

/// Acknowledgment returned after a mock submission
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Receipt {
    pub id: Uuid,
    pub kind: FormKind,
    pub received_at: DateTime<Utc>,
    /// When the page should drop the success message and return to idle
    pub success_visible_until: DateTime<Utc>,
}

/// Accepts form submissions after a fixed delay without storing anything
#[derive(Debug, Clone)]
pub struct MockSubmitter {
    contact: SubmissionTiming,
    newsletter: SubmissionTiming,
}

impl MockSubmitter {
    pub fn new(contact: SubmissionTiming, newsletter: SubmissionTiming) -> Self {
        Self { contact, newsletter }
    }

    pub fn from_config(cfg: &FormsConfig) -> Self {
        Self::new(
            SubmissionTiming {
                latency: Duration::from_millis(cfg.contact_delay_ms),
                success_display: Duration::from_secs(cfg.contact_success_display_secs),
            },
            SubmissionTiming {
                latency: Duration::from_millis(cfg.newsletter_delay_ms),
                success_display: Duration::from_secs(cfg.newsletter_success_display_secs),
            },
        )
    }

    pub fn timing(&self, kind: FormKind) -> SubmissionTiming {
        match kind {
            FormKind::Contact => self.contact,
            FormKind::Newsletter => self.newsletter,
        }
    }

    /// Validate, wait the simulated latency, then acknowledge
    ///
    /// Invalid payloads fail immediately without waiting.
    pub async fn submit<F: FormPayload>(&self, form: &F) -> Result<Receipt, FormError> {
        form.validate()?;

        let timing = self.timing(F::KIND);
        tokio::time::sleep(timing.latency).await;

        let received_at = Utc::now();
        let success_display = chrono::Duration::from_std(timing.success_display)
            .unwrap_or(chrono::Duration::zero());
        let success_visible_until = received_at + success_display;

        let receipt = Receipt {
            id: Uuid::new_v4(),
            kind: F::KIND,
            received_at,
            success_visible_until,
        };

        info!(
            kind = F::KIND.as_str(),
            receipt_id = %receipt.id,
            "Accepted mock form submission"
        );

        Ok(receipt)
    }
}

impl Default for MockSubmitter {
    fn default() -> Self {
        Self::from_config(&FormsConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ContactForm, NewsletterSignup};

    fn contact() -> ContactForm {
        ContactForm {
            first_name: "Jane".to_string(),
            last_name: "Roe".to_string(),
            email: "jane@example.com".to_string(),
            subject: "Pricing".to_string(),
            message: "Do you support multiple locations?".to_string(),
        }
    }

    #[test]
    fn test_default_timings() {
        let submitter = MockSubmitter::default();
        assert_eq!(
            submitter.timing(FormKind::Contact),
            SubmissionTiming {
                latency: Duration::from_millis(2000),
                success_display: Duration::from_secs(5),
            }
        );
        assert_eq!(
            submitter.timing(FormKind::Newsletter),
            SubmissionTiming {
                latency: Duration::from_millis(1500),
                success_display: Duration::from_secs(3),
            }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_contact_submission_waits_and_succeeds() {
        let submitter = MockSubmitter::default();
        let started = tokio::time::Instant::now();

        let receipt = submitter.submit(&contact()).await.unwrap();

        assert!(started.elapsed() >= Duration::from_millis(2000));
        assert_eq!(receipt.kind, FormKind::Contact);
        assert_eq!(
            receipt.success_visible_until - receipt.received_at,
            chrono::Duration::seconds(5)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_newsletter_submission() {
        let submitter = MockSubmitter::default();
        let started = tokio::time::Instant::now();

        let receipt = submitter
            .submit(&NewsletterSignup {
                email: "member@gym.com".to_string(),
            })
            .await
            .unwrap();

        assert!(started.elapsed() >= Duration::from_millis(1500));
        assert_eq!(receipt.kind, FormKind::Newsletter);
    }

    #[tokio::test(start_paused = true)]
    async fn test_invalid_submission_fails_without_waiting() {
        let submitter = MockSubmitter::default();
        let started = tokio::time::Instant::now();

        let err = submitter
            .submit(&NewsletterSignup {
                email: String::new(),
            })
            .await
            .unwrap_err();

        assert_eq!(err, FormError::MissingField("email"));
        assert_eq!(started.elapsed(), Duration::ZERO);
    }

    #[tokio::test(start_paused = true)]
    async fn test_receipts_are_unique() {
        let submitter = MockSubmitter::default();
        let first = submitter.submit(&contact()).await.unwrap();
        let second = submitter.submit(&contact()).await.unwrap();
        assert_ne!(first.id, second.id);
    }
}
