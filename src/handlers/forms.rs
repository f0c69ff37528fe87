use axum::{extract::State, Json};

use crate::error::AppError;
use crate::forms::{ContactForm, FormPayload, MockSubmitter, NewsletterSignup, Receipt};
use crate::handlers::{ApiJson, AppState};
use crate::metrics;

/// Handle POST /api/contact
pub async fn submit_contact(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<ContactForm>,
) -> Result<Json<Receipt>, AppError> {
    submit(&state, &form).await
}

/// Handle POST /api/newsletter
pub async fn subscribe_newsletter(
    State(state): State<AppState>,
    ApiJson(form): ApiJson<NewsletterSignup>,
) -> Result<Json<Receipt>, AppError> {
    submit(&state, &form).await
}

async fn submit<F: FormPayload>(state: &AppState, form: &F) -> Result<Json<Receipt>, AppError> {
    let submitter = MockSubmitter::from_config(&state.config.load().forms);

    match submitter.submit(form).await {
        Ok(receipt) => {
            metrics::record_form_submission(F::KIND.as_str(), "accepted");
            Ok(Json(receipt))
        }
        Err(e) => {
            tracing::warn!(kind = F::KIND.as_str(), error = %e, "Rejected form submission");
            metrics::record_form_submission(F::KIND.as_str(), "rejected");
            Err(e.into())
        }
    }
}
