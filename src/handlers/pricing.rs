use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::AppError;
use crate::handlers::{ApiJson, AppState};
use crate::metrics;
use crate::pricing::{Catalog, Currency, CurrencyInfo, Module, PricingSelection, Quote};

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct QuoteRequest {
    /// Display currency code; the configured default when absent
    pub currency: Option<String>,
    /// Catalog names of the modules to include; duplicates count once
    #[serde(default)]
    pub modules: Vec<String>,
}

/// Handle GET /api/pricing/currencies
pub async fn list_currencies() -> Json<Vec<CurrencyInfo>> {
    Json(Currency::ALL.into_iter().map(CurrencyInfo::from).collect())
}

/// Handle GET /api/pricing/modules
pub async fn catalog() -> Json<Catalog> {
    Json(Catalog::current())
}

/// Handle POST /api/pricing/quote
pub async fn quote(
    State(state): State<AppState>,
    ApiJson(request): ApiJson<QuoteRequest>,
) -> Result<Json<Quote>, AppError> {
    let start = Instant::now();
    let selection = build_selection(&state, &request)?;

    tracing::info!(
        currency = %selection.currency(),
        modules = selection.selected_count(),
        "Serving pricing quote"
    );

    let quote = selection.quote();
    metrics::record_quote(selection.currency().code(), selection.selected_count());
    metrics::record_duration("/api/pricing/quote", start.elapsed());

    Ok(Json(quote))
}

/// Turn a quote request into a selection
///
/// Every name is validated before anything is toggled, so an unknown module
/// rejects the whole request.
fn build_selection(state: &AppState, request: &QuoteRequest) -> Result<PricingSelection, AppError> {
    let currency = match &request.currency {
        Some(code) => code.parse::<Currency>()?,
        None => state.config.load().pricing.currency()?,
    };

    let modules = request
        .modules
        .iter()
        .map(|name| name.parse::<Module>())
        .collect::<Result<Vec<_>, _>>()?;

    let mut selection = PricingSelection::with_currency(currency);
    for module in modules {
        if !selection.is_selected(module) {
            selection.toggle(module);
        }
    }

    Ok(selection)
}
