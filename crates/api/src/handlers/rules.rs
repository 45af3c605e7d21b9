//! Handlers for password verification and rule discovery.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;
use passguard_core::validation::evaluator::RuleEngine;
use passguard_core::validation::rules::VerificationResult;
use serde_json::Value;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /verify
///
/// Check a password against the supplied rules. A failed rule is a normal
/// outcome and still returns 200; only a malformed request returns 400.
pub async fn verify(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<Json<VerificationResult>> {
    let Json(body) = payload?;

    let engine = RuleEngine::new(&state.registry);
    let result = engine.evaluate_json(&body).inspect_err(|err| {
        tracing::debug!(code = err.code(), error = %err, "Rejected verification request");
    })?;

    tracing::info!(
        verify = result.verify,
        failed = result.no_match.len(),
        "Password verified"
    );

    Ok(Json(result))
}

/// GET /rules
///
/// List the rule names this server accepts, in registration order.
pub async fn list_rules(State(state): State<AppState>) -> Json<DataResponse<Vec<String>>> {
    Json(DataResponse {
        data: state.registry.names().to_vec(),
    })
}
