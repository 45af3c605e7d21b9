//! Route definitions for password verification.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::rules;
use crate::state::AppState;

/// ```text
/// POST /verify -> verify
/// GET  /rules  -> list_rules
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/verify", post(rules::verify))
        .route("/rules", get(rules::list_rules))
}
