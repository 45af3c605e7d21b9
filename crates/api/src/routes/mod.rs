pub mod health;
pub mod rules;

use axum::Router;

use crate::state::AppState;

/// Build the API route tree.
///
/// ```text
/// POST /verify      check a password against a rule list
/// GET  /rules       registered rule names
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(rules::router())
}
