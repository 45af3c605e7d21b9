//! Shared response envelope types for API handlers.
//!
//! Listing endpoints use a `{ "data": ... }` envelope. The verify endpoint
//! returns its verdict unwrapped so existing clients keep working.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}
