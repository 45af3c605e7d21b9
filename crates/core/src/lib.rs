//! Password rule validation engine.
//!
//! Pure logic with no I/O: a registry of named rule predicates, request-shape
//! validation over parsed JSON, and aggregation into a pass/fail verdict.

pub mod error;
pub mod validation;
