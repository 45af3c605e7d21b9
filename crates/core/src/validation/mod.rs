//! Password validation engine.
//!
//! Provides rule and result types, the predicate registry, request-shape
//! parsing, and the evaluator that folds predicate outcomes into a verdict.

pub mod evaluator;
pub mod predicates;
pub mod registry;
pub mod request;
pub mod rules;
