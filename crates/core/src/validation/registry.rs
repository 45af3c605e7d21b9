//! Rule name to predicate registry.
//!
//! Built once at startup and shared read-only between requests.

use std::collections::HashMap;

use super::predicates;
use super::rules::{
    MIN_DIGIT, MIN_LOWER_CASE, MIN_SIZE, MIN_SPECIAL_CHARS, MIN_UPPER_CASE, NO_REPEATED,
    NO_REPEATED_LEGACY,
};

/// A rule predicate: `(password, threshold) -> failed`.
pub type Predicate = fn(&str, i64) -> bool;

/// Lookup table from rule name to predicate.
///
/// Registration order is kept so that [`RuleRegistry::names`] is stable.
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    predicates: HashMap<String, Predicate>,
    order: Vec<String>,
}

impl RuleRegistry {
    /// An empty registry. Every rule name is unknown until registered.
    pub fn new() -> Self {
        Self::default()
    }

    /// The six built-in password rules.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry.register(MIN_SIZE, predicates::min_size);
        registry.register(MIN_UPPER_CASE, predicates::min_upper_case);
        registry.register(MIN_LOWER_CASE, predicates::min_lower_case);
        registry.register(MIN_DIGIT, predicates::min_digit);
        registry.register(MIN_SPECIAL_CHARS, predicates::min_special_chars);
        registry.register(NO_REPEATED, predicates::no_repeated);
        registry
    }

    /// Built-in rules, optionally with the `noRepeted` legacy alias.
    pub fn with_legacy_names(accept_legacy: bool) -> Self {
        let mut registry = Self::builtin();
        if accept_legacy {
            registry.register(NO_REPEATED_LEGACY, predicates::no_repeated);
        }
        registry
    }

    /// Register (or replace) the predicate for `name`.
    pub fn register(&mut self, name: impl Into<String>, predicate: Predicate) {
        let name = name.into();
        if self.predicates.insert(name.clone(), predicate).is_none() {
            self.order.push(name);
        }
    }

    pub fn get(&self, name: &str) -> Option<Predicate> {
        self.predicates.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.predicates.contains_key(name)
    }

    /// Registered rule names in registration order.
    pub fn names(&self) -> &[String] {
        &self.order
    }
}
