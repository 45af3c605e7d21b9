use std::sync::Arc;

use passguard_core::validation::registry::RuleRegistry;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Rule registry, built once at startup and never mutated.
    pub registry: Arc<RuleRegistry>,
}

impl AppState {
    pub fn new(config: ServerConfig) -> Self {
        let registry = RuleRegistry::with_legacy_names(config.accept_legacy_rule_names);
        Self {
            config: Arc::new(config),
            registry: Arc::new(registry),
        }
    }
}
