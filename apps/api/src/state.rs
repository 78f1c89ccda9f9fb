use std::sync::Arc;

use crate::config::Config;
use crate::generation::generator::Generator;

/// Shared application state injected into all route handlers via Axum extractors.
/// Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Wraps the backend chosen from `config` at startup.
    pub generator: Generator,
}
