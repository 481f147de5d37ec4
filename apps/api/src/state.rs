use std::sync::Arc;

use crate::analysis::engine::Analyzer;
use crate::config::Config;
use crate::store::AnalysisStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub store: AnalysisStore,
    /// Immutable taxonomy, registry and question configuration.
    pub analyzer: Arc<Analyzer>,
    #[allow(dead_code)]
    pub config: Config,
}
