use std::sync::Arc;

use crate::config::Config;
use crate::llm_client::Evaluator;
use crate::session::SessionStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Model client, built once at startup. Tests swap in a scripted evaluator.
    pub evaluator: Arc<dyn Evaluator>,
    pub sessions: SessionStore,
}
