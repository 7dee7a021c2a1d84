use std::sync::Arc;

use crate::ranking::scorer::{BlendedScorer, ResumeScorer};

/// Shared application state injected into all route handlers via Axum extractors.
/// Immutable after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    /// Scorer used by `/rank_resumes`. Default: BlendedScorer.
    pub scorer: Arc<dyn ResumeScorer>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            scorer: Arc::new(BlendedScorer),
        }
    }
}
