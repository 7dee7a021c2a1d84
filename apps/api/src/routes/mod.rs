pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::ranking::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::home_handler))
        .route("/health", get(health::health_handler))
        .route("/rank_resumes", post(handlers::handle_rank_resumes))
        .with_state(state)
}
