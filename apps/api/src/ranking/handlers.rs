//! Axum route handlers for the Ranking API.

use std::sync::Arc;

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::resume::{lenient, lenient_seq, RankedResult, Resume};
use crate::ranking::ranker::rank_resumes;
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

/// A `job_description` that is not a string and a `resumes` that is not an array
/// both deserialize as empty, and are then rejected by validation.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RankResumesRequest {
    #[serde(deserialize_with = "lenient")]
    pub job_description: Option<String>,
    #[serde(deserialize_with = "lenient_seq")]
    pub resumes: Vec<Resume>,
}

#[derive(Debug, Serialize)]
pub struct RankResumesResponse {
    pub job_description: String,
    pub ranked_resumes: Vec<RankedResult>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /rank_resumes
///
/// Scores every resume against the job description and returns them sorted by
/// `percentage_match`, highest first.
pub async fn handle_rank_resumes(
    State(state): State<AppState>,
    Json(request): Json<RankResumesRequest>,
) -> Result<Json<RankResumesResponse>, AppError> {
    let job_description = request.job_description.unwrap_or_default();
    let resumes = request.resumes;
    let scorer = Arc::clone(&state.scorer);

    // Scoring is CPU-bound (LCS per resume); keep it off the async workers.
    let (job_description, ranked) = tokio::task::spawn_blocking(move || {
        let ranked = rank_resumes(scorer.as_ref(), &job_description, &resumes);
        (job_description, ranked)
    })
    .await
    .map_err(|e| AppError::Internal(e.into()))?;

    let ranked_resumes = ranked.inspect_err(|e| warn!("Rejected ranking request: {e}"))?;

    info!(
        resumes = ranked_resumes.len(),
        top_match = ranked_resumes.first().map(|r| r.percentage_match),
        "Ranked resumes"
    );

    Ok(Json(RankResumesResponse {
        job_description,
        ranked_resumes,
    }))
}
