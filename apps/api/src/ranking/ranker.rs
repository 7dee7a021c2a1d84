//! Ranking Orchestrator: validates the batch, scores every resume, sorts by match.

use tracing::debug;

use crate::errors::AppError;
use crate::models::resume::{RankedResult, Resume};
use crate::ranking::assembler::assemble_resume_text;
use crate::ranking::scorer::{round_percentage, ResumeScorer};

pub const REQUIRED_FIELDS_MESSAGE: &str = "Both 'job_description' and 'resumes' are required.";

/// Scores each resume against the job description and returns them best-first.
///
/// Fails with `AppError::Validation` before scoring anything when the job description
/// or the resume list is empty. Resumes with equal `percentage_match` keep their input
/// order.
pub fn rank_resumes(
    scorer: &dyn ResumeScorer,
    job_description: &str,
    resumes: &[Resume],
) -> Result<Vec<RankedResult>, AppError> {
    if job_description.is_empty() || resumes.is_empty() {
        return Err(AppError::Validation(REQUIRED_FIELDS_MESSAGE.to_string()));
    }

    let mut ranked: Vec<RankedResult> = resumes
        .iter()
        .enumerate()
        .map(|(index, resume)| {
            let text = assemble_resume_text(resume);
            let breakdown = scorer.score(job_description, &text);
            debug!(
                index,
                name = resume.display_name(),
                fuzzy = breakdown.fuzzy_score,
                cosine = breakdown.cosine_similarity,
                total = breakdown.total,
                "scored resume"
            );
            RankedResult {
                name: resume.display_name().to_string(),
                percentage_match: round_percentage(breakdown.total),
            }
        })
        .collect();

    // sort_by is stable; ties stay in input order.
    ranked.sort_by(|a, b| b.percentage_match.total_cmp(&a.percentage_match));

    Ok(ranked)
}
