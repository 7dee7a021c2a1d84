//! Score Blender: combines the fuzzy and TF-IDF comparators into a match percentage.
//!
//! `AppState` holds an `Arc<dyn ResumeScorer>`; `BlendedScorer` is the only backend.

use crate::ranking::fuzzy::token_set_ratio;
use crate::ranking::tfidf::tfidf_cosine_similarity;

/// Weight of the token-set ratio (0–100) in the blend.
pub const FUZZY_WEIGHT: f64 = 0.4;
/// Weight of the TF-IDF cosine similarity (scaled to 0–100) in the blend.
pub const COSINE_WEIGHT: f64 = 0.6;

/// Per-component breakdown of one job description / resume comparison.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreBreakdown {
    pub fuzzy_score: u32,       // 0 – 100
    pub cosine_similarity: f64, // 0.0 – 1.0
    pub total: f64,             // 0 – 100, unrounded
}

/// Scores a resume's assembled text against a job description.
pub trait ResumeScorer: Send + Sync {
    fn score(&self, job_description: &str, resume_text: &str) -> ScoreBreakdown;

    /// Backend label, logged at startup.
    fn backend(&self) -> &'static str;
}

/// `fuzzy * 0.4 + cosine * 100 * 0.6`. Weights are fixed.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlendedScorer;

impl ResumeScorer for BlendedScorer {
    fn score(&self, job_description: &str, resume_text: &str) -> ScoreBreakdown {
        let fuzzy_score = token_set_ratio(job_description, resume_text);
        let cosine_similarity = tfidf_cosine_similarity(job_description, resume_text);
        ScoreBreakdown {
            fuzzy_score,
            cosine_similarity,
            total: blend(fuzzy_score, cosine_similarity),
        }
    }

    fn backend(&self) -> &'static str {
        "fuzzy+tfidf"
    }
}

pub fn blend(fuzzy_score: u32, cosine_similarity: f64) -> f64 {
    (fuzzy_score as f64 * FUZZY_WEIGHT + cosine_similarity * 100.0 * COSINE_WEIGHT)
        .clamp(0.0, 100.0)
}

/// Rounds to two decimal places for presentation.
pub fn round_percentage(score: f64) -> f64 {
    (score * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blend_weights() {
        assert!((blend(100, 1.0) - 100.0).abs() < 1e-9);
        assert!((blend(100, 0.0) - 40.0).abs() < 1e-9);
        assert!((blend(0, 1.0) - 60.0).abs() < 1e-9);
        assert_eq!(blend(0, 0.0), 0.0);
        // 50*0.4 + 0.25*100*0.6 = 20 + 15 = 35
        assert!((blend(50, 0.25) - 35.0).abs() < 1e-9);
    }

    #[test]
    fn test_round_percentage() {
        assert_eq!(round_percentage(33.333333), 33.33);
        assert_eq!(round_percentage(66.666666), 66.67);
        assert_eq!(round_percentage(0.0), 0.0);
        assert_eq!(round_percentage(100.0), 100.0);
    }

    #[test]
    fn test_identical_text_scores_100() {
        let breakdown = BlendedScorer.score("rust engineer", "Rust engineer");
        assert_eq!(breakdown.fuzzy_score, 100);
        assert!((breakdown.total - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_unrelated_text_scores_zero() {
        let breakdown = BlendedScorer.score("Python developer with Flask experience", "Empty");
        assert_eq!(breakdown.fuzzy_score, 0);
        assert_eq!(breakdown.cosine_similarity, 0.0);
        assert_eq!(breakdown.total, 0.0);
    }

    #[test]
    fn test_total_is_bounded() {
        let breakdown = BlendedScorer.score(
            "Senior Rust engineer for distributed storage",
            "Rust storage engine author, distributed consensus, Kubernetes",
        );
        assert!((0.0..=100.0).contains(&breakdown.total));
        assert!(breakdown.total > 0.0);
    }

    #[test]
    fn test_backend_label() {
        assert_eq!(BlendedScorer.backend(), "fuzzy+tfidf");
    }
}
