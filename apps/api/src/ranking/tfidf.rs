//! Semantic Vector Comparator: TF-IDF vectors over a two-document corpus, compared by cosine.
//!
//! The corpus is exactly {job description, resume text}; IDF is therefore recomputed
//! for every pair. A term that appears in both documents gets idf 1.0, a term unique
//! to one document gets `ln(3/2) + 1`.
//!
//! Vectors are `BTreeMap`s so sums run in term order and repeated calls are bit-identical.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;

static TOKEN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\w\w+\b").expect("valid regex"));

/// Cosine similarity of the TF-IDF vectors of `a` and `b`, in [0, 1].
///
/// Returns 0.0 when the corpus has no vocabulary, when either document has no
/// terms, or when the documents share no term.
pub fn tfidf_cosine_similarity(a: &str, b: &str) -> f64 {
    let tf_a = term_counts(a);
    let tf_b = term_counts(b);
    if tf_a.is_empty() || tf_b.is_empty() {
        return 0.0;
    }

    let vec_a = weighted_vector(&tf_a, &tf_b);
    let vec_b = weighted_vector(&tf_b, &tf_a);

    let dot: f64 = vec_a
        .iter()
        .filter_map(|(term, wa)| vec_b.get(term).map(|wb| wa * wb))
        .sum();
    let norm_a = l2_norm(&vec_a);
    let norm_b = l2_norm(&vec_b);

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }
    (dot / (norm_a * norm_b)).clamp(0.0, 1.0)
}

/// Lower-cases and counts every run of two or more word characters.
pub fn term_counts(text: &str) -> BTreeMap<String, u32> {
    let lowered = text.to_lowercase();
    let mut counts = BTreeMap::new();
    for m in TOKEN_RE.find_iter(&lowered) {
        *counts.entry(m.as_str().to_string()).or_insert(0) += 1;
    }
    counts
}

/// Smoothed IDF for a corpus of `n_docs` documents: `ln((1 + n) / (1 + df)) + 1`.
fn smoothed_idf(doc_freq: u32, n_docs: u32) -> f64 {
    ((1.0 + n_docs as f64) / (1.0 + doc_freq as f64)).ln() + 1.0
}

/// Raw term counts of `doc` weighted by IDF over the corpus {doc, other}.
fn weighted_vector<'a>(
    doc: &'a BTreeMap<String, u32>,
    other: &BTreeMap<String, u32>,
) -> BTreeMap<&'a str, f64> {
    doc.iter()
        .map(|(term, &count)| {
            let doc_freq = if other.contains_key(term) { 2 } else { 1 };
            (term.as_str(), count as f64 * smoothed_idf(doc_freq, 2))
        })
        .collect()
}

fn l2_norm(vector: &BTreeMap<&str, f64>) -> f64 {
    vector.values().map(|w| w * w).sum::<f64>().sqrt()
}
