//! Fuzzy Lexical Comparator: token-set ratio on a 0–100 integer scale.
//!
//! Both inputs are normalised (ASCII only, punctuation → space, lower-case) and split
//! into unique token sets. The shared tokens are compared against each side's full
//! reconstruction, so reordering, repetition and extra words cost little:
//! "developer" vs "senior software developer" still scores 100.

use std::collections::BTreeSet;

/// Token-set similarity between `a` and `b`, 0–100.
///
/// Returns 0 when either side is empty after normalisation, or when the two sides
/// share no token at all.
pub fn token_set_ratio(a: &str, b: &str) -> u32 {
    let processed_a = normalize(a);
    let processed_b = normalize(b);
    if processed_a.is_empty() || processed_b.is_empty() {
        return 0;
    }

    // BTreeSet gives the sorted, de-duplicated token order directly.
    let tokens_a: BTreeSet<&str> = processed_a.split_whitespace().collect();
    let tokens_b: BTreeSet<&str> = processed_b.split_whitespace().collect();

    let intersection: Vec<&str> = tokens_a.intersection(&tokens_b).copied().collect();
    if intersection.is_empty() {
        return 0;
    }
    let only_a: Vec<&str> = tokens_a.difference(&tokens_b).copied().collect();
    let only_b: Vec<&str> = tokens_b.difference(&tokens_a).copied().collect();

    let sect = intersection.join(" ");
    let combined_a = format!("{sect} {}", only_a.join(" ")).trim().to_string();
    let combined_b = format!("{sect} {}", only_b.join(" ")).trim().to_string();

    [
        ratio(&sect, &combined_a),
        ratio(&sect, &combined_b),
        ratio(&combined_a, &combined_b),
    ]
    .into_iter()
    .max()
    .unwrap_or(0)
}

/// Normalised indel similarity, 0–100: `2 * LCS / (|a| + |b|)` over characters.
/// Halves round to the even neighbour.
pub fn ratio(a: &str, b: &str) -> u32 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let lcs = longest_common_subsequence(&a, &b);
    let total = (a.len() + b.len()) as f64;
    (100.0 * 2.0 * lcs as f64 / total).round_ties_even() as u32
}

/// Drops non-ASCII characters, maps anything other than `[A-Za-z0-9_]` to a space,
/// lower-cases and trims.
fn normalize(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii)
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect::<String>()
        .trim()
        .to_string()
}

/// Two-row dynamic programming LCS length.
fn longest_common_subsequence(a: &[char], b: &[char]) -> usize {
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let mut prev = vec![0usize; short.len() + 1];
    let mut curr = vec![0usize; short.len() + 1];

    for &lc in long {
        for (j, &sc) in short.iter().enumerate() {
            curr[j + 1] = if lc == sc {
                prev[j] + 1
            } else {
                curr[j].max(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[short.len()]
}
