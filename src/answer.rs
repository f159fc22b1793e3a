//! Answer grading.
//!
//! Choice items are graded by exact match after normalization. Free-text
//! items additionally tolerate small typos via Levenshtein distance, with
//! the allowed distance scaling to the expected answer's length (see
//! [`FuzzyMatchPolicy`]).

use crate::config::FuzzyMatchPolicy;
use crate::types::ItemType;

/// Trims, lowercases, and strips trailing sentence punctuation.
pub fn normalize_answer(raw: &str) -> String {
    let trimmed = raw.trim().to_lowercase();
    trimmed
        .trim_end_matches(['.', '!', '?'])
        .trim_end()
        .to_string()
}

/// Grades a submitted answer against the expected one.
///
/// Total over all string inputs; empty strings normalize to empty and
/// compare equal only to empty.
pub fn check_answer(
    submitted: &str,
    expected: &str,
    item_type: ItemType,
    policy: &FuzzyMatchPolicy,
) -> bool {
    let submitted = normalize_answer(submitted);
    let expected = normalize_answer(expected);

    if submitted == expected {
        return true;
    }

    if !item_type.is_free_text() || submitted.is_empty() || expected.is_empty() {
        return false;
    }

    let tolerance = policy.tolerance_for(expected.chars().count());
    levenshtein(&submitted, &expected) <= tolerance
}

/// Two-row Levenshtein distance over chars.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0usize; b.len() + 1];

    for (i, ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let substitution = prev[j] + usize::from(ca != cb);
            curr[j + 1] = substitution.min(prev[j + 1] + 1).min(curr[j] + 1);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}
