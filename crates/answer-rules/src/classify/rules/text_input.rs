//! Matchers for the text input interaction.
//!
//! Both sides are whitespace-normalized before comparison. Every rule except
//! `CaseSensitiveEquals` ignores case.

use strsim::levenshtein;

use crate::types::normalize_whitespace;

fn folded(text: &str) -> String {
    normalize_whitespace(text).to_lowercase()
}

pub fn equals(answer: &str, x: &str) -> bool {
    folded(answer) == folded(x)
}

pub fn case_sensitive_equals(answer: &str, x: &str) -> bool {
    normalize_whitespace(answer) == normalize_whitespace(x)
}

pub fn starts_with(answer: &str, x: &str) -> bool {
    folded(answer).starts_with(&folded(x))
}

pub fn contains(answer: &str, x: &str) -> bool {
    folded(answer).contains(&folded(x))
}

/// At most one character inserted, deleted, or substituted.
pub fn fuzzy_equals(answer: &str, x: &str) -> bool {
    levenshtein(&folded(answer), &folded(x)) <= 1
}
