//! Error types for rule classification.

use strsim::levenshtein;
use thiserror::Error;

use crate::types::AnswerType;

/// An error that prevents a rule from being evaluated.
///
/// Every variant describes a mismatch between authored content and the rule
/// catalogue. None of them are transient, so callers should treat the rule as
/// inapplicable rather than retry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClassifyError {
    /// The rule specification omits a parameter the rule requires.
    #[error("Expected classifier inputs to contain parameter with name '{name}'")]
    MissingParameter { name: String },

    /// A rule parameter holds a different variant than the rule declares.
    #[error("Expected input value to be of type {expected} not {actual}")]
    TypeMismatch {
        parameter: String,
        expected: AnswerType,
        actual: AnswerType,
    },

    /// The learner answer holds a different variant than the rule declares.
    #[error("Expected answer to be of type {expected} not {actual}")]
    AnswerTypeMismatch {
        expected: AnswerType,
        actual: AnswerType,
    },

    /// No rules are registered for the interaction.
    #[error("Unsupported interaction '{interaction}'{}", format_suggestions(suggestions))]
    UnsupportedInteraction {
        interaction: String,
        suggestions: Vec<String>,
    },

    /// The interaction exists but has no rule with this name.
    #[error(
        "Unsupported rule '{rule}' for interaction '{interaction}'{}",
        format_suggestions(suggestions)
    )]
    UnsupportedRule {
        interaction: String,
        rule: String,
        suggestions: Vec<String>,
    },
}

impl ClassifyError {
    /// Close-name suggestions carried by lookup errors.
    pub fn suggestions(&self) -> &[String] {
        match self {
            ClassifyError::UnsupportedInteraction { suggestions, .. }
            | ClassifyError::UnsupportedRule { suggestions, .. } => suggestions,
            ClassifyError::MissingParameter { .. }
            | ClassifyError::TypeMismatch { .. }
            | ClassifyError::AnswerTypeMismatch { .. } => &[],
        }
    }
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(", did you mean: {}?", suggestions.join(", "))
    }
}

/// Compute typo suggestions for `name` among `available` names.
///
/// - Max distance 1 for names of 3 characters or fewer, 2 otherwise
/// - Exact matches are not suggestions
/// - Limit to 3 suggestions, closest first
pub fn compute_suggestions(name: &str, available: &[&str]) -> Vec<String> {
    let max_distance = if name.len() <= 3 { 1 } else { 2 };
    let mut suggestions: Vec<(usize, String)> = available
        .iter()
        .filter_map(|candidate| {
            let dist = levenshtein(name, candidate);
            if dist <= max_distance && dist > 0 {
                Some((dist, (*candidate).to_string()))
            } else {
                None
            }
        })
        .collect();

    suggestions.sort_by_key(|(dist, _)| *dist);
    suggestions.into_iter().take(3).map(|(_, s)| s).collect()
}
