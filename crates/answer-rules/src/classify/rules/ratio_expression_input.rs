//! Matchers for the ratio expression interaction.

use crate::types::RatioExpression;

pub fn equals(answer: &RatioExpression, x: &RatioExpression) -> bool {
    answer == x
}

/// Equal once both sides are reduced to simplest form, so `2:4` matches `1:2`.
pub fn is_equivalent(answer: &RatioExpression, x: &RatioExpression) -> bool {
    answer.is_equivalent_to(x)
}

pub fn has_number_of_terms_equal_to(answer: &RatioExpression, y: &u32) -> bool {
    u32::try_from(answer.len()).is_ok_and(|terms| terms == *y)
}

/// The term at 1-based position `x` exists and equals `y`.
pub fn has_specific_term_equal_to(answer: &RatioExpression, x: &u32, y: &u32) -> bool {
    answer.term(*x) == Some(*y)
}
