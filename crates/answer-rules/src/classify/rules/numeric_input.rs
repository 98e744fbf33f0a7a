//! Matchers for the numeric input interaction. Answers are reals.

use crate::types::approximately_equals;

/// Equal within [`REAL_EQUALITY_TOLERANCE`](crate::types::REAL_EQUALITY_TOLERANCE),
/// compared on the signed difference.
pub fn equals(answer: &f64, x: &f64) -> bool {
    approximately_equals(*answer, *x)
}

pub fn is_less_than(answer: &f64, x: &f64) -> bool {
    answer < x
}

pub fn is_greater_than(answer: &f64, x: &f64) -> bool {
    answer > x
}

pub fn is_less_than_or_equal_to(answer: &f64, x: &f64) -> bool {
    answer <= x
}

pub fn is_greater_than_or_equal_to(answer: &f64, x: &f64) -> bool {
    answer >= x
}

/// `a <= answer <= b`. An inverted range matches nothing.
pub fn is_inclusively_between(answer: &f64, a: &f64, b: &f64) -> bool {
    a <= answer && answer <= b
}

/// `x - tol <= answer <= x + tol`.
pub fn is_within_tolerance(answer: &f64, tol: &f64, x: &f64) -> bool {
    x - tol <= *answer && *answer <= x + tol
}
