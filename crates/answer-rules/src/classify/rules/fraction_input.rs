//! Matchers for the fraction input interaction.
//!
//! "Exactly" rules compare the fraction as typed; the others compare rational
//! values.

use std::cmp::Ordering;

use crate::types::Fraction;

pub fn is_exactly_equal_to(answer: &Fraction, f: &Fraction) -> bool {
    answer == f
}

pub fn is_equivalent_to(answer: &Fraction, f: &Fraction) -> bool {
    answer.is_equivalent_to(f)
}

/// Equivalent to `f`, and typed with no common factor left between numerator
/// and denominator.
pub fn is_equivalent_to_and_in_simplest_form(answer: &Fraction, f: &Fraction) -> bool {
    answer.is_equivalent_to(f) && answer.is_in_simplest_form()
}

pub fn is_less_than(answer: &Fraction, f: &Fraction) -> bool {
    answer.cmp_value(f) == Ordering::Less
}

pub fn is_greater_than(answer: &Fraction, f: &Fraction) -> bool {
    answer.cmp_value(f) == Ordering::Greater
}

pub fn has_numerator_equal_to(answer: &Fraction, x: &i32) -> bool {
    i64::from(answer.numerator) == i64::from(*x)
}

pub fn has_denominator_equal_to(answer: &Fraction, x: &u32) -> bool {
    answer.denominator == *x
}

/// The signed whole-number part equals `x`.
pub fn has_integer_part_equal_to(answer: &Fraction, x: &i32) -> bool {
    answer.integer_part() == i64::from(*x)
}

pub fn has_no_fractional_part(answer: &Fraction) -> bool {
    answer.numerator == 0
}

pub fn has_fractional_part_exactly_equal_to(answer: &Fraction, f: &Fraction) -> bool {
    answer.numerator == f.numerator && answer.denominator == f.denominator
}
