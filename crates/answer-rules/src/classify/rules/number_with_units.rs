//! Matchers for the number with units interaction.

use crate::types::NumberWithUnits;

pub fn is_equal_to(answer: &NumberWithUnits, f: &NumberWithUnits) -> bool {
    answer.is_equal_to(f)
}

/// Same quantity after conversion, so `1 km` matches `1000 m`.
pub fn is_equivalent_to(answer: &NumberWithUnits, f: &NumberWithUnits) -> bool {
    answer.is_equivalent_to(f)
}
