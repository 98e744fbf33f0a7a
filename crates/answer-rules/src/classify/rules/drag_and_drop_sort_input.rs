//! Matchers for the drag-and-drop sort interaction.
//!
//! Answers are ordered lists of sets: items dropped into the same slot share a
//! position. Positions given by authors are 1-based.

use crate::types::ListOfSetsOfHtmlStrings;

pub fn is_equal_to_ordering(answer: &ListOfSetsOfHtmlStrings, x: &ListOfSetsOfHtmlStrings) -> bool {
    answer == x
}

/// Exactly one item is out of place.
///
/// Walks the positions both orderings share. At each one, counts the items of
/// the larger set that the other set lacks.
pub fn is_equal_to_ordering_with_one_item_at_incorrect_position(
    answer: &ListOfSetsOfHtmlStrings,
    x: &ListOfSetsOfHtmlStrings,
) -> bool {
    let mismatches: usize = answer
        .sets
        .iter()
        .zip(&x.sets)
        .map(|(given, expected)| {
            if expected.len() > given.len() {
                expected.difference(given).count()
            } else {
                given.difference(expected).count()
            }
        })
        .sum();
    mismatches == 1
}

/// The first set containing `x` sits at 1-based position `y`. An absent `x`
/// never matches.
pub fn has_element_x_at_position_y(answer: &ListOfSetsOfHtmlStrings, x: &str, y: u32) -> bool {
    answer
        .position_of(x)
        .and_then(|index| u32::try_from(index + 1).ok())
        == Some(y)
}

/// Both items are present and `x` is in a strictly earlier set than `y`.
pub fn has_element_x_before_element_y(answer: &ListOfSetsOfHtmlStrings, x: &str, y: &str) -> bool {
    match (answer.position_of(x), answer.position_of(y)) {
        (Some(x_index), Some(y_index)) => x_index < y_index,
        _ => false,
    }
}
