//! Matchers for the item selection interaction. Answers are sets of selected
//! items.

use std::collections::BTreeSet;

pub fn equals(answer: &BTreeSet<String>, x: &BTreeSet<String>) -> bool {
    answer == x
}

pub fn contains_at_least_one_of(answer: &BTreeSet<String>, x: &BTreeSet<String>) -> bool {
    !answer.is_disjoint(x)
}

/// Some item of `x` was not selected.
pub fn does_not_contain_at_least_one_of(answer: &BTreeSet<String>, x: &BTreeSet<String>) -> bool {
    !x.is_subset(answer)
}

pub fn is_proper_subset_of(answer: &BTreeSet<String>, x: &BTreeSet<String>) -> bool {
    answer.len() < x.len() && answer.is_subset(x)
}
