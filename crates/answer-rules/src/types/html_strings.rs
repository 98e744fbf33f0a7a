use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// An ordered list of unordered groups of HTML strings.
///
/// This is the answer shape of drag-and-drop sorting, where several items may
/// share a position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ListOfSetsOfHtmlStrings {
    pub sets: Vec<BTreeSet<String>>,
}

impl ListOfSetsOfHtmlStrings {
    /// Builds the list from nested iterables of strings.
    ///
    /// ```
    /// use answer_rules::ListOfSetsOfHtmlStrings;
    ///
    /// let ordering = ListOfSetsOfHtmlStrings::new([vec!["a"], vec!["b", "c"]]);
    /// assert_eq!(ordering.position_of("c"), Some(1));
    /// ```
    pub fn new(sets: impl IntoIterator<Item = impl IntoIterator<Item = impl Into<String>>>) -> Self {
        Self {
            sets: sets
                .into_iter()
                .map(|set| set.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    /// 0-based index of the first set containing `item`.
    pub fn position_of(&self, item: &str) -> Option<usize> {
        self.sets.iter().position(|set| set.contains(item))
    }
}

/// Collects strings into a set of HTML strings.
pub fn set_of_html_strings(items: impl IntoIterator<Item = impl Into<String>>) -> BTreeSet<String> {
    items.into_iter().map(Into::into).collect()
}
