/// Trims and collapses runs of whitespace into single spaces.
///
/// Learner text is normalized this way before any text rule compares it.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
