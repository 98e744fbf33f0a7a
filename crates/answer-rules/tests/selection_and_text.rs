//! Tests for text, multiple choice, item selection, and image click rules.

use answer_rules::types::set_of_html_strings;
use answer_rules::{AnswerType, AnswerValue, ClassifyError, ClickOnImage, Point2d, classify, inputs};

fn text(rule: &str, x: &str, answer: &str) -> bool {
    classify("TextInput", rule, &inputs! { "x" => x }, &answer.into()).unwrap()
}

fn selection(rule: &str, x: &[&str], answer: &[&str]) -> bool {
    classify(
        "ItemSelectionInput",
        rule,
        &inputs! { "x" => set_of_html_strings(x.iter().copied()) },
        &AnswerValue::SetOfHtmlString(set_of_html_strings(answer.iter().copied())),
    )
    .unwrap()
}

// === TextInput ===

#[test]
fn text_equals_normalizes_whitespace_and_case() {
    assert!(text("Equals", "Hello World", "  hello   world "));
    assert!(!text("Equals", "Hello World", "hello worlds"));
}

#[test]
fn text_case_sensitive_equals_only_normalizes_whitespace() {
    assert!(text("CaseSensitiveEquals", "Hello World", "Hello  World"));
    assert!(!text("CaseSensitiveEquals", "Hello World", "hello world"));
}

#[test]
fn text_starts_with_and_contains() {
    assert!(text("StartsWith", "photo", "Photosynthesis"));
    assert!(!text("StartsWith", "synthesis", "Photosynthesis"));
    assert!(text("Contains", "SYNTH", "photosynthesis"));
    assert!(!text("Contains", "chlorophyll", "photosynthesis"));
}

#[test]
fn text_fuzzy_equals_allows_one_edit() {
    assert!(text("FuzzyEquals", "necessary", "neccessary"));
    assert!(text("FuzzyEquals", "cat", "Cut"));
    assert!(!text("FuzzyEquals", "necessary", "nesesary"));
}

#[test]
fn text_rules_reject_non_string_inputs() {
    let err = classify("TextInput", "Equals", &inputs! { "x" => 3u32 }, &"3".into()).unwrap_err();
    assert_eq!(
        err,
        ClassifyError::TypeMismatch {
            parameter: "x".to_string(),
            expected: AnswerType::NormalizedString,
            actual: AnswerType::NonNegativeInt,
        }
    );
}

// === MultipleChoiceInput ===

#[test]
fn multiple_choice_equals_compares_choice_index() {
    let pick = |x: u32, answer: u32| {
        classify("MultipleChoiceInput", "Equals", &inputs! { "x" => x }, &answer.into()).unwrap()
    };
    assert!(pick(2, 2));
    assert!(!pick(2, 0));
}

// === ItemSelectionInput ===

#[test]
fn item_selection_equals_ignores_order() {
    assert!(selection("Equals", &["a", "b"], &["b", "a"]));
    assert!(!selection("Equals", &["a", "b"], &["a"]));
}

#[test]
fn item_selection_overlap_rules() {
    assert!(selection("ContainsAtLeastOneOf", &["a", "z"], &["a", "b"]));
    assert!(!selection("ContainsAtLeastOneOf", &["y", "z"], &["a", "b"]));
    assert!(selection("DoesNotContainAtLeastOneOf", &["a", "z"], &["a", "b"]));
    assert!(!selection("DoesNotContainAtLeastOneOf", &["a", "b"], &["a", "b", "c"]));
}

#[test]
fn item_selection_proper_subset_excludes_equal_sets() {
    assert!(selection("IsProperSubsetOf", &["a", "b", "c"], &["a", "c"]));
    assert!(selection("IsProperSubsetOf", &["a"], &[]));
    assert!(!selection("IsProperSubsetOf", &["a", "b"], &["a", "b"]));
    assert!(!selection("IsProperSubsetOf", &["a", "b"], &["a", "d"]));
}

// === ImageClickInput ===

#[test]
fn image_click_checks_region_membership() {
    let click = ClickOnImage::builder()
        .click_position(Point2d { x: 0.25, y: 0.75 })
        .clicked_regions(vec!["leaf".to_string(), "stem".to_string()])
        .build();
    let in_region = |region: &str| {
        classify(
            "ImageClickInput",
            "IsInRegion",
            &inputs! { "x" => region },
            &AnswerValue::ClickOnImage(click.clone()),
        )
        .unwrap()
    };
    assert!(in_region("stem"));
    assert!(!in_region("root"));
    assert!(!in_region("Leaf"));
}

#[test]
fn image_click_with_no_regions_never_matches() {
    let matched = classify(
        "ImageClickInput",
        "IsInRegion",
        &inputs! { "x" => "leaf" },
        &AnswerValue::ClickOnImage(ClickOnImage::builder().build()),
    )
    .unwrap();
    assert!(!matched);
}
