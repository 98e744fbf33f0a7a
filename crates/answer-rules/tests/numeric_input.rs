//! Tests for numeric input rules.

use answer_rules::{
    AnswerType, AnswerValue, ClassifyError, REAL_EQUALITY_TOLERANCE, RuleClassifier,
    RuleRegistry, inputs,
};

fn equals_classifier(x: impl Into<AnswerValue>) -> RuleClassifier {
    RuleRegistry::shared()
        .build_classifier("NumericInput", "Equals", &inputs! { "x" => x })
        .unwrap()
}

fn real(value: f64) -> AnswerValue {
    AnswerValue::Real(value)
}

// === Equals ===

#[test]
fn non_negative_answer_same_exact_value_matches() {
    assert!(equals_classifier(1.5).matches(&real(1.5)).unwrap());
}

#[test]
fn negative_answer_same_exact_value_matches() {
    assert!(equals_classifier(-1.5).matches(&real(-1.5)).unwrap());
}

#[test]
fn answer_within_tolerance_matches() {
    assert!(equals_classifier(1.000051).matches(&real(1.000052)).unwrap());
}

#[test]
fn difference_just_past_tolerance_does_not_match() {
    // |1.000061 - 1.000051| is 1.0000000000065512e-5 in f64
    assert!(!equals_classifier(1.000051).matches(&real(1.000061)).unwrap());
    assert!(!equals_classifier(1.000061).matches(&real(1.000051)).unwrap());
}

#[test]
fn non_negative_answer_out_of_range_does_not_match() {
    assert!(!equals_classifier(1.5).matches(&real(3.5)).unwrap());
}

#[test]
fn negative_answer_out_of_range_does_not_match() {
    assert!(!equals_classifier(-1.5).matches(&real(-3.5)).unwrap());
}

#[test]
fn mixed_sign_values_compare_by_signed_difference() {
    assert!(!equals_classifier(3.5).matches(&real(-3.5)).unwrap());
    assert!(!equals_classifier(1.5).matches(&real(-1.5)).unwrap());
    assert!(equals_classifier(0.000001).matches(&real(-0.000001)).unwrap());
}

#[test]
fn tolerance_bound_is_inclusive_and_symmetric() {
    let pairs = [
        (0.0, 0.0),
        (2.0, 2.0 + REAL_EQUALITY_TOLERANCE / 2.0),
        (-2.0, -2.0 - REAL_EQUALITY_TOLERANCE / 2.0),
        (10.0, 10.0 + REAL_EQUALITY_TOLERANCE * 3.0),
        (-0.5, 0.5),
        (100.0, 99.9),
    ];
    for (a, b) in pairs {
        let expected = (a - b).abs() <= REAL_EQUALITY_TOLERANCE;
        assert_eq!(equals_classifier(b).matches(&real(a)).unwrap(), expected, "{a} vs {b}");
        assert_eq!(equals_classifier(a).matches(&real(b)).unwrap(), expected, "{b} vs {a}");
    }
}

#[test]
fn missing_input_is_rejected() {
    let err = RuleRegistry::shared()
        .build_classifier("NumericInput", "Equals", &inputs! { "y" => 1.5 })
        .unwrap_err();
    assert_eq!(
        err,
        ClassifyError::MissingParameter {
            name: "x".to_string()
        }
    );
    assert!(
        err.to_string()
            .contains("Expected classifier inputs to contain parameter with name 'x'")
    );
}

#[test]
fn string_input_is_rejected() {
    let err = RuleRegistry::shared()
        .classify("NumericInput", "Equals", &inputs! { "x" => "test" }, &real(1.5))
        .unwrap_err();
    assert_eq!(
        err,
        ClassifyError::TypeMismatch {
            parameter: "x".to_string(),
            expected: AnswerType::Real,
            actual: AnswerType::NormalizedString,
        }
    );
    assert!(
        err.to_string()
            .contains("Expected input value to be of type REAL not NORMALIZED_STRING")
    );
}

#[test]
fn integer_input_is_not_widened_to_real() {
    let err = RuleRegistry::shared()
        .build_classifier("NumericInput", "Equals", &inputs! { "x" => 2u32 })
        .unwrap_err();
    assert!(matches!(
        err,
        ClassifyError::TypeMismatch {
            expected: AnswerType::Real,
            actual: AnswerType::NonNegativeInt,
            ..
        }
    ));
}

// === Ordering rules ===

fn check(rule: &str, rule_inputs: answer_rules::RuleInputs, answer: f64) -> bool {
    RuleRegistry::shared()
        .classify("NumericInput", rule, &rule_inputs, &real(answer))
        .unwrap()
}

#[test]
fn strict_comparisons() {
    assert!(check("IsLessThan", inputs! { "x" => 2.0 }, 1.0));
    assert!(!check("IsLessThan", inputs! { "x" => 2.0 }, 2.0));
    assert!(check("IsGreaterThan", inputs! { "x" => -2.0 }, -1.0));
    assert!(!check("IsGreaterThan", inputs! { "x" => 2.0 }, 2.0));
}

#[test]
fn inclusive_comparisons() {
    assert!(check("IsLessThanOrEqualTo", inputs! { "x" => 2.0 }, 2.0));
    assert!(!check("IsLessThanOrEqualTo", inputs! { "x" => 2.0 }, 2.5));
    assert!(check("IsGreaterThanOrEqualTo", inputs! { "x" => 2.0 }, 2.0));
    assert!(!check("IsGreaterThanOrEqualTo", inputs! { "x" => 2.0 }, 1.5));
}

#[test]
fn inclusively_between_includes_both_ends() {
    let range = || inputs! { "a" => -1.0, "b" => 3.0 };
    assert!(check("IsInclusivelyBetween", range(), -1.0));
    assert!(check("IsInclusivelyBetween", range(), 0.0));
    assert!(check("IsInclusivelyBetween", range(), 3.0));
    assert!(!check("IsInclusivelyBetween", range(), 3.01));
    assert!(!check("IsInclusivelyBetween", inputs! { "a" => 3.0, "b" => -1.0 }, 0.0));
}

#[test]
fn within_tolerance_uses_the_authored_tolerance() {
    let around_ten = || inputs! { "tol" => 0.5, "x" => 10.0 };
    assert!(check("IsWithinTolerance", around_ten(), 9.5));
    assert!(check("IsWithinTolerance", around_ten(), 10.25));
    assert!(!check("IsWithinTolerance", around_ten(), 10.75));
    assert!(!check("IsWithinTolerance", around_ten(), -10.0));
}

#[test]
fn within_tolerance_requires_both_inputs() {
    let err = RuleRegistry::shared()
        .build_classifier("NumericInput", "IsWithinTolerance", &inputs! { "x" => 10.0 })
        .unwrap_err();
    assert_eq!(
        err,
        ClassifyError::MissingParameter {
            name: "tol".to_string()
        }
    );
}
