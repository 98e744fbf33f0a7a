//! Tests for fraction input rules.

use answer_rules::{AnswerType, AnswerValue, ClassifyError, Fraction, RuleInputs, classify, inputs};

fn frac(text: &str) -> Fraction {
    text.parse().unwrap()
}

fn check(rule: &str, rule_inputs: RuleInputs, answer: &str) -> bool {
    classify(
        "FractionInput",
        rule,
        &rule_inputs,
        &AnswerValue::Fraction(frac(answer)),
    )
    .unwrap()
}

#[test]
fn exactly_equal_compares_the_typed_shape() {
    assert!(check("IsExactlyEqualTo", inputs! { "f" => frac("2/4") }, "2/4"));
    assert!(!check("IsExactlyEqualTo", inputs! { "f" => frac("1/2") }, "2/4"));
    assert!(!check("IsExactlyEqualTo", inputs! { "f" => frac("3/2") }, "1 1/2"));
    assert!(!check("IsExactlyEqualTo", inputs! { "f" => frac("1/2") }, "-1/2"));
}

#[test]
fn equivalent_compares_rational_values() {
    assert!(check("IsEquivalentTo", inputs! { "f" => frac("1/2") }, "2/4"));
    assert!(check("IsEquivalentTo", inputs! { "f" => frac("3/2") }, "1 1/2"));
    assert!(check("IsEquivalentTo", inputs! { "f" => frac("-6/4") }, "-1 1/2"));
    assert!(!check("IsEquivalentTo", inputs! { "f" => frac("1/2") }, "-1/2"));
    assert!(check("IsEquivalentTo", inputs! { "f" => frac("0/5") }, "-0/3"));
}

#[test]
fn equivalent_and_in_simplest_form_rejects_reducible_answers() {
    let half = || inputs! { "f" => frac("2/4") };
    assert!(check("IsEquivalentToAndInSimplestForm", half(), "1/2"));
    assert!(!check("IsEquivalentToAndInSimplestForm", half(), "2/4"));
    assert!(!check("IsEquivalentToAndInSimplestForm", half(), "1/3"));
}

#[test]
fn ordering_rules_compare_values() {
    assert!(check("IsLessThan", inputs! { "f" => frac("1/2") }, "1/3"));
    assert!(!check("IsLessThan", inputs! { "f" => frac("1/2") }, "2/4"));
    assert!(check("IsLessThan", inputs! { "f" => frac("1/2") }, "-3/2"));
    assert!(check("IsGreaterThan", inputs! { "f" => frac("-1 1/2") }, "-1 1/3"));
    assert!(!check("IsGreaterThan", inputs! { "f" => frac("7/4") }, "1 3/4"));
}

#[test]
fn part_rules_inspect_the_typed_fields() {
    assert!(check("HasNumeratorEqualTo", inputs! { "x" => 2i32 }, "1 2/3"));
    assert!(!check("HasNumeratorEqualTo", inputs! { "x" => -2i32 }, "-2/3"));
    assert!(check("HasDenominatorEqualTo", inputs! { "x" => 3u32 }, "1 2/3"));
    assert!(check("HasIntegerPartEqualTo", inputs! { "x" => -1i32 }, "-1 2/3"));
    assert!(!check("HasIntegerPartEqualTo", inputs! { "x" => 1i32 }, "-1 2/3"));
    assert!(check("HasIntegerPartEqualTo", inputs! { "x" => 0i32 }, "2/3"));
}

#[test]
fn no_fractional_part_takes_no_inputs() {
    assert!(check("HasNoFractionalPart", inputs! {}, "5"));
    assert!(check("HasNoFractionalPart", inputs! {}, "-2"));
    assert!(!check("HasNoFractionalPart", inputs! {}, "2 1/3"));
    assert!(check("HasNoFractionalPart", inputs! { "x" => 1.0 }, "0"));
}

#[test]
fn fractional_part_ignores_whole_number_and_sign() {
    let two_thirds = || inputs! { "f" => frac("2/3") };
    assert!(check("HasFractionalPartExactlyEqualTo", two_thirds(), "1 2/3"));
    assert!(check("HasFractionalPartExactlyEqualTo", two_thirds(), "-5 2/3"));
    assert!(!check("HasFractionalPartExactlyEqualTo", two_thirds(), "4/6"));
}

#[test]
fn numerator_must_be_a_signed_int() {
    let err = classify(
        "FractionInput",
        "HasNumeratorEqualTo",
        &inputs! { "x" => 2u32 },
        &AnswerValue::Fraction(frac("2/3")),
    )
    .unwrap_err();
    assert_eq!(
        err,
        ClassifyError::TypeMismatch {
            parameter: "x".to_string(),
            expected: AnswerType::SignedInt,
            actual: AnswerType::NonNegativeInt,
        }
    );
}

#[test]
fn real_answer_is_rejected() {
    let err = classify(
        "FractionInput",
        "IsEquivalentTo",
        &inputs! { "f" => frac("1/2") },
        &AnswerValue::Real(0.5),
    )
    .unwrap_err();
    insta::assert_snapshot!(err.to_string(), @"Expected answer to be of type FRACTION not REAL");
}

#[test]
fn simplest_form_keeps_whole_number_and_sign() {
    assert_eq!(frac("-1 2/4").to_simplest_form(), frac("-1 1/2"));
    assert_eq!(frac("0/4").to_simplest_form(), frac("0/1"));
    assert!(frac("3").is_in_simplest_form());
}

#[test]
fn value_comparison_does_not_overflow() {
    let big = Fraction::builder()
        .whole_number(u32::MAX)
        .numerator(u32::MAX - 1)
        .denominator(u32::MAX)
        .build();
    let bigger = Fraction::builder().whole_number(u32::MAX).numerator(1).denominator(1).build();
    assert!(answer_rules::classify::rules::fraction_input::is_less_than(&big, &bigger));
    assert!(big.is_equivalent_to(&big.to_simplest_form()));
}
