//! Rule matchers, one module per interaction, and the table that binds each
//! rule to its declared signature.
//!
//! Matchers are plain functions of the answer and the rule parameters. They
//! hold no state and never mutate their arguments.

pub mod drag_and_drop_sort_input;
pub mod fraction_input;
pub mod image_click_input;
pub mod item_selection_input;
pub mod multiple_choice_input;
pub mod number_with_units;
pub mod numeric_input;
pub mod ratio_expression_input;
pub mod text_input;

use answer_rules_semantics::RuleId;

use crate::classify::ClassifierFactory;
use crate::types::{ClickOnImage, ListOfSetsOfHtmlStrings};

/// The classifier factory for `rule`: its answer type, parameter names and
/// types, and matcher.
pub(crate) fn provider(rule: RuleId) -> ClassifierFactory {
    match rule {
        RuleId::NumericInputEquals => ClassifierFactory::single_input("x", numeric_input::equals),
        RuleId::NumericInputIsLessThan => {
            ClassifierFactory::single_input("x", numeric_input::is_less_than)
        }
        RuleId::NumericInputIsGreaterThan => {
            ClassifierFactory::single_input("x", numeric_input::is_greater_than)
        }
        RuleId::NumericInputIsLessThanOrEqualTo => {
            ClassifierFactory::single_input("x", numeric_input::is_less_than_or_equal_to)
        }
        RuleId::NumericInputIsGreaterThanOrEqualTo => {
            ClassifierFactory::single_input("x", numeric_input::is_greater_than_or_equal_to)
        }
        RuleId::NumericInputIsInclusivelyBetween => {
            ClassifierFactory::double_input("a", "b", numeric_input::is_inclusively_between)
        }
        RuleId::NumericInputIsWithinTolerance => {
            ClassifierFactory::double_input("tol", "x", numeric_input::is_within_tolerance)
        }

        RuleId::FractionInputIsExactlyEqualTo => {
            ClassifierFactory::single_input("f", fraction_input::is_exactly_equal_to)
        }
        RuleId::FractionInputIsEquivalentTo => {
            ClassifierFactory::single_input("f", fraction_input::is_equivalent_to)
        }
        RuleId::FractionInputIsEquivalentToAndInSimplestForm => ClassifierFactory::single_input(
            "f",
            fraction_input::is_equivalent_to_and_in_simplest_form,
        ),
        RuleId::FractionInputIsLessThan => {
            ClassifierFactory::single_input("f", fraction_input::is_less_than)
        }
        RuleId::FractionInputIsGreaterThan => {
            ClassifierFactory::single_input("f", fraction_input::is_greater_than)
        }
        RuleId::FractionInputHasNumeratorEqualTo => {
            ClassifierFactory::single_input("x", fraction_input::has_numerator_equal_to)
        }
        RuleId::FractionInputHasDenominatorEqualTo => {
            ClassifierFactory::single_input("x", fraction_input::has_denominator_equal_to)
        }
        RuleId::FractionInputHasIntegerPartEqualTo => {
            ClassifierFactory::single_input("x", fraction_input::has_integer_part_equal_to)
        }
        RuleId::FractionInputHasNoFractionalPart => {
            ClassifierFactory::no_input(fraction_input::has_no_fractional_part)
        }
        RuleId::FractionInputHasFractionalPartExactlyEqualTo => ClassifierFactory::single_input(
            "f",
            fraction_input::has_fractional_part_exactly_equal_to,
        ),

        RuleId::TextInputEquals => {
            ClassifierFactory::single_input::<String, String>("x", |answer, x| {
                text_input::equals(answer, x)
            })
        }
        RuleId::TextInputCaseSensitiveEquals => {
            ClassifierFactory::single_input::<String, String>("x", |answer, x| {
                text_input::case_sensitive_equals(answer, x)
            })
        }
        RuleId::TextInputStartsWith => {
            ClassifierFactory::single_input::<String, String>("x", |answer, x| {
                text_input::starts_with(answer, x)
            })
        }
        RuleId::TextInputContains => {
            ClassifierFactory::single_input::<String, String>("x", |answer, x| {
                text_input::contains(answer, x)
            })
        }
        RuleId::TextInputFuzzyEquals => {
            ClassifierFactory::single_input::<String, String>("x", |answer, x| {
                text_input::fuzzy_equals(answer, x)
            })
        }

        RuleId::MultipleChoiceInputEquals => {
            ClassifierFactory::single_input("x", multiple_choice_input::equals)
        }

        RuleId::ItemSelectionInputEquals => {
            ClassifierFactory::single_input("x", item_selection_input::equals)
        }
        RuleId::ItemSelectionInputContainsAtLeastOneOf => {
            ClassifierFactory::single_input("x", item_selection_input::contains_at_least_one_of)
        }
        RuleId::ItemSelectionInputDoesNotContainAtLeastOneOf => ClassifierFactory::single_input(
            "x",
            item_selection_input::does_not_contain_at_least_one_of,
        ),
        RuleId::ItemSelectionInputIsProperSubsetOf => {
            ClassifierFactory::single_input("x", item_selection_input::is_proper_subset_of)
        }

        RuleId::DragAndDropSortInputIsEqualToOrdering => {
            ClassifierFactory::single_input("x", drag_and_drop_sort_input::is_equal_to_ordering)
        }
        RuleId::DragAndDropSortInputIsEqualToOrderingWithOneItemAtIncorrectPosition => {
            ClassifierFactory::single_input(
                "x",
                drag_and_drop_sort_input::is_equal_to_ordering_with_one_item_at_incorrect_position,
            )
        }
        RuleId::DragAndDropSortInputHasElementXAtPositionY => {
            ClassifierFactory::double_input::<ListOfSetsOfHtmlStrings, String, u32>(
                "x",
                "y",
                |answer, x, y| drag_and_drop_sort_input::has_element_x_at_position_y(answer, x, *y),
            )
        }
        RuleId::DragAndDropSortInputHasElementXBeforeElementY => {
            ClassifierFactory::double_input::<ListOfSetsOfHtmlStrings, String, String>(
                "x",
                "y",
                |answer, x, y| drag_and_drop_sort_input::has_element_x_before_element_y(answer, x, y),
            )
        }

        RuleId::ImageClickInputIsInRegion => {
            ClassifierFactory::single_input::<ClickOnImage, String>("x", |answer, x| {
                image_click_input::is_in_region(answer, x)
            })
        }

        RuleId::RatioExpressionInputEquals => {
            ClassifierFactory::single_input("x", ratio_expression_input::equals)
        }
        RuleId::RatioExpressionInputIsEquivalent => {
            ClassifierFactory::single_input("x", ratio_expression_input::is_equivalent)
        }
        RuleId::RatioExpressionInputHasNumberOfTermsEqualTo => {
            ClassifierFactory::single_input("y", ratio_expression_input::has_number_of_terms_equal_to)
        }
        RuleId::RatioExpressionInputHasSpecificTermEqualTo => ClassifierFactory::double_input(
            "x",
            "y",
            ratio_expression_input::has_specific_term_equal_to,
        ),

        RuleId::NumberWithUnitsIsEqualTo => {
            ClassifierFactory::single_input("f", number_with_units::is_equal_to)
        }
        RuleId::NumberWithUnitsIsEquivalentTo => {
            ClassifierFactory::single_input("f", number_with_units::is_equivalent_to)
        }
    }
}
