//! Shared answer-rules semantic tables used by both the engine and its tooling.
//!
//! This crate centralizes interaction id and rule name resolution so the
//! classification engine, the CLI, and authoring tools agree on which
//! (interaction, rule) pairs exist.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Canonical interaction identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum InteractionId {
    NumericInput,
    FractionInput,
    TextInput,
    MultipleChoiceInput,
    ItemSelectionInput,
    DragAndDropSortInput,
    ImageClickInput,
    RatioExpressionInput,
    NumberWithUnits,
}

impl InteractionId {
    /// Every interaction that has registered rules.
    pub const ALL: [InteractionId; 9] = [
        InteractionId::NumericInput,
        InteractionId::FractionInput,
        InteractionId::TextInput,
        InteractionId::MultipleChoiceInput,
        InteractionId::ItemSelectionInput,
        InteractionId::DragAndDropSortInput,
        InteractionId::ImageClickInput,
        InteractionId::RatioExpressionInput,
        InteractionId::NumberWithUnits,
    ];

    /// The identifier content authors use for this interaction.
    pub const fn name(self) -> &'static str {
        match self {
            InteractionId::NumericInput => "NumericInput",
            InteractionId::FractionInput => "FractionInput",
            InteractionId::TextInput => "TextInput",
            InteractionId::MultipleChoiceInput => "MultipleChoiceInput",
            InteractionId::ItemSelectionInput => "ItemSelectionInput",
            InteractionId::DragAndDropSortInput => "DragAndDropSortInput",
            InteractionId::ImageClickInput => "ImageClickInput",
            InteractionId::RatioExpressionInput => "RatioExpressionInput",
            InteractionId::NumberWithUnits => "NumberWithUnits",
        }
    }

    /// Rules registered for this interaction, in catalogue order.
    pub fn rules(self) -> impl Iterator<Item = RuleId> {
        RuleId::ALL
            .into_iter()
            .filter(move |rule| rule.interaction() == self)
    }
}

impl Display for InteractionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.name())
    }
}

/// Canonical rule identifiers, one per (interaction, rule name) pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum RuleId {
    NumericInputEquals,
    NumericInputIsLessThan,
    NumericInputIsGreaterThan,
    NumericInputIsLessThanOrEqualTo,
    NumericInputIsGreaterThanOrEqualTo,
    NumericInputIsInclusivelyBetween,
    NumericInputIsWithinTolerance,
    FractionInputIsExactlyEqualTo,
    FractionInputIsEquivalentTo,
    FractionInputIsEquivalentToAndInSimplestForm,
    FractionInputIsLessThan,
    FractionInputIsGreaterThan,
    FractionInputHasNumeratorEqualTo,
    FractionInputHasDenominatorEqualTo,
    FractionInputHasIntegerPartEqualTo,
    FractionInputHasNoFractionalPart,
    FractionInputHasFractionalPartExactlyEqualTo,
    TextInputEquals,
    TextInputCaseSensitiveEquals,
    TextInputStartsWith,
    TextInputContains,
    TextInputFuzzyEquals,
    MultipleChoiceInputEquals,
    ItemSelectionInputEquals,
    ItemSelectionInputContainsAtLeastOneOf,
    ItemSelectionInputDoesNotContainAtLeastOneOf,
    ItemSelectionInputIsProperSubsetOf,
    DragAndDropSortInputIsEqualToOrdering,
    DragAndDropSortInputIsEqualToOrderingWithOneItemAtIncorrectPosition,
    DragAndDropSortInputHasElementXAtPositionY,
    DragAndDropSortInputHasElementXBeforeElementY,
    ImageClickInputIsInRegion,
    RatioExpressionInputEquals,
    RatioExpressionInputIsEquivalent,
    RatioExpressionInputHasNumberOfTermsEqualTo,
    RatioExpressionInputHasSpecificTermEqualTo,
    NumberWithUnitsIsEqualTo,
    NumberWithUnitsIsEquivalentTo,
}

impl RuleId {
    /// Every registered rule.
    pub const ALL: [RuleId; 38] = [
        RuleId::NumericInputEquals,
        RuleId::NumericInputIsLessThan,
        RuleId::NumericInputIsGreaterThan,
        RuleId::NumericInputIsLessThanOrEqualTo,
        RuleId::NumericInputIsGreaterThanOrEqualTo,
        RuleId::NumericInputIsInclusivelyBetween,
        RuleId::NumericInputIsWithinTolerance,
        RuleId::FractionInputIsExactlyEqualTo,
        RuleId::FractionInputIsEquivalentTo,
        RuleId::FractionInputIsEquivalentToAndInSimplestForm,
        RuleId::FractionInputIsLessThan,
        RuleId::FractionInputIsGreaterThan,
        RuleId::FractionInputHasNumeratorEqualTo,
        RuleId::FractionInputHasDenominatorEqualTo,
        RuleId::FractionInputHasIntegerPartEqualTo,
        RuleId::FractionInputHasNoFractionalPart,
        RuleId::FractionInputHasFractionalPartExactlyEqualTo,
        RuleId::TextInputEquals,
        RuleId::TextInputCaseSensitiveEquals,
        RuleId::TextInputStartsWith,
        RuleId::TextInputContains,
        RuleId::TextInputFuzzyEquals,
        RuleId::MultipleChoiceInputEquals,
        RuleId::ItemSelectionInputEquals,
        RuleId::ItemSelectionInputContainsAtLeastOneOf,
        RuleId::ItemSelectionInputDoesNotContainAtLeastOneOf,
        RuleId::ItemSelectionInputIsProperSubsetOf,
        RuleId::DragAndDropSortInputIsEqualToOrdering,
        RuleId::DragAndDropSortInputIsEqualToOrderingWithOneItemAtIncorrectPosition,
        RuleId::DragAndDropSortInputHasElementXAtPositionY,
        RuleId::DragAndDropSortInputHasElementXBeforeElementY,
        RuleId::ImageClickInputIsInRegion,
        RuleId::RatioExpressionInputEquals,
        RuleId::RatioExpressionInputIsEquivalent,
        RuleId::RatioExpressionInputHasNumberOfTermsEqualTo,
        RuleId::RatioExpressionInputHasSpecificTermEqualTo,
        RuleId::NumberWithUnitsIsEqualTo,
        RuleId::NumberWithUnitsIsEquivalentTo,
    ];

    /// The interaction this rule belongs to.
    pub const fn interaction(self) -> InteractionId {
        match self {
            RuleId::NumericInputEquals
            | RuleId::NumericInputIsLessThan
            | RuleId::NumericInputIsGreaterThan
            | RuleId::NumericInputIsLessThanOrEqualTo
            | RuleId::NumericInputIsGreaterThanOrEqualTo
            | RuleId::NumericInputIsInclusivelyBetween
            | RuleId::NumericInputIsWithinTolerance => InteractionId::NumericInput,
            RuleId::FractionInputIsExactlyEqualTo
            | RuleId::FractionInputIsEquivalentTo
            | RuleId::FractionInputIsEquivalentToAndInSimplestForm
            | RuleId::FractionInputIsLessThan
            | RuleId::FractionInputIsGreaterThan
            | RuleId::FractionInputHasNumeratorEqualTo
            | RuleId::FractionInputHasDenominatorEqualTo
            | RuleId::FractionInputHasIntegerPartEqualTo
            | RuleId::FractionInputHasNoFractionalPart
            | RuleId::FractionInputHasFractionalPartExactlyEqualTo => InteractionId::FractionInput,
            RuleId::TextInputEquals
            | RuleId::TextInputCaseSensitiveEquals
            | RuleId::TextInputStartsWith
            | RuleId::TextInputContains
            | RuleId::TextInputFuzzyEquals => InteractionId::TextInput,
            RuleId::MultipleChoiceInputEquals => InteractionId::MultipleChoiceInput,
            RuleId::ItemSelectionInputEquals
            | RuleId::ItemSelectionInputContainsAtLeastOneOf
            | RuleId::ItemSelectionInputDoesNotContainAtLeastOneOf
            | RuleId::ItemSelectionInputIsProperSubsetOf => InteractionId::ItemSelectionInput,
            RuleId::DragAndDropSortInputIsEqualToOrdering
            | RuleId::DragAndDropSortInputIsEqualToOrderingWithOneItemAtIncorrectPosition
            | RuleId::DragAndDropSortInputHasElementXAtPositionY
            | RuleId::DragAndDropSortInputHasElementXBeforeElementY => {
                InteractionId::DragAndDropSortInput
            }
            RuleId::ImageClickInputIsInRegion => InteractionId::ImageClickInput,
            RuleId::RatioExpressionInputEquals
            | RuleId::RatioExpressionInputIsEquivalent
            | RuleId::RatioExpressionInputHasNumberOfTermsEqualTo
            | RuleId::RatioExpressionInputHasSpecificTermEqualTo => {
                InteractionId::RatioExpressionInput
            }
            RuleId::NumberWithUnitsIsEqualTo | RuleId::NumberWithUnitsIsEquivalentTo => {
                InteractionId::NumberWithUnits
            }
        }
    }

    /// The rule name content authors attach to the interaction.
    pub const fn name(self) -> &'static str {
        match self {
            RuleId::NumericInputEquals
            | RuleId::TextInputEquals
            | RuleId::MultipleChoiceInputEquals
            | RuleId::ItemSelectionInputEquals
            | RuleId::RatioExpressionInputEquals => "Equals",
            RuleId::NumericInputIsLessThan | RuleId::FractionInputIsLessThan => "IsLessThan",
            RuleId::NumericInputIsGreaterThan | RuleId::FractionInputIsGreaterThan => {
                "IsGreaterThan"
            }
            RuleId::NumericInputIsLessThanOrEqualTo => "IsLessThanOrEqualTo",
            RuleId::NumericInputIsGreaterThanOrEqualTo => "IsGreaterThanOrEqualTo",
            RuleId::NumericInputIsInclusivelyBetween => "IsInclusivelyBetween",
            RuleId::NumericInputIsWithinTolerance => "IsWithinTolerance",
            RuleId::FractionInputIsExactlyEqualTo => "IsExactlyEqualTo",
            RuleId::FractionInputIsEquivalentTo | RuleId::NumberWithUnitsIsEquivalentTo => {
                "IsEquivalentTo"
            }
            RuleId::FractionInputIsEquivalentToAndInSimplestForm => {
                "IsEquivalentToAndInSimplestForm"
            }
            RuleId::FractionInputHasNumeratorEqualTo => "HasNumeratorEqualTo",
            RuleId::FractionInputHasDenominatorEqualTo => "HasDenominatorEqualTo",
            RuleId::FractionInputHasIntegerPartEqualTo => "HasIntegerPartEqualTo",
            RuleId::FractionInputHasNoFractionalPart => "HasNoFractionalPart",
            RuleId::FractionInputHasFractionalPartExactlyEqualTo => {
                "HasFractionalPartExactlyEqualTo"
            }
            RuleId::TextInputCaseSensitiveEquals => "CaseSensitiveEquals",
            RuleId::TextInputStartsWith => "StartsWith",
            RuleId::TextInputContains => "Contains",
            RuleId::TextInputFuzzyEquals => "FuzzyEquals",
            RuleId::ItemSelectionInputContainsAtLeastOneOf => "ContainsAtLeastOneOf",
            RuleId::ItemSelectionInputDoesNotContainAtLeastOneOf => "DoesNotContainAtLeastOneOf",
            RuleId::ItemSelectionInputIsProperSubsetOf => "IsProperSubsetOf",
            RuleId::DragAndDropSortInputIsEqualToOrdering => "IsEqualToOrdering",
            RuleId::DragAndDropSortInputIsEqualToOrderingWithOneItemAtIncorrectPosition => {
                "IsEqualToOrderingWithOneItemAtIncorrectPosition"
            }
            RuleId::DragAndDropSortInputHasElementXAtPositionY => "HasElementXAtPositionY",
            RuleId::DragAndDropSortInputHasElementXBeforeElementY => "HasElementXBeforeElementY",
            RuleId::ImageClickInputIsInRegion => "IsInRegion",
            RuleId::RatioExpressionInputIsEquivalent => "IsEquivalent",
            RuleId::RatioExpressionInputHasNumberOfTermsEqualTo => "HasNumberOfTermsEqualTo",
            RuleId::RatioExpressionInputHasSpecificTermEqualTo => "HasSpecificTermEqualTo",
            RuleId::NumberWithUnitsIsEqualTo => "IsEqualTo",
        }
    }
}

impl Display for RuleId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}.{}", self.interaction().name(), self.name())
    }
}

/// Resolve an interaction identifier to its canonical id.
pub fn resolve_interaction(name: &str) -> Option<InteractionId> {
    match name {
        "NumericInput" => Some(InteractionId::NumericInput),
        "FractionInput" => Some(InteractionId::FractionInput),
        "TextInput" => Some(InteractionId::TextInput),
        "MultipleChoiceInput" => Some(InteractionId::MultipleChoiceInput),
        "ItemSelectionInput" => Some(InteractionId::ItemSelectionInput),
        "DragAndDropSortInput" => Some(InteractionId::DragAndDropSortInput),
        "ImageClickInput" => Some(InteractionId::ImageClickInput),
        "RatioExpressionInput" => Some(InteractionId::RatioExpressionInput),
        "NumberWithUnits" => Some(InteractionId::NumberWithUnits),
        _ => None,
    }
}

/// Resolve a rule name within an interaction to a canonical rule id.
///
/// Rule names are case-sensitive and scoped to their interaction: `"Equals"`
/// resolves for `NumericInput` and `TextInput` to different rules, and not at
/// all for `FractionInput`.
pub fn resolve_rule(interaction: InteractionId, rule: &str) -> Option<RuleId> {
    interaction.rules().find(|id| id.name() == rule)
}

/// Accepted rule names for the given interaction.
///
/// Used for diagnostics and typo suggestions.
pub fn accepted_rule_names(interaction: InteractionId) -> &'static [&'static str] {
    match interaction {
        InteractionId::NumericInput => NUMERIC_INPUT_NAMES,
        InteractionId::FractionInput => FRACTION_INPUT_NAMES,
        InteractionId::TextInput => TEXT_INPUT_NAMES,
        InteractionId::MultipleChoiceInput => MULTIPLE_CHOICE_INPUT_NAMES,
        InteractionId::ItemSelectionInput => ITEM_SELECTION_INPUT_NAMES,
        InteractionId::DragAndDropSortInput => DRAG_AND_DROP_SORT_INPUT_NAMES,
        InteractionId::ImageClickInput => IMAGE_CLICK_INPUT_NAMES,
        InteractionId::RatioExpressionInput => RATIO_EXPRESSION_INPUT_NAMES,
        InteractionId::NumberWithUnits => NUMBER_WITH_UNITS_NAMES,
    }
}

/// Accepted interaction identifiers.
pub const INTERACTION_NAMES: &[&str] = &[
    "NumericInput",
    "FractionInput",
    "TextInput",
    "MultipleChoiceInput",
    "ItemSelectionInput",
    "DragAndDropSortInput",
    "ImageClickInput",
    "RatioExpressionInput",
    "NumberWithUnits",
];

const NUMERIC_INPUT_NAMES: &[&str] = &[
    "Equals",
    "IsLessThan",
    "IsGreaterThan",
    "IsLessThanOrEqualTo",
    "IsGreaterThanOrEqualTo",
    "IsInclusivelyBetween",
    "IsWithinTolerance",
];
const FRACTION_INPUT_NAMES: &[&str] = &[
    "IsExactlyEqualTo",
    "IsEquivalentTo",
    "IsEquivalentToAndInSimplestForm",
    "IsLessThan",
    "IsGreaterThan",
    "HasNumeratorEqualTo",
    "HasDenominatorEqualTo",
    "HasIntegerPartEqualTo",
    "HasNoFractionalPart",
    "HasFractionalPartExactlyEqualTo",
];
const TEXT_INPUT_NAMES: &[&str] = &[
    "Equals",
    "CaseSensitiveEquals",
    "StartsWith",
    "Contains",
    "FuzzyEquals",
];
const MULTIPLE_CHOICE_INPUT_NAMES: &[&str] = &["Equals"];
const ITEM_SELECTION_INPUT_NAMES: &[&str] = &[
    "Equals",
    "ContainsAtLeastOneOf",
    "DoesNotContainAtLeastOneOf",
    "IsProperSubsetOf",
];
const DRAG_AND_DROP_SORT_INPUT_NAMES: &[&str] = &[
    "IsEqualToOrdering",
    "IsEqualToOrderingWithOneItemAtIncorrectPosition",
    "HasElementXAtPositionY",
    "HasElementXBeforeElementY",
];
const IMAGE_CLICK_INPUT_NAMES: &[&str] = &["IsInRegion"];
const RATIO_EXPRESSION_INPUT_NAMES: &[&str] = &[
    "Equals",
    "IsEquivalent",
    "HasNumberOfTermsEqualTo",
    "HasSpecificTermEqualTo",
];
const NUMBER_WITH_UNITS_NAMES: &[&str] = &["IsEqualTo", "IsEquivalentTo"];
