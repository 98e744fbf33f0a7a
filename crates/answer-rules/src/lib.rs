pub mod classify;
pub mod parser;
pub mod types;

pub use answer_rules_semantics::{InteractionId, RuleId, resolve_interaction, resolve_rule};
pub use classify::{
    ClassifierFactory, ClassifyError, InputSpec, RuleClassifier, RuleInputs, RuleRegistry,
    classify, compute_suggestions,
};
pub use types::{
    AnswerType, AnswerValue, ClickOnImage, Fraction, ListOfSetsOfHtmlStrings, Narrow, Number,
    NumberWithUnits, Point2d, REAL_EQUALITY_TOLERANCE, RatioExpression, Unit,
};

/// Creates a [`RuleInputs`] map from name/value pairs.
///
/// Values are converted via `Into<AnswerValue>`, so reals, integers, strings,
/// fractions, and the other payload types can be passed directly.
///
/// # Example
///
/// ```
/// use answer_rules::{AnswerValue, inputs};
///
/// let rule_inputs = inputs! { "x" => "ab", "y" => 2u32 };
/// assert_eq!(rule_inputs.len(), 2);
/// assert_eq!(rule_inputs["y"], AnswerValue::NonNegativeInt(2));
/// ```
#[macro_export]
macro_rules! inputs {
    {} => {
        $crate::RuleInputs::new()
    };
    { $($key:expr => $value:expr),+ $(,)? } => {
        {
            let mut map = $crate::RuleInputs::new();
            $(
                map.insert($key.to_string(), ::std::convert::Into::<$crate::AnswerValue>::into($value));
            )+
            map
        }
    };
}
