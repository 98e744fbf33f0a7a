use std::collections::BTreeSet;
use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

use super::{ClickOnImage, Fraction, ListOfSetsOfHtmlStrings, NumberWithUnits, RatioExpression};

/// A learner answer or an author-supplied rule parameter.
///
/// The variant is the value's declared type. Rules never convert between
/// variants: a `NonNegativeInt` is not accepted where a `Real` is expected.
///
/// # Example
///
/// ```
/// use answer_rules::{AnswerType, AnswerValue};
///
/// let real: AnswerValue = 1.5.into();
/// assert_eq!(real.answer_type(), AnswerType::Real);
///
/// let choice: AnswerValue = 2u32.into();
/// assert_eq!(choice.answer_type(), AnswerType::NonNegativeInt);
///
/// let text: AnswerValue = "photosynthesis".into();
/// assert_eq!(text.answer_type().to_string(), "NORMALIZED_STRING");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerValue {
    NormalizedString(String),
    SignedInt(i32),
    NonNegativeInt(u32),
    Real(f64),
    #[serde(rename = "BOOL_VALUE")]
    Bool(bool),
    Fraction(Fraction),
    NumberWithUnits(NumberWithUnits),
    SetOfHtmlString(BTreeSet<String>),
    ListOfSetsOfHtmlString(ListOfSetsOfHtmlStrings),
    ClickOnImage(ClickOnImage),
    RatioExpression(RatioExpression),
}

/// The tag of an [`AnswerValue`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AnswerType {
    NormalizedString,
    SignedInt,
    NonNegativeInt,
    Real,
    #[serde(rename = "BOOL_VALUE")]
    Bool,
    Fraction,
    NumberWithUnits,
    SetOfHtmlString,
    ListOfSetsOfHtmlString,
    ClickOnImage,
    RatioExpression,
}

impl AnswerType {
    /// The tag name used in error messages and serialized values.
    pub const fn as_str(self) -> &'static str {
        match self {
            AnswerType::NormalizedString => "NORMALIZED_STRING",
            AnswerType::SignedInt => "SIGNED_INT",
            AnswerType::NonNegativeInt => "NON_NEGATIVE_INT",
            AnswerType::Real => "REAL",
            AnswerType::Bool => "BOOL_VALUE",
            AnswerType::Fraction => "FRACTION",
            AnswerType::NumberWithUnits => "NUMBER_WITH_UNITS",
            AnswerType::SetOfHtmlString => "SET_OF_HTML_STRING",
            AnswerType::ListOfSetsOfHtmlString => "LIST_OF_SETS_OF_HTML_STRING",
            AnswerType::ClickOnImage => "CLICK_ON_IMAGE",
            AnswerType::RatioExpression => "RATIO_EXPRESSION",
        }
    }
}

impl Display for AnswerType {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.as_str())
    }
}

impl AnswerValue {
    pub fn answer_type(&self) -> AnswerType {
        match self {
            AnswerValue::NormalizedString(_) => AnswerType::NormalizedString,
            AnswerValue::SignedInt(_) => AnswerType::SignedInt,
            AnswerValue::NonNegativeInt(_) => AnswerType::NonNegativeInt,
            AnswerValue::Real(_) => AnswerType::Real,
            AnswerValue::Bool(_) => AnswerType::Bool,
            AnswerValue::Fraction(_) => AnswerType::Fraction,
            AnswerValue::NumberWithUnits(_) => AnswerType::NumberWithUnits,
            AnswerValue::SetOfHtmlString(_) => AnswerType::SetOfHtmlString,
            AnswerValue::ListOfSetsOfHtmlString(_) => AnswerType::ListOfSetsOfHtmlString,
            AnswerValue::ClickOnImage(_) => AnswerType::ClickOnImage,
            AnswerValue::RatioExpression(_) => AnswerType::RatioExpression,
        }
    }

    /// Borrow the payload as `T`, if this value holds `T`'s variant.
    pub fn narrow<T: Narrow>(&self) -> Option<&T> {
        T::narrow(self)
    }
}

/// A native payload type that corresponds to exactly one [`AnswerValue`]
/// variant.
///
/// Classifier factories use this to declare parameter types and to borrow
/// already type-checked payloads out of values.
pub trait Narrow: Clone + Send + Sync + 'static {
    /// The variant this payload type lives in.
    const TYPE: AnswerType;

    /// Borrow the payload if `value` holds this type's variant.
    fn narrow(value: &AnswerValue) -> Option<&Self>;
}

macro_rules! narrow_variant {
    ($native:ty, $variant:ident) => {
        impl Narrow for $native {
            const TYPE: AnswerType = AnswerType::$variant;

            fn narrow(value: &AnswerValue) -> Option<&Self> {
                match value {
                    AnswerValue::$variant(payload) => Some(payload),
                    _ => None,
                }
            }
        }

        impl From<$native> for AnswerValue {
            fn from(payload: $native) -> Self {
                AnswerValue::$variant(payload)
            }
        }
    };
}

narrow_variant!(String, NormalizedString);
narrow_variant!(i32, SignedInt);
narrow_variant!(u32, NonNegativeInt);
narrow_variant!(f64, Real);
narrow_variant!(bool, Bool);
narrow_variant!(Fraction, Fraction);
narrow_variant!(NumberWithUnits, NumberWithUnits);
narrow_variant!(BTreeSet<String>, SetOfHtmlString);
narrow_variant!(ListOfSetsOfHtmlStrings, ListOfSetsOfHtmlString);
narrow_variant!(ClickOnImage, ClickOnImage);
narrow_variant!(RatioExpression, RatioExpression);

impl From<&str> for AnswerValue {
    fn from(s: &str) -> Self {
        AnswerValue::NormalizedString(s.to_string())
    }
}

impl Display for AnswerValue {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            AnswerValue::NormalizedString(s) => write!(f, "{s:?}"),
            AnswerValue::SignedInt(n) => write!(f, "{n}"),
            AnswerValue::NonNegativeInt(n) => write!(f, "{n}"),
            AnswerValue::Real(n) => write!(f, "{n}"),
            AnswerValue::Bool(b) => write!(f, "{b}"),
            AnswerValue::Fraction(fraction) => write!(f, "{fraction}"),
            AnswerValue::NumberWithUnits(quantity) => write!(f, "{quantity}"),
            AnswerValue::SetOfHtmlString(set) => write!(f, "{set:?}"),
            AnswerValue::ListOfSetsOfHtmlString(list) => write!(f, "{:?}", list.sets),
            AnswerValue::ClickOnImage(click) => write!(
                f,
                "click at ({}, {}) in {:?}",
                click.click_position.x, click.click_position.y, click.clicked_regions
            ),
            AnswerValue::RatioExpression(ratio) => write!(f, "{ratio}"),
        }
    }
}
