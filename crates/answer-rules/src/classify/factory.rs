//! Type-checked construction of rule classifiers.
//!
//! A [`ClassifierFactory`] pairs a rule's declared signature (the answer type
//! plus each named parameter's type) with a native matcher function. Building
//! a [`RuleClassifier`] from a concrete rule specification validates every
//! declared parameter first and only then binds the extracted values into the
//! matcher, so a classifier either exists fully validated or not at all.

use std::collections::HashMap;
use std::fmt::{Debug, Formatter, Result as FmtResult};

use serde::Serialize;
use tracing::trace;

use crate::classify::ClassifyError;
use crate::types::{AnswerType, AnswerValue, Narrow};

/// Author-supplied rule parameters, keyed by parameter name.
pub type RuleInputs = HashMap<String, AnswerValue>;

/// One declared parameter of a rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct InputSpec {
    pub name: &'static str,
    pub answer_type: AnswerType,
}

impl InputSpec {
    fn of<T: Narrow>(name: &'static str) -> Self {
        Self {
            name,
            answer_type: T::TYPE,
        }
    }
}

type Matcher = Box<dyn Fn(&AnswerValue) -> Result<bool, ClassifyError> + Send + Sync>;
type Binder = Box<dyn Fn(&RuleInputs) -> Result<Matcher, ClassifyError> + Send + Sync>;

/// Builds [`RuleClassifier`]s for one rule.
///
/// # Example
///
/// ```
/// use answer_rules::{ClassifierFactory, inputs};
///
/// fn equals(answer: &f64, x: &f64) -> bool {
///     answer == x
/// }
///
/// let factory = ClassifierFactory::single_input("x", equals);
/// let classifier = factory.create(&inputs! { "x" => 2.0 }).unwrap();
/// assert!(classifier.matches(&2.0.into()).unwrap());
///
/// let err = factory.create(&inputs! { "y" => 2.0 }).unwrap_err();
/// assert_eq!(
///     err.to_string(),
///     "Expected classifier inputs to contain parameter with name 'x'"
/// );
/// ```
pub struct ClassifierFactory {
    answer_type: AnswerType,
    signature: Vec<InputSpec>,
    bind: Binder,
}

impl ClassifierFactory {
    /// A rule that takes no parameters.
    pub fn no_input<A: Narrow>(matcher: fn(&A) -> bool) -> Self {
        Self {
            answer_type: A::TYPE,
            signature: Vec::new(),
            bind: Box::new(move |_: &RuleInputs| {
                let bound: Matcher =
                    Box::new(move |answer: &AnswerValue| Ok(matcher(narrow_answer(answer)?)));
                Ok(bound)
            }),
        }
    }

    /// A rule that takes one named parameter.
    pub fn single_input<A: Narrow, X: Narrow>(
        x_name: &'static str,
        matcher: fn(&A, &X) -> bool,
    ) -> Self {
        Self {
            answer_type: A::TYPE,
            signature: vec![InputSpec::of::<X>(x_name)],
            bind: Box::new(move |inputs: &RuleInputs| {
                let x = extract_input::<X>(inputs, x_name)?.clone();
                let bound: Matcher = Box::new(move |answer: &AnswerValue| {
                    Ok(matcher(narrow_answer(answer)?, &x))
                });
                Ok(bound)
            }),
        }
    }

    /// A rule that takes two named parameters, passed to `matcher` in
    /// declaration order.
    pub fn double_input<A: Narrow, X: Narrow, Y: Narrow>(
        x_name: &'static str,
        y_name: &'static str,
        matcher: fn(&A, &X, &Y) -> bool,
    ) -> Self {
        Self {
            answer_type: A::TYPE,
            signature: vec![InputSpec::of::<X>(x_name), InputSpec::of::<Y>(y_name)],
            bind: Box::new(move |inputs: &RuleInputs| {
                let x = extract_input::<X>(inputs, x_name)?;
                let y = extract_input::<Y>(inputs, y_name)?;
                let (x, y) = (x.clone(), y.clone());
                let bound: Matcher = Box::new(move |answer: &AnswerValue| {
                    Ok(matcher(narrow_answer(answer)?, &x, &y))
                });
                Ok(bound)
            }),
        }
    }

    /// The answer type classifiers from this factory accept.
    pub fn answer_type(&self) -> AnswerType {
        self.answer_type
    }

    /// The declared parameters, in the order the matcher receives them.
    pub fn signature(&self) -> &[InputSpec] {
        &self.signature
    }

    /// Validate `inputs` against the signature and bind them into a classifier.
    ///
    /// Parameters not named in the signature are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::MissingParameter`] for the first declared
    /// parameter absent from `inputs`, or [`ClassifyError::TypeMismatch`] for
    /// the first one holding the wrong variant.
    pub fn create(&self, inputs: &RuleInputs) -> Result<RuleClassifier, ClassifyError> {
        let matcher = (self.bind)(inputs)?;
        trace!(
            answer_type = %self.answer_type,
            inputs = self.signature.len(),
            "built rule classifier"
        );
        Ok(RuleClassifier {
            answer_type: self.answer_type,
            matcher,
        })
    }
}

impl Debug for ClassifierFactory {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("ClassifierFactory")
            .field("answer_type", &self.answer_type)
            .field("signature", &self.signature)
            .finish_non_exhaustive()
    }
}

/// A validated rule instance, ready to test answers.
///
/// Holds its own copies of the parameter values, so evaluation depends only
/// on the answer passed in.
pub struct RuleClassifier {
    answer_type: AnswerType,
    matcher: Matcher,
}

impl RuleClassifier {
    /// The answer type this classifier accepts.
    pub fn answer_type(&self) -> AnswerType {
        self.answer_type
    }

    /// Test `answer` against the rule.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::AnswerTypeMismatch`] if `answer` holds a
    /// different variant than the rule accepts.
    pub fn matches(&self, answer: &AnswerValue) -> Result<bool, ClassifyError> {
        (self.matcher)(answer)
    }
}

impl Debug for RuleClassifier {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_struct("RuleClassifier")
            .field("answer_type", &self.answer_type)
            .finish_non_exhaustive()
    }
}

/// Look up `name` in `inputs` and borrow it as `T`.
///
/// # Errors
///
/// Returns [`ClassifyError::MissingParameter`] if `name` is absent, or
/// [`ClassifyError::TypeMismatch`] if the value is not `T`'s variant.
pub fn extract_input<'a, T: Narrow>(
    inputs: &'a RuleInputs,
    name: &str,
) -> Result<&'a T, ClassifyError> {
    let value = inputs
        .get(name)
        .ok_or_else(|| ClassifyError::MissingParameter {
            name: name.to_string(),
        })?;
    value.narrow::<T>().ok_or_else(|| ClassifyError::TypeMismatch {
        parameter: name.to_string(),
        expected: T::TYPE,
        actual: value.answer_type(),
    })
}

fn narrow_answer<A: Narrow>(answer: &AnswerValue) -> Result<&A, ClassifyError> {
    answer
        .narrow::<A>()
        .ok_or_else(|| ClassifyError::AnswerTypeMismatch {
            expected: A::TYPE,
            actual: answer.answer_type(),
        })
}
