//! Rule classification: validated classifiers, the rule catalogue, and the
//! dispatch entry point.
//!
//! A classification request names an interaction and a rule, supplies the
//! author's rule inputs, and the learner's answer. The registry resolves the
//! names, the rule's factory validates the inputs into a classifier, and the
//! classifier tests the answer.

mod error;
mod factory;
mod registry;
pub mod rules;

pub use error::{ClassifyError, compute_suggestions};
pub use factory::{ClassifierFactory, InputSpec, RuleClassifier, RuleInputs, extract_input};
pub use registry::{RuleRegistry, classify};
