//! Rule registry mapping (interaction, rule name) pairs to classifier
//! factories.

use std::collections::HashMap;
use std::sync::LazyLock;

use answer_rules_semantics::{
    INTERACTION_NAMES, InteractionId, RuleId, accepted_rule_names, resolve_interaction,
    resolve_rule,
};
use tracing::debug;

use crate::classify::error::compute_suggestions;
use crate::classify::rules::provider;
use crate::classify::{ClassifierFactory, ClassifyError, RuleClassifier, RuleInputs};
use crate::types::AnswerValue;

static SHARED: LazyLock<RuleRegistry> = LazyLock::new(RuleRegistry::new);

/// Every supported rule's classifier factory.
///
/// The registry is filled from the fixed rule catalogue when constructed and
/// offers no way to add or replace entries afterwards, so one instance can be
/// shared across threads.
#[derive(Debug)]
pub struct RuleRegistry {
    factories: HashMap<RuleId, ClassifierFactory>,
}

impl RuleRegistry {
    /// Build a registry holding every rule in the catalogue.
    pub fn new() -> Self {
        let factories: HashMap<RuleId, ClassifierFactory> = RuleId::ALL
            .into_iter()
            .map(|rule| (rule, provider(rule)))
            .collect();
        debug!(rules = factories.len(), "rule registry initialized");
        Self { factories }
    }

    /// The process-wide registry, built on first use.
    pub fn shared() -> &'static RuleRegistry {
        &SHARED
    }

    /// Number of registered rules.
    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    /// Get the factory for a canonical rule id.
    pub fn get(&self, rule: RuleId) -> Option<&ClassifierFactory> {
        self.factories.get(&rule)
    }

    /// Resolve an interaction id and rule name to the rule's factory.
    ///
    /// # Errors
    ///
    /// Returns [`ClassifyError::UnsupportedInteraction`] or
    /// [`ClassifyError::UnsupportedRule`], with close-name suggestions.
    pub fn resolve(
        &self,
        interaction: &str,
        rule: &str,
    ) -> Result<(RuleId, &ClassifierFactory), ClassifyError> {
        let interaction_id = resolve_interaction_id(interaction)?;
        let rule_id =
            resolve_rule(interaction_id, rule).ok_or_else(|| ClassifyError::UnsupportedRule {
                interaction: interaction.to_string(),
                rule: rule.to_string(),
                suggestions: compute_suggestions(rule, accepted_rule_names(interaction_id)),
            })?;
        let factory = self
            .get(rule_id)
            .ok_or_else(|| ClassifyError::UnsupportedRule {
                interaction: interaction.to_string(),
                rule: rule.to_string(),
                suggestions: Vec::new(),
            })?;
        Ok((rule_id, factory))
    }

    /// Build a validated classifier without evaluating it.
    ///
    /// This is the content-validation entry point: it reports every error
    /// [`RuleRegistry::classify`] could report except an answer type mismatch.
    pub fn build_classifier(
        &self,
        interaction: &str,
        rule: &str,
        inputs: &RuleInputs,
    ) -> Result<RuleClassifier, ClassifyError> {
        let (rule_id, factory) = self.resolve(interaction, rule)?;
        factory.create(inputs).inspect_err(|e| {
            debug!(rule = %rule_id, error = %e, "rule inputs rejected");
        })
    }

    /// Classify `answer` against one rule instance.
    ///
    /// Builds a classifier from `inputs`, evaluates it once, and discards it.
    ///
    /// # Errors
    ///
    /// Returns an error if the interaction or rule is unknown, if `inputs` do
    /// not satisfy the rule's signature, or if `answer` has the wrong type.
    pub fn classify(
        &self,
        interaction: &str,
        rule: &str,
        inputs: &RuleInputs,
        answer: &AnswerValue,
    ) -> Result<bool, ClassifyError> {
        let classifier = self.build_classifier(interaction, rule, inputs)?;
        let matched = classifier.matches(answer)?;
        debug!(interaction, rule, matched, "classified answer");
        Ok(matched)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn resolve_interaction_id(interaction: &str) -> Result<InteractionId, ClassifyError> {
    resolve_interaction(interaction).ok_or_else(|| ClassifyError::UnsupportedInteraction {
        interaction: interaction.to_string(),
        suggestions: compute_suggestions(interaction, INTERACTION_NAMES),
    })
}

/// Classify `answer` against one rule instance using the shared registry.
///
/// # Example
///
/// ```
/// use answer_rules::{classify, inputs};
///
/// let matched = classify("NumericInput", "Equals", &inputs! { "x" => 1.5 }, &1.5.into());
/// assert_eq!(matched, Ok(true));
/// ```
pub fn classify(
    interaction: &str,
    rule: &str,
    inputs: &RuleInputs,
    answer: &AnswerValue,
) -> Result<bool, ClassifyError> {
    RuleRegistry::shared().classify(interaction, rule, inputs, answer)
}
