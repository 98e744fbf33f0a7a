use std::collections::HashSet;

use answer_rules_semantics::{
    INTERACTION_NAMES, InteractionId, RuleId, accepted_rule_names, resolve_interaction,
    resolve_rule,
};

#[test]
fn rule_names_are_scoped_to_their_interaction() {
    assert_eq!(
        resolve_rule(InteractionId::NumericInput, "Equals"),
        Some(RuleId::NumericInputEquals)
    );
    assert_eq!(
        resolve_rule(InteractionId::TextInput, "Equals"),
        Some(RuleId::TextInputEquals)
    );
    assert_eq!(
        resolve_rule(InteractionId::RatioExpressionInput, "Equals"),
        Some(RuleId::RatioExpressionInputEquals)
    );
    assert_eq!(resolve_rule(InteractionId::FractionInput, "Equals"), None);
    assert_eq!(
        resolve_rule(InteractionId::FractionInput, "IsLessThan"),
        Some(RuleId::FractionInputIsLessThan)
    );
    assert_eq!(
        resolve_rule(InteractionId::NumberWithUnits, "IsEquivalentTo"),
        Some(RuleId::NumberWithUnitsIsEquivalentTo)
    );
}

#[test]
fn rule_names_are_case_sensitive() {
    assert_eq!(resolve_rule(InteractionId::NumericInput, "equals"), None);
    assert_eq!(resolve_interaction("numericinput"), None);
}

#[test]
fn every_rule_resolves_from_its_own_name() {
    for rule in RuleId::ALL {
        assert_eq!(
            resolve_rule(rule.interaction(), rule.name()),
            Some(rule),
            "{rule} did not round-trip"
        );
    }
}

#[test]
fn every_interaction_resolves_from_its_own_name() {
    for interaction in InteractionId::ALL {
        assert_eq!(resolve_interaction(interaction.name()), Some(interaction));
        assert!(INTERACTION_NAMES.contains(&interaction.name()));
    }
    assert_eq!(INTERACTION_NAMES.len(), InteractionId::ALL.len());
    assert_eq!(resolve_interaction("Continue"), None);
}

#[test]
fn accepted_names_match_resolvable_rules() {
    for interaction in InteractionId::ALL {
        let accepted: HashSet<&str> = accepted_rule_names(interaction).iter().copied().collect();
        let resolved: HashSet<&str> = interaction.rules().map(RuleId::name).collect();
        assert_eq!(accepted, resolved, "mismatch for {interaction}");
    }
}

#[test]
fn every_interaction_has_rules() {
    for interaction in InteractionId::ALL {
        assert!(interaction.rules().next().is_some(), "{interaction} has no rules");
    }
    let total: usize = InteractionId::ALL
        .iter()
        .map(|interaction| interaction.rules().count())
        .sum();
    assert_eq!(total, RuleId::ALL.len());
}

#[test]
fn rule_display_is_qualified_by_interaction() {
    assert_eq!(
        RuleId::DragAndDropSortInputHasElementXAtPositionY.to_string(),
        "DragAndDropSortInput.HasElementXAtPositionY"
    );
    assert_eq!(InteractionId::ImageClickInput.to_string(), "ImageClickInput");
}
