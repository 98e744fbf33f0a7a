//! Table formatting utilities for CLI output.

use answer_rules::{AnswerType, InputSpec};
use comfy_table::{presets, ContentArrangement, Table};

/// One registered rule, as listed by `answer-rules rules`.
pub struct RuleRow {
    /// Interaction id (e.g., "NumericInput").
    pub interaction: &'static str,
    /// Rule name within the interaction.
    pub rule: &'static str,
    /// Answer type the rule grades.
    pub answer_type: AnswerType,
    /// Declared parameters, in matcher order.
    pub signature: Vec<InputSpec>,
}

/// Format a rule signature as `name: TYPE` pairs.
pub fn format_signature(signature: &[InputSpec]) -> String {
    if signature.is_empty() {
        return "-".to_string();
    }
    let params: Vec<String> = signature
        .iter()
        .map(|spec| format!("{}: {}", spec.name, spec.answer_type))
        .collect();
    params.join(", ")
}

/// Format the rule catalogue as an ASCII table.
pub fn format_rules_table(rows: &[RuleRow]) -> Table {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_BORDERS_ONLY);
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Interaction", "Rule", "Answer", "Parameters"]);

    for row in rows {
        table.add_row(vec![
            row.interaction.to_string(),
            row.rule.to_string(),
            row.answer_type.to_string(),
            format_signature(&row.signature),
        ]);
    }

    table
}
