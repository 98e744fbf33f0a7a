//! Implementation of the `answer-rules rules` command.

use answer_rules::{
    compute_suggestions, resolve_interaction, AnswerType, ClassifyError, InputSpec, InteractionId,
    RuleRegistry,
};
use clap::Args;
use miette::{IntoDiagnostic, Report, Result};
use serde::Serialize;

use crate::output::table::{format_rules_table, RuleRow};
use crate::output::ClassifyDiagnostic;

/// Arguments for the rules command.
#[derive(Debug, Args)]
pub struct RulesArgs {
    /// Only list rules of this interaction
    #[arg(long)]
    pub interaction: Option<String>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output format for one rule.
#[derive(Debug, Serialize)]
struct RuleJson<'a> {
    interaction: &'a str,
    rule: &'a str,
    answer_type: AnswerType,
    parameters: &'a [InputSpec],
}

/// Run the rules command.
pub fn run_rules(args: RulesArgs) -> Result<i32> {
    let interactions: Vec<InteractionId> = match &args.interaction {
        Some(name) => match resolve_interaction(name) {
            Some(id) => vec![id],
            None => {
                let names: Vec<&str> =
                    InteractionId::ALL.into_iter().map(InteractionId::name).collect();
                let error = ClassifyError::UnsupportedInteraction {
                    interaction: name.clone(),
                    suggestions: compute_suggestions(name, &names),
                };
                eprintln!("{:?}", Report::new(ClassifyDiagnostic::from(error)));
                return Ok(exitcode::DATAERR);
            }
        },
        None => InteractionId::ALL.to_vec(),
    };

    let registry = RuleRegistry::shared();
    let rows: Vec<RuleRow> = interactions
        .into_iter()
        .flat_map(InteractionId::rules)
        .filter_map(|rule| {
            let factory = registry.get(rule)?;
            Some(RuleRow {
                interaction: rule.interaction().name(),
                rule: rule.name(),
                answer_type: factory.answer_type(),
                signature: factory.signature().to_vec(),
            })
        })
        .collect();

    if args.json {
        let json_rows: Vec<RuleJson<'_>> = rows
            .iter()
            .map(|row| RuleJson {
                interaction: row.interaction,
                rule: row.rule,
                answer_type: row.answer_type,
                parameters: &row.signature,
            })
            .collect();
        let json_output = serde_json::to_string_pretty(&json_rows).into_diagnostic()?;
        println!("{json_output}");
    } else {
        println!("{}", format_rules_table(&rows));
    }

    Ok(exitcode::OK)
}
