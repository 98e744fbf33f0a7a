//! Implementation of the `answer-rules classify` command.

use std::path::PathBuf;

use answer_rules::RuleRegistry;
use clap::Args;
use miette::{IntoDiagnostic, Report};
use serde::Serialize;
use tracing::debug;

use super::values::{collect_inputs, parse_key_val, read_value};
use crate::output::ClassifyDiagnostic;

/// Arguments for the classify command.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Interaction id (e.g., NumericInput, FractionInput)
    #[arg(long, required = true)]
    pub interaction: String,

    /// Rule name within the interaction (e.g., Equals)
    #[arg(long, required = true)]
    pub rule: String,

    /// Learner answer, as text in the rule's answer type or tagged JSON
    #[arg(long, required = true, allow_hyphen_values = true)]
    pub answer: String,

    /// Rule parameters in name=value format (repeatable)
    #[arg(short = 'p', long = "param", value_parser = parse_key_val)]
    pub params: Vec<(String, String)>,

    /// JSON file with rule parameters as tagged values keyed by name
    #[arg(long)]
    pub inputs: Option<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// JSON output for classify results.
#[derive(Serialize)]
pub struct ClassifyResult<'a> {
    pub interaction: &'a str,
    pub rule: &'a str,
    pub matched: bool,
}

/// Run the classify command.
pub fn run_classify(args: ClassifyArgs) -> miette::Result<i32> {
    let matched = match classify_answer(&args) {
        Ok(matched) => matched,
        Err(report) => {
            report_error(args.json, &report)?;
            return Ok(exitcode::DATAERR);
        }
    };

    if args.json {
        let output = ClassifyResult {
            interaction: &args.interaction,
            rule: &args.rule,
            matched,
        };
        println!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        println!("{matched}");
    }
    Ok(exitcode::OK)
}

/// Resolve the rule, read the inputs and answer as the rule's declared types,
/// and classify.
fn classify_answer(args: &ClassifyArgs) -> miette::Result<bool> {
    let registry = RuleRegistry::shared();
    let (rule, factory) = registry
        .resolve(&args.interaction, &args.rule)
        .map_err(ClassifyDiagnostic::from)?;
    debug!(%rule, "resolved rule");

    let inputs = collect_inputs(args.inputs.as_deref(), &args.params, factory.signature())?;
    let answer = read_value("answer", &args.answer, factory.answer_type())?;

    let matched = registry
        .classify(&args.interaction, &args.rule, &inputs, &answer)
        .map_err(ClassifyDiagnostic::from)?;
    Ok(matched)
}

fn report_error(json: bool, report: &Report) -> miette::Result<()> {
    if json {
        let output = serde_json::json!({
            "error": report.to_string()
        });
        eprintln!(
            "{}",
            serde_json::to_string_pretty(&output).into_diagnostic()?
        );
    } else {
        eprintln!("{report:?}");
    }
    Ok(())
}
