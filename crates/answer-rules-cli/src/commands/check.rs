//! Implementation of the `answer-rules check` command.

use std::fs::read_to_string;
use std::path::{Path, PathBuf};

use answer_rules::{AnswerValue, RuleInputs, RuleRegistry};
use clap::Args;
use miette::{miette, IntoDiagnostic, Result};
use owo_colors::{OwoColorize, Stream};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Rule specification files (.json)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// One authored rule specification.
///
/// `answer` and `expected` are optional. When both are present the entry is
/// also a grading fixture and the classification outcome is checked.
#[derive(Debug, Deserialize)]
struct RuleEntry {
    interaction: String,
    rule: String,
    #[serde(default)]
    inputs: RuleInputs,
    answer: Option<AnswerValue>,
    expected: Option<bool>,
}

/// A rule specification that failed to validate.
#[derive(Debug, Serialize)]
struct CheckFailure {
    file: String,
    index: usize,
    interaction: String,
    rule: String,
    error: String,
}

/// Run the check command.
pub fn run_check(args: CheckArgs) -> Result<i32> {
    let registry = RuleRegistry::shared();
    let mut checked = 0;
    let mut failures: Vec<CheckFailure> = Vec::new();

    for path in &args.files {
        let entries = read_entries(path)?;
        debug!(file = %path.display(), entries = entries.len(), "checking rule file");
        checked += entries.len();
        for (index, entry) in entries.into_iter().enumerate() {
            if let Some(error) = check_entry(registry, &entry) {
                failures.push(CheckFailure {
                    file: path.display().to_string(),
                    index,
                    interaction: entry.interaction,
                    rule: entry.rule,
                    error,
                });
            }
        }
    }

    if args.json {
        let json_output = serde_json::to_string_pretty(&failures).into_diagnostic()?;
        println!("{json_output}");
    } else {
        for failure in &failures {
            println!(
                "{} {}[{}] {}.{}: {}",
                "error:".if_supports_color(Stream::Stdout, |t| t.red()),
                failure.file,
                failure.index,
                failure.interaction,
                failure.rule,
                failure.error
            );
        }
        let summary = format!("checked {checked} rules, {} failed", failures.len());
        if failures.is_empty() {
            println!("{}", summary.if_supports_color(Stream::Stdout, |t| t.green()));
        } else {
            println!("{}", summary.if_supports_color(Stream::Stdout, |t| t.red()));
        }
    }

    if failures.is_empty() {
        Ok(exitcode::OK)
    } else {
        Ok(exitcode::DATAERR)
    }
}

fn read_entries(path: &Path) -> Result<Vec<RuleEntry>> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read rule file {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to parse rule file {}: {}", path.display(), e))
}

/// Build the entry's classifier and, for fixtures, check the outcome.
fn check_entry(registry: &RuleRegistry, entry: &RuleEntry) -> Option<String> {
    let classifier = match registry.build_classifier(&entry.interaction, &entry.rule, &entry.inputs)
    {
        Ok(classifier) => classifier,
        Err(e) => return Some(e.to_string()),
    };
    let answer = match (&entry.answer, entry.expected) {
        (Some(answer), _) => answer,
        (None, Some(_)) => return Some("fixture has 'expected' but no 'answer'".to_string()),
        (None, None) => return None,
    };
    match (classifier.matches(answer), entry.expected) {
        (Err(e), _) => Some(e.to_string()),
        (Ok(matched), Some(expected)) if matched != expected => {
            Some(format!("expected {expected} for answer {answer}, got {matched}"))
        }
        (Ok(_), _) => None,
    }
}
