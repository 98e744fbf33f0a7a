//! Reading answer values and rule inputs from command-line text.

use std::collections::BTreeSet;
use std::fs::read_to_string;
use std::path::Path;

use answer_rules::parser::parse_answer_value;
use answer_rules::{
    AnswerType, AnswerValue, ClickOnImage, InputSpec, ListOfSetsOfHtmlStrings, RuleInputs,
};
use miette::{miette, IntoDiagnostic, Result};
use tracing::debug;

use crate::output::ValueDiagnostic;

/// Parse a key=value parameter string.
pub fn parse_key_val(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid parameter format '{s}': expected name=value"))?;
    Ok((name.to_string(), value.to_string()))
}

/// Read `text` as a value of type `expected`.
///
/// Text starting with `{` or `[` is JSON: either a tagged value such as
/// `{"type": "REAL", "value": 1.5}`, or the bare payload of `expected`.
/// Anything else is read by the text parser for `expected`.
pub fn read_value(name: &str, text: &str, expected: AnswerType) -> Result<AnswerValue> {
    let trimmed = text.trim_start();
    if trimmed.starts_with('{') || trimmed.starts_with('[') {
        return read_json_value(name, text, expected);
    }
    parse_answer_value(text, expected)
        .map_err(|e| ValueDiagnostic::from_parse_error(name, text, &e).into())
}

fn read_json_value(name: &str, text: &str, expected: AnswerType) -> Result<AnswerValue> {
    if let Ok(value) = serde_json::from_str::<AnswerValue>(text) {
        return Ok(value);
    }
    let invalid = |e: serde_json::Error| miette!("invalid JSON for {name}: {e}");
    match expected {
        AnswerType::SetOfHtmlString => serde_json::from_str::<BTreeSet<String>>(text)
            .map(AnswerValue::from)
            .map_err(invalid),
        AnswerType::ListOfSetsOfHtmlString => {
            serde_json::from_str::<ListOfSetsOfHtmlStrings>(text)
                .map(AnswerValue::from)
                .map_err(invalid)
        }
        AnswerType::ClickOnImage => serde_json::from_str::<ClickOnImage>(text)
            .map(AnswerValue::from)
            .map_err(invalid),
        AnswerType::NormalizedString
        | AnswerType::SignedInt
        | AnswerType::NonNegativeInt
        | AnswerType::Real
        | AnswerType::Bool
        | AnswerType::Fraction
        | AnswerType::NumberWithUnits
        | AnswerType::RatioExpression => serde_json::from_str::<AnswerValue>(text).map_err(invalid),
    }
}

/// Build rule inputs from an optional JSON file and `name=value` pairs.
///
/// Pairs override file entries with the same name. Each pair is read as the
/// type the rule declares for that name; names the rule does not declare are
/// kept as strings.
pub fn collect_inputs(
    file: Option<&Path>,
    params: &[(String, String)],
    signature: &[InputSpec],
) -> Result<RuleInputs> {
    let mut inputs = match file {
        Some(path) => read_inputs_file(path)?,
        None => RuleInputs::new(),
    };
    for (name, text) in params {
        let declared = signature
            .iter()
            .find(|spec| spec.name == name.as_str())
            .map_or(AnswerType::NormalizedString, |spec| spec.answer_type);
        let value = read_value(name, text, declared)?;
        inputs.insert(name.clone(), value);
    }
    debug!(inputs = inputs.len(), "collected rule inputs");
    Ok(inputs)
}

/// Read a JSON object of tagged values keyed by parameter name.
pub fn read_inputs_file(path: &Path) -> Result<RuleInputs> {
    let content = read_to_string(path)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to read inputs file {}: {}", path.display(), e))?;
    serde_json::from_str(&content)
        .into_diagnostic()
        .map_err(|e| miette!("Failed to parse inputs file {}: {}", path.display(), e))
}
