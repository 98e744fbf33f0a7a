//! Miette diagnostics for value parse errors and classification errors.

use std::fmt::Display;

use answer_rules::parser::ParseError;
use answer_rules::{resolve_interaction, ClassifyError, InteractionId, RuleId};
use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// A miette-compatible diagnostic for an authored value that failed to parse.
///
/// Fields are read by miette derive macros, not directly by code.
#[derive(Debug, Error, Diagnostic)]
#[error("cannot read {name}: {message}")]
#[diagnostic(code(answer_rules::value))]
pub struct ValueDiagnostic {
    #[source_code]
    src: NamedSource<String>,

    #[label("error here")]
    span: SourceSpan,

    name: String,

    message: String,

    #[help]
    help: Option<String>,
}

impl ValueDiagnostic {
    /// Create a diagnostic from a ParseError with the offending text.
    pub fn from_parse_error(name: &str, content: &str, err: &ParseError) -> Self {
        let (column, length, message) = match err {
            ParseError::Syntax { column, message } => (*column, 1, message.clone()),
            ParseError::UnexpectedEof { column } => (*column, 0, "unexpected end of input".into()),
            ParseError::Invalid { message } => (1, content.len(), message.clone()),
        };

        // Clamp to the content so miette never renders out of bounds
        let offset = column.saturating_sub(1).min(content.len());
        let length = length.min(content.len() - offset);

        ValueDiagnostic {
            src: NamedSource::new(name, content.to_string()),
            span: (offset, length).into(),
            name: name.to_string(),
            message,
            help: Some(
                "values are tagged JSON such as {\"type\": \"REAL\", \"value\": 1.5}, \
                 or plain text in the rule's declared type"
                    .to_string(),
            ),
        }
    }
}

/// A miette-compatible diagnostic wrapping a classification error.
#[derive(Debug, Error)]
#[error("{error}")]
pub struct ClassifyDiagnostic {
    error: ClassifyError,
}

impl From<ClassifyError> for ClassifyDiagnostic {
    fn from(error: ClassifyError) -> Self {
        Self { error }
    }
}

impl Diagnostic for ClassifyDiagnostic {
    fn code<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let code = match self.error {
            ClassifyError::MissingParameter { .. } => "answer_rules::missing_parameter",
            ClassifyError::TypeMismatch { .. } => "answer_rules::type_mismatch",
            ClassifyError::AnswerTypeMismatch { .. } => "answer_rules::answer_type_mismatch",
            ClassifyError::UnsupportedInteraction { .. } => "answer_rules::unsupported_interaction",
            ClassifyError::UnsupportedRule { .. } => "answer_rules::unsupported_rule",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn Display + 'a>> {
        let help = match &self.error {
            ClassifyError::MissingParameter { name } => {
                format!("add a parameter named '{name}' to the rule inputs")
            }
            ClassifyError::TypeMismatch {
                parameter,
                expected,
                ..
            } => format!("parameter '{parameter}' must hold a {expected} value"),
            ClassifyError::AnswerTypeMismatch { expected, .. } => {
                format!("this rule grades {expected} answers")
            }
            ClassifyError::UnsupportedInteraction { .. } => {
                let names: Vec<&str> =
                    InteractionId::ALL.into_iter().map(InteractionId::name).collect();
                format!("supported interactions: {}", names.join(", "))
            }
            ClassifyError::UnsupportedRule { interaction, .. } => {
                let id = resolve_interaction(interaction)?;
                let names: Vec<&str> = id.rules().map(RuleId::name).collect();
                format!("rules for {interaction}: {}", names.join(", "))
            }
        };
        Some(Box::new(help))
    }
}
