//! Typed violations and validation results.

use miette::{Diagnostic, SourceSpan};
use serde::{Deserialize, Serialize};

use crate::error::LintError;

/// A single rule violation reported by the engine.
///
/// Deserialized from the engine's native error records. `line`, `character`
/// and `reason` are required; everything else the engine attaches is
/// optional, and unknown fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Engine error class, e.g. `"(error)"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    /// Raw message template.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
    /// 1-indexed line of the violation.
    pub line: u32,
    /// 1-indexed column of the violation.
    pub character: u32,
    /// Human-readable message.
    pub reason: String,
    /// Offending line text, when the engine provides it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub evidence: Option<String>,
}

impl ValidationError {
    /// Deserializes the engine's serialized error list.
    ///
    /// The engine appends `null` to the list when it gives up early; those
    /// entries are dropped. A record missing a required field fails the whole
    /// parse; partial lists are never returned.
    ///
    /// # Errors
    ///
    /// [`LintError::ErrorListMalformed`] when the transport string is not a
    /// JSON array of error records.
    pub fn parse_list(raw: &str) -> Result<Vec<Self>, LintError> {
        let entries: Vec<Option<Self>> =
            serde_json::from_str(raw).map_err(|e| LintError::ErrorListMalformed {
                message: e.to_string(),
            })?;
        Ok(entries.into_iter().flatten().collect())
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}: {}", self.line, self.character, self.reason)
    }
}

/// Outcome of validating one source string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationResult {
    /// The source satisfied every configured rule.
    Valid,
    /// The rules recorded violations, in engine order.
    Invalid(Vec<ValidationError>),
}

impl ValidationResult {
    /// True for [`ValidationResult::Valid`].
    #[must_use]
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// The reported violations; empty for a valid result.
    #[must_use]
    pub fn errors(&self) -> &[ValidationError] {
        match self {
            Self::Valid => &[],
            Self::Invalid(errors) => errors,
        }
    }

    /// Consumes the result, returning the violations.
    #[must_use]
    pub fn into_errors(self) -> Vec<ValidationError> {
        match self {
            Self::Valid => Vec::new(),
            Self::Invalid(errors) => errors,
        }
    }

    /// Formats a human-readable violation report.
    #[must_use]
    pub fn format_report(&self) -> String {
        use std::fmt::Write;

        match self {
            Self::Valid => "no violations found\n".to_string(),
            Self::Invalid(errors) => {
                let mut report = String::new();
                let _ = writeln!(report, "{} violation(s):", errors.len());
                for error in errors {
                    let _ = writeln!(report, "  {error}");
                    if let Some(evidence) = &error.evidence {
                        let _ = writeln!(report, "      {}", evidence.trim_end());
                    }
                }
                report
            }
        }
    }
}

/// Converts a [`ValidationError`] to a miette diagnostic for rich display.
///
/// The error's line/column pair is resolved against the validated source to
/// place the labeled span.
#[derive(Debug, thiserror::Error, Diagnostic)]
#[error("{message}")]
pub struct ValidationDiagnostic {
    message: String,
    #[help]
    help: Option<String>,
    #[label("{label_message}")]
    span: SourceSpan,
    label_message: String,
}

impl ValidationDiagnostic {
    /// Builds a diagnostic for `error` against the source it was reported on.
    #[must_use]
    pub fn new(error: &ValidationError, source: &str) -> Self {
        let offset = offset_for(source, error.line, error.character);
        Self {
            message: error.reason.clone(),
            help: error.evidence.clone(),
            span: SourceSpan::from((offset, 1)),
            label_message: error
                .id
                .clone()
                .unwrap_or_else(|| "(error)".to_string()),
        }
    }
}

/// Byte offset of a 1-indexed line/column pair in `source`.
fn offset_for(source: &str, line: u32, column: u32) -> usize {
    if line == 0 {
        return 0;
    }
    let mut offset = 0;
    for (i, line_content) in source.lines().enumerate() {
        if i + 1 == line as usize {
            return offset + (column as usize).saturating_sub(1);
        }
        offset += line_content.len() + 1;
    }
    offset
}
