//! Rule option parsing.
//!
//! User-supplied options arrive as flat strings: `undef` enables a boolean
//! flag, `maxlen=80` assigns a literal value. [`RuleConfiguration::parse`]
//! turns a sequence of them into an ordered configuration that the script
//! composer serializes into the engine's object-literal syntax.

use serde::{Deserialize, Serialize};

use crate::error::LintError;

/// Value assigned to a rule option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum OptionValue {
    /// Boolean flag; an option with no `=` implies `true`.
    Bool(bool),
    /// Verbatim value token from `name=value`.
    ///
    /// The token is emitted into the configuration literal unquoted, so
    /// numbers, booleans and identifiers pass through per engine convention.
    /// Callers supplying arbitrary strings are responsible for quoting them.
    Literal(String),
}

impl std::fmt::Display for OptionValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::Literal(value) => f.write_str(value),
        }
    }
}

/// A single named rule option.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOption {
    /// Rule name, non-empty and trimmed.
    pub name: String,
    /// Assigned value.
    pub value: OptionValue,
}

impl RuleOption {
    /// Parses one raw option string.
    ///
    /// `name` becomes a boolean flag set to `true`; `name=value` keeps the
    /// trimmed value as a verbatim literal token.
    ///
    /// # Errors
    ///
    /// [`LintError::InvalidOptionFormat`] when the string contains more than
    /// one `=`, or has an empty name or value.
    pub fn parse(raw: &str) -> Result<Self, LintError> {
        let raw = raw.trim();
        let invalid = || LintError::InvalidOptionFormat {
            option: raw.to_string(),
        };

        match raw.split_once('=') {
            None => {
                if raw.is_empty() {
                    return Err(invalid());
                }
                Ok(Self {
                    name: raw.to_string(),
                    value: OptionValue::Bool(true),
                })
            }
            Some((name, value)) => {
                if value.contains('=') {
                    return Err(invalid());
                }
                let name = name.trim();
                let value = value.trim();
                if name.is_empty() || value.is_empty() {
                    return Err(invalid());
                }
                Ok(Self {
                    name: name.to_string(),
                    value: OptionValue::Literal(value.to_string()),
                })
            }
        }
    }
}

/// Ordered rule configuration built from raw option strings.
///
/// Input order is preserved; duplicate names are not collapsed and simply
/// coexist in emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfiguration {
    options: Vec<RuleOption>,
}

impl RuleConfiguration {
    /// Parses a sequence of raw option strings.
    ///
    /// Empty and whitespace-only entries are skipped.
    ///
    /// # Errors
    ///
    /// [`LintError::InvalidOptionFormat`] for the first malformed entry.
    pub fn parse<I, S>(raw: I) -> Result<Self, LintError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut options = Vec::new();
        for entry in raw {
            let entry = entry.as_ref().trim();
            if entry.is_empty() {
                continue;
            }
            options.push(RuleOption::parse(entry)?);
        }
        Ok(Self { options })
    }

    /// The options in input order.
    #[must_use]
    pub fn options(&self) -> &[RuleOption] {
        &self.options
    }

    /// Number of parsed options.
    #[must_use]
    pub fn len(&self) -> usize {
        self.options.len()
    }

    /// True when no options were supplied.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.options.is_empty()
    }
}

impl From<Vec<RuleOption>> for RuleConfiguration {
    fn from(options: Vec<RuleOption>) -> Self {
        Self { options }
    }
}
