//! Error taxonomy for the validation pipeline.

use thiserror::Error;

/// Infrastructure failures raised by the validation pipeline.
///
/// Rule violations are not errors: they are reported through
/// [`ValidationResult::Invalid`](crate::ValidationResult). Every variant here
/// signals that the check itself could not be carried out, which callers must
/// distinguish from "the rules found problems".
#[derive(Debug, Error)]
pub enum LintError {
    /// An option string did not match `name` or `name=value`.
    ///
    /// Surfaced before any engine work is done.
    #[error("invalid option `{option}`: expected `name` or `name=value`")]
    InvalidOptionFormat {
        /// The offending raw option string.
        option: String,
    },

    /// The rule engine program could not be read or evaluated.
    ///
    /// Fatal for the checker instance; never retried automatically.
    #[error("failed to initialize rule engine: {message}")]
    EngineInitialization {
        /// Diagnostic from the program load or evaluation.
        message: String,
    },

    /// The engine threw while executing the check expression.
    #[error("rule engine execution failed: {message}")]
    EngineExecution {
        /// Diagnostic from the engine.
        message: String,
    },

    /// The engine's serialized error list could not be deserialized.
    ///
    /// Indicates an internal contract break, not a rule violation.
    #[error("malformed error list from rule engine: {message}")]
    ErrorListMalformed {
        /// Underlying parse diagnostic.
        message: String,
    },
}
