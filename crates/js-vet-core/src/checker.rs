//! The pluggable rule-checking capability.

use crate::error::LintError;
use crate::options::RuleConfiguration;

/// Outcome of one engine check pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CheckOutcome {
    /// The source satisfied every configured rule.
    Passed,
    /// The rules recorded violations.
    Failed {
        /// The engine's error list in its transport encoding (JSON).
        raw_errors: String,
    },
}

/// A rule-checking engine the [`Validator`](crate::Validator) can drive.
///
/// One implementation embeds a script interpreter running a rule program;
/// another could wrap a native reimplementation. The validator depends only
/// on this interface, so the engine is swappable without touching the
/// orchestration or the error model.
pub trait RuleChecker {
    /// Loads the rule program into the engine, if not already loaded.
    ///
    /// Must be idempotent: a second call on a loaded checker reuses the
    /// existing engine scope.
    ///
    /// # Errors
    ///
    /// [`LintError::EngineInitialization`] when the program cannot be read
    /// or evaluated.
    fn load(&mut self) -> Result<(), LintError>;

    /// Runs the configured rules against `source`.
    ///
    /// Implementations load themselves on demand when [`RuleChecker::load`]
    /// has not been called.
    ///
    /// # Errors
    ///
    /// [`LintError::EngineInitialization`] on a lazy load failure,
    /// [`LintError::EngineExecution`] when the engine faults during the
    /// check.
    fn check(
        &mut self,
        source: &str,
        config: &RuleConfiguration,
    ) -> Result<CheckOutcome, LintError>;
}

/// Boxed [`RuleChecker`] trait object.
pub type RuleCheckerBox = Box<dyn RuleChecker>;

impl<T: RuleChecker + ?Sized> RuleChecker for Box<T> {
    fn load(&mut self) -> Result<(), LintError> {
        (**self).load()
    }

    fn check(
        &mut self,
        source: &str,
        config: &RuleConfiguration,
    ) -> Result<CheckOutcome, LintError> {
        (**self).check(source, config)
    }
}
