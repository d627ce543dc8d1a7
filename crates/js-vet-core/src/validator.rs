//! Validation entry point.

use tracing::debug;

use crate::checker::{CheckOutcome, RuleChecker};
use crate::error::LintError;
use crate::options::RuleConfiguration;
use crate::timing::StopWatch;
use crate::types::{ValidationError, ValidationResult};

/// Validates JavaScript source against a configured rule checker.
///
/// The validator owns its checker, and therefore the engine scope, for its
/// whole lifetime, so repeated calls skip the rule-program load. The scope is
/// mutable state (it holds the last check's error buffer); an instance must
/// not be invoked concurrently. Give each worker its own validator, or
/// serialize access externally.
#[derive(Debug)]
pub struct Validator<C> {
    checker: C,
}

impl<C: RuleChecker> Validator<C> {
    /// Creates a validator driving `checker`.
    pub fn new(checker: C) -> Self {
        Self { checker }
    }

    /// Eagerly loads the rule program, off the validation hot path.
    ///
    /// Optional: [`Validator::validate`] loads lazily on first use. Callers
    /// that care about first-call latency initialize at startup instead.
    ///
    /// # Errors
    ///
    /// [`LintError::EngineInitialization`] when the rule program cannot be
    /// read or evaluated.
    pub fn preload(&mut self) -> Result<(), LintError> {
        self.checker.load()
    }

    /// Consumes the validator, returning its checker.
    pub fn into_checker(self) -> C {
        self.checker
    }

    /// Validates `source` against the rules configured by `options`.
    ///
    /// Rule violations are not errors: they come back as
    /// [`ValidationResult::Invalid`]. The `Err` path is reserved for
    /// infrastructure failures.
    ///
    /// # Errors
    ///
    /// - [`LintError::InvalidOptionFormat`] for a malformed option, before
    ///   any engine work.
    /// - [`LintError::EngineInitialization`] when the rule program fails to
    ///   load.
    /// - [`LintError::EngineExecution`] when the engine faults mid-check.
    /// - [`LintError::ErrorListMalformed`] when the reported violations
    ///   cannot be deserialized.
    pub fn validate<I, S>(
        &mut self,
        source: &str,
        options: I,
    ) -> Result<ValidationResult, LintError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let config = RuleConfiguration::parse(options)?;
        debug!(options = config.len(), "parsed rule options");

        let mut watch = StopWatch::new();
        watch.start("init");
        self.checker.load()?;
        watch.stop();

        watch.start("check");
        let outcome = self.checker.check(source, &config)?;
        watch.stop();
        debug!("{}", watch.pretty_print());

        match outcome {
            CheckOutcome::Passed => {
                debug!("source is valid");
                Ok(ValidationResult::Valid)
            }
            CheckOutcome::Failed { raw_errors } => {
                let errors = ValidationError::parse_list(&raw_errors)?;
                debug!(count = errors.len(), "rules reported violations");
                Ok(ValidationResult::Invalid(errors))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct StubChecker {
        loads: usize,
        fail_load: bool,
        outcome: Option<CheckOutcome>,
    }

    impl StubChecker {
        fn passing() -> Self {
            Self {
                outcome: Some(CheckOutcome::Passed),
                ..Self::default()
            }
        }

        fn failing(raw_errors: &str) -> Self {
            Self {
                outcome: Some(CheckOutcome::Failed {
                    raw_errors: raw_errors.to_string(),
                }),
                ..Self::default()
            }
        }
    }

    impl RuleChecker for StubChecker {
        fn load(&mut self) -> Result<(), LintError> {
            if self.fail_load {
                return Err(LintError::EngineInitialization {
                    message: "missing program".to_string(),
                });
            }
            self.loads += 1;
            Ok(())
        }

        fn check(
            &mut self,
            _source: &str,
            _config: &RuleConfiguration,
        ) -> Result<CheckOutcome, LintError> {
            self.outcome
                .clone()
                .ok_or_else(|| LintError::EngineExecution {
                    message: "engine fault".to_string(),
                })
        }
    }

    const NO_OPTIONS: [&str; 0] = [];

    #[test]
    fn passing_check_is_valid() {
        let mut validator = Validator::new(StubChecker::passing());
        let result = validator.validate("var x = 1;", NO_OPTIONS).unwrap();
        assert!(result.is_valid());
    }

    #[test]
    fn failing_check_deserializes_errors() {
        let raw = r#"[{"line":1,"character":1,"reason":"'y' is not defined.","evidence":"y = 1;"}]"#;
        let mut validator = Validator::new(StubChecker::failing(raw));
        let result = validator.validate("y = 1;", ["undef"]).unwrap();
        let errors = result.errors();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].line, 1);
        assert_eq!(errors[0].reason, "'y' is not defined.");
    }

    #[test]
    fn malformed_option_skips_engine_work() {
        let mut validator = Validator::new(StubChecker::passing());
        let err = validator.validate("var x;", ["a=b=c"]).unwrap_err();
        assert!(matches!(err, LintError::InvalidOptionFormat { .. }));
        assert_eq!(validator.into_checker().loads, 0);
    }

    #[test]
    fn initialization_failure_propagates() {
        let mut validator = Validator::new(StubChecker {
            fail_load: true,
            ..StubChecker::default()
        });
        let err = validator.validate("var x;", NO_OPTIONS).unwrap_err();
        assert!(matches!(err, LintError::EngineInitialization { .. }));
    }

    #[test]
    fn execution_failure_propagates() {
        let mut validator = Validator::new(StubChecker::default());
        let err = validator.validate("var x;", NO_OPTIONS).unwrap_err();
        assert!(matches!(err, LintError::EngineExecution { .. }));
    }

    #[test]
    fn malformed_error_list_is_an_error_not_invalid() {
        let mut validator = Validator::new(StubChecker::failing(r#"[{"line":1}]"#));
        let err = validator.validate("y = 1;", NO_OPTIONS).unwrap_err();
        assert!(matches!(err, LintError::ErrorListMalformed { .. }));
    }

    #[test]
    fn null_entries_in_error_list_are_dropped() {
        let raw = r#"[null,{"line":3,"character":2,"reason":"stop"}]"#;
        let mut validator = Validator::new(StubChecker::failing(raw));
        let result = validator.validate("x", NO_OPTIONS).unwrap();
        assert_eq!(result.errors().len(), 1);
        assert_eq!(result.errors()[0].line, 3);
    }

    #[test]
    fn preload_initializes_once() {
        let mut validator = Validator::new(StubChecker::passing());
        validator.preload().unwrap();
        let _ = validator.validate("var x;", NO_OPTIONS).unwrap();
        // load() is called again by validate; idempotence is the checker's
        // contract, so the stub just counts invocations.
        assert_eq!(validator.into_checker().loads, 2);
    }
}
