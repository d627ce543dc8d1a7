//! [`RuleChecker`] backed by the embedded interpreter.

use std::path::Path;

use js_vet_core::{CheckOutcome, LintError, RuleChecker, RuleConfiguration};
use tracing::debug;

use crate::composer::compose_invocation;
use crate::context::EngineContext;

/// The bundled rule program.
const BUNDLED_PROGRAM: &str = include_str!("../assets/jshint.js");

/// Expression that serializes the engine's accumulated error list.
const ERRORS_EXPRESSION: &str = "JSON.stringify(JSHINT.errors)";

/// Embedded-interpreter rule checker.
///
/// Loads its rule program lazily on first use and keeps the initialized
/// scope for the checker's lifetime, so repeated checks pay the program
/// parse only once. The default program is the bundled rule set; a custom
/// program string, a program file (for example a full jshint.js build), or
/// an already-initialized [`EngineContext`] can be supplied instead.
#[derive(Debug)]
pub struct JsChecker {
    program: ProgramSource,
    context: Option<EngineContext>,
}

#[derive(Debug)]
enum ProgramSource {
    Bundled,
    Inline(String),
}

impl JsChecker {
    /// Checker over the bundled rule program.
    #[must_use]
    pub fn new() -> Self {
        Self {
            program: ProgramSource::Bundled,
            context: None,
        }
    }

    /// Checker over a custom rule program.
    ///
    /// The program must follow the bundled program's calling convention: a
    /// global `JSHINT(source, options)` returning a boolean, with violations
    /// collected on `JSHINT.errors`.
    #[must_use]
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: ProgramSource::Inline(program.into()),
            context: None,
        }
    }

    /// Checker over a rule program read from `path`.
    ///
    /// # Errors
    ///
    /// [`LintError::EngineInitialization`] when the file cannot be read.
    pub fn from_program_file(path: impl AsRef<Path>) -> Result<Self, LintError> {
        let path = path.as_ref();
        let program =
            std::fs::read_to_string(path).map_err(|e| LintError::EngineInitialization {
                message: format!("failed to read rule program {}: {e}", path.display()),
            })?;
        Ok(Self::with_program(program))
    }

    /// Checker over an already-initialized scope.
    ///
    /// Skips program evaluation entirely; use this to pay the engine-load
    /// cost once and hand the scope to a fresh validator.
    #[must_use]
    pub fn with_context(context: EngineContext) -> Self {
        Self {
            program: ProgramSource::Bundled,
            context: Some(context),
        }
    }

    /// Consumes the checker, returning its scope if it was initialized.
    #[must_use]
    pub fn into_context(self) -> Option<EngineContext> {
        self.context
    }

    /// The bundled rule program source.
    ///
    /// Exposed so callers can pre-initialize an [`EngineContext`] to share.
    #[must_use]
    pub fn bundled_program() -> &'static str {
        BUNDLED_PROGRAM
    }

    fn ensure_initialized(&mut self) -> Result<&mut EngineContext, LintError> {
        if self.context.is_none() {
            let program = match &self.program {
                ProgramSource::Bundled => BUNDLED_PROGRAM,
                ProgramSource::Inline(program) => program.as_str(),
            };
            self.context = Some(EngineContext::initialize(program)?);
        }
        self.context
            .as_mut()
            .ok_or_else(|| LintError::EngineInitialization {
                message: "engine context unavailable".to_string(),
            })
    }
}

impl Default for JsChecker {
    fn default() -> Self {
        Self::new()
    }
}

impl RuleChecker for JsChecker {
    fn load(&mut self) -> Result<(), LintError> {
        self.ensure_initialized().map(|_| ())
    }

    fn check(
        &mut self,
        source: &str,
        config: &RuleConfiguration,
    ) -> Result<CheckOutcome, LintError> {
        let invocation = compose_invocation(source, config);
        debug!(bytes = invocation.len(), "composed check invocation");

        let context = self.ensure_initialized()?;
        let result = context.eval(&invocation)?;
        if result.to_boolean() {
            return Ok(CheckOutcome::Passed);
        }

        let raw = context.eval(ERRORS_EXPRESSION)?;
        let raw_errors = raw
            .as_string()
            .map(|s| s.to_std_string_escaped())
            .ok_or_else(|| LintError::ErrorListMalformed {
                message: "engine did not produce a serialized error list".to_string(),
            })?;
        debug!(bytes = raw_errors.len(), "fetched serialized error list");
        Ok(CheckOutcome::Failed { raw_errors })
    }
}
