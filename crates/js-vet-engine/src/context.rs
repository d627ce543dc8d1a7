//! Reusable rule-engine execution scope.

use boa_engine::{Context, JsValue, Source};
use js_vet_core::LintError;
use tracing::debug;

/// An initialized rule-engine scope.
///
/// Holds a `boa_engine` context with the rule program already evaluated into
/// it, so repeated checks skip the program parse. The scope is stateful (the
/// engine's error buffer from the last check lives inside it) and the
/// underlying context is `!Send`, which pins an instance to its owning
/// thread.
pub struct EngineContext {
    context: Context,
}

impl EngineContext {
    /// Evaluates `program` into a fresh scope.
    ///
    /// # Errors
    ///
    /// [`LintError::EngineInitialization`] when the program fails to
    /// evaluate.
    pub fn initialize(program: &str) -> Result<Self, LintError> {
        debug!(bytes = program.len(), "loading rule engine program");
        let mut context = Context::default();
        context
            .eval(Source::from_bytes(program))
            .map_err(|e| LintError::EngineInitialization {
                message: e.to_string(),
            })?;
        Ok(Self { context })
    }

    /// Evaluates an expression in the initialized scope.
    ///
    /// # Errors
    ///
    /// [`LintError::EngineExecution`] when the engine throws.
    pub fn eval(&mut self, expression: &str) -> Result<JsValue, LintError> {
        self.context
            .eval(Source::from_bytes(expression))
            .map_err(|e| LintError::EngineExecution {
                message: e.to_string(),
            })
    }
}

impl std::fmt::Debug for EngineContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EngineContext").finish_non_exhaustive()
    }
}
