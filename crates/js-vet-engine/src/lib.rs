//! # js-vet-engine
//!
//! Embedded-interpreter backend for js-vet.
//!
//! [`JsChecker`] implements the core [`RuleChecker`] seam by evaluating a
//! rule program inside a `boa_engine` scope. The program is loaded once per
//! checker and the scope is reused across validations; the composer embeds
//! each source string and its rule configuration into a single check
//! expression.
//!
//! The bundled program speaks the JSHint calling convention
//! (`JSHINT(source, options)` returning a boolean, violations on
//! `JSHINT.errors`), so a full jshint.js build can be supplied in its place
//! via [`JsChecker::with_program`] or [`JsChecker::from_program_file`].
//!
//! ## Example
//!
//! ```ignore
//! use js_vet_engine::{JsChecker, Validator};
//!
//! let mut validator = Validator::new(JsChecker::new());
//! let result = validator.validate("y = 1;", ["undef"])?;
//! assert!(!result.is_valid());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod composer;
mod context;

pub use checker::JsChecker;
pub use composer::{compose_invocation, config_literal, js_string_literal};
pub use context::EngineContext;

/// Re-export core types for convenience.
pub use js_vet_core::{
    CheckOutcome, LintError, OptionValue, RuleChecker, RuleConfiguration, RuleOption,
    ValidationError, ValidationResult, Validator,
};
