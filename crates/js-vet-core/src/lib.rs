//! # js-vet-core
//!
//! Engine-agnostic core of the js-vet JavaScript source validator.
//!
//! This crate provides the domain layer shared by every rule-engine backend:
//!
//! - [`RuleConfiguration`] parsed from flat `name[=value]` option strings
//! - [`RuleChecker`], the seam behind which a rule engine lives
//! - [`Validator`], the public entry point: parse options, load the engine,
//!   run the check, deserialize reported violations
//! - [`ValidationResult`] / [`ValidationError`], the typed outcomes callers
//!   pattern-match on
//!
//! ## Example
//!
//! ```ignore
//! use js_vet_core::Validator;
//! use js_vet_engine::JsChecker;
//!
//! let mut validator = Validator::new(JsChecker::new());
//! let result = validator.validate("y = 1;", ["undef"])?;
//! for error in result.errors() {
//!     println!("{error}");
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod checker;
mod error;
mod options;
mod timing;
mod types;
mod validator;

pub use checker::{CheckOutcome, RuleChecker, RuleCheckerBox};
pub use error::LintError;
pub use options::{OptionValue, RuleConfiguration, RuleOption};
pub use timing::{Phase, StopWatch};
pub use types::{ValidationDiagnostic, ValidationError, ValidationResult};
pub use validator::Validator;
