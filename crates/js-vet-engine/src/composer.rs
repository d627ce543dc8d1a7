//! Builds the engine invocation expression.
//!
//! The composer is the only place that knows the engine's wire syntax: how
//! the source text is embedded as a script literal and how a
//! [`RuleConfiguration`] renders into the options object literal.

use std::fmt::Write;

use js_vet_core::RuleConfiguration;

/// Composes the check invocation for `source` under `config`.
///
/// The expression runs the check and evaluates to its boolean result:
/// `JSHINT("<source>", {"name": value});`
#[must_use]
pub fn compose_invocation(source: &str, config: &RuleConfiguration) -> String {
    format!(
        "JSHINT({}, {});",
        js_string_literal(source),
        config_literal(config)
    )
}

/// Renders `source` as a double-quoted JS string literal.
///
/// Survives embedded quotes, backslashes, newlines, control characters and
/// the JS line separators U+2028/U+2029.
#[must_use]
pub fn js_string_literal(source: &str) -> String {
    let mut out = String::with_capacity(source.len() + 2);
    out.push('"');
    for c in source.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            '\u{2028}' => out.push_str("\\u2028"),
            '\u{2029}' => out.push_str("\\u2029"),
            c if (c as u32) < 0x20 => {
                let _ = write!(out, "\\u{:04x}", c as u32);
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Renders the configuration in the engine's object-literal syntax.
///
/// Names are quoted; boolean values render as `true`/`false`; literal values
/// are emitted verbatim, so quoting arbitrary strings is the caller's
/// responsibility. Entries are comma-separated with no trailing comma.
#[must_use]
pub fn config_literal(config: &RuleConfiguration) -> String {
    let mut out = String::from("{");
    for (i, option) in config.options().iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        let _ = write!(out, "\"{}\": {}", option.name, option.value);
    }
    out.push('}');
    out
}
