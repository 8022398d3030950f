//! Variable interpolation for command lines
//!
//! Replaces `${var}` references in command lines and overlay values. The
//! `platform` variable carries the detected host platform; anything else
//! falls back to the process environment. Unknown variables are left as-is
//! so that shell constructs surviving to the interpreter keep working.

use regex::Regex;
use std::collections::HashMap;
use std::env;
use std::sync::OnceLock;

fn var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").unwrap())
}

/// Interpolate variables in a string
///
/// Supports:
/// - `${var}` - variable from the provided map (e.g. `platform`)
/// - Environment variables (when not found in the map)
pub fn interpolate(s: &str, vars: &HashMap<String, String>) -> String {
    var_pattern()
        .replace_all(s, |caps: &regex::Captures| {
            let var_name = &caps[1];

            // Provided variables take precedence
            if let Some(value) = vars.get(var_name) {
                return value.clone();
            }

            // Then the process environment
            if let Ok(value) = env::var(var_name) {
                return value;
            }

            // Leave unknown references unchanged
            format!("${{{}}}", var_name)
        })
        .to_string()
}
