//! String helpers for the delimiter-suffix naming convention
//!
//! Column names and set-column values carry a trailing
//! `<delimiter><token>` identifying the result set they belong to. These
//! helpers split on the *last* delimiter occurrence, so a multi-token name
//! like `AI_ABILITY_02` keeps its base (`AI_ABILITY`) intact.

use crate::error::{Error, Result};

/// Get the token after the last delimiter occurrence
///
/// A string without the delimiter is its own last token.
///
/// Examples:
/// - `last_token("FOO_02", "_")` -> `"02"`
/// - `last_token("A_B_C", "_")` -> `"C"`
/// - `last_token("FOO", "_")` -> `"FOO"`
pub fn last_token<'a>(s: &'a str, delimiter: &str) -> Result<&'a str> {
    ensure_not_blank(s, "name")?;
    Ok(s.rsplit_once(delimiter).map_or(s, |(_, token)| token))
}

/// Drop the last delimiter-separated token, keeping the delimiter-joined rest
///
/// A string without the delimiter strips to the empty string.
///
/// Examples:
/// - `strip_last_token("FOO_02", "_")` -> `"FOO"`
/// - `strip_last_token("A_B_C", "_")` -> `"A_B"`
/// - `strip_last_token("FOO", "_")` -> `""`
pub fn strip_last_token<'a>(s: &'a str, delimiter: &str) -> Result<&'a str> {
    ensure_not_blank(s, "name")?;
    Ok(s.rsplit_once(delimiter).map_or("", |(base, _)| base))
}

/// Get the delimiter-prefixed trailing token, e.g. `"FOO_02"` -> `"_02"`
pub fn suffix_with_delimiter(s: &str, delimiter: &str) -> Result<String> {
    Ok(format!("{}{}", delimiter, last_token(s, delimiter)?))
}

/// Reject empty or all-whitespace string arguments
pub(crate) fn ensure_not_blank(s: &str, what: &'static str) -> Result<()> {
    if s.trim().is_empty() {
        return Err(Error::BlankArgument { what });
    }
    Ok(())
}
