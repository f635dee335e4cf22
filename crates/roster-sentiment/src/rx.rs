//! Regex compilation helpers shared across the crate.

use regex::Regex;
use roster_core::{Error, Result};

/// Compile a pattern, surfacing failures as configuration errors.
pub fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| Error::InvalidData(format!("invalid pattern `{pattern}`: {e}")))
}
