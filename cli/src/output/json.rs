//! JSON output helpers.
//!
//! Provides the status formatter for `--json` and the error-object formatter
//! used by all `--json` code paths when a command fails.

use anyhow::{Context, Result};
use molecule_common::StatusRecord;

/// Renders output as pretty-printed JSON on stdout.
pub struct JsonRenderer;

impl JsonRenderer {
    /// Print status records as a JSON array.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn render_status(&self, records: &[StatusRecord]) -> Result<()> {
        println!("{}", format_status(records)?);
        Ok(())
    }
}

/// Status records as a JSON array; flags stay the strings `True`, `False`
/// and `Skipped`.
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_status(records: &[StatusRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("JSON serialization failed")
}

/// Format a JSON error object.
///
/// Output (pretty-printed):
/// ```json
/// {
///   "error": true,
///   "message": "...",
///   "code": "..."
/// }
/// ```
///
/// # Errors
///
/// Returns an error if JSON serialization fails.
pub fn format_error(message: &str, code: &str) -> Result<String> {
    let obj = serde_json::json!({
        "error": true,
        "message": message,
        "code": code,
    });
    serde_json::to_string_pretty(&obj).context("JSON serialization failed")
}
