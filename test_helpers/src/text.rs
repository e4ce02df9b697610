//! Text helpers for assertions on rendered output.

use anyhow::{Context, Result};

/// Decodes captured output as UTF-8 and normalises line endings.
///
/// # Errors
///
/// Returns an error when `bytes` are not valid UTF-8.
pub fn decode(bytes: Vec<u8>) -> Result<String> {
    let text = String::from_utf8(bytes).context("output should be UTF-8")?;
    Ok(normalize_newlines(&text))
}

/// Converts CRLF line endings to LF.
#[must_use]
pub fn normalize_newlines(value: &str) -> String {
    value.replace("\r\n", "\n")
}

/// Splits rendered output into owned lines without terminators.
#[must_use]
pub fn lines(value: &str) -> Vec<String> {
    value.lines().map(str::to_owned).collect()
}
