//! Cleanup of raw model text before JSON parsing.
//!
//! Models frequently wrap JSON in markdown fences even when told not to. The
//! markers are removed wherever they appear (`json` tag matched in any case)
//! and the remainder is trimmed.

use std::sync::LazyLock;

use regex::Regex;
use serde_json::Value;

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```(?:json)?").expect("valid fence regex"));

/// Remove markdown code-fence markers and surrounding whitespace.
#[must_use]
pub fn strip_code_fences(raw: &str) -> String {
    FENCE_RE.replace_all(raw, "").trim().to_string()
}

/// Strip fences from `raw` and parse what remains as JSON.
///
/// # Errors
///
/// Returns the `serde_json` error when the cleaned text is not valid JSON.
pub fn parse_model_json(raw: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(&strip_code_fences(raw))
}
