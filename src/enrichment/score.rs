//! Extracts a policy score and rationale from a free-text analysis response.
//!
//! The analysis model is prompted to answer in the form `"<score> // <keywords>"`.
//! Models don't always comply, so parsing is lenient and never fails:
//!
//! - `"2 // smoky patio"` parses to `(2, "smoky patio")`
//! - `"1, mixed signals"` has no separator, so the leading digits give the
//!   score and the whole text is kept as the rationale
//! - anything unparseable scores 0

use super::domain::{AnalysisResult, PolicyScore};

/// Separator between the score and the rationale
pub const SEPARATOR: &str = "//";

/// Parse an analysis response into a clamped score and rationale.
pub fn parse(text: &str) -> (PolicyScore, String) {
    match text.split_once(SEPARATOR) {
        Some((score, rationale)) => {
            let score = score.trim().parse::<i64>().unwrap_or(0);
            (PolicyScore::clamped(score), rationale.trim().to_string())
        }
        None => (
            PolicyScore::clamped(leading_number(text.trim()).unwrap_or(0)),
            text.to_string(),
        ),
    }
}

/// Parse an analysis response straight into an [`AnalysisResult`].
pub fn parse_result(text: &str) -> AnalysisResult {
    let (score, rationale) = parse(text);
    AnalysisResult::new(score, rationale)
}

/// The leading run of ASCII digits, if any, as a number.
///
/// Overflowing runs count as unparseable.
fn leading_number(text: &str) -> Option<i64> {
    let end = text
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(text.len());
    text[..end].parse().ok()
}
