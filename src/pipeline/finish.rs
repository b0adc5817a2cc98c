//! Post-processing for model output.

use crate::core::config::TRAILING_PUNCTUATION_RATIO;

use super::text::{SENTENCE_TERMINATORS, char_len, normalize_whitespace};

/// Normalizes whitespace and makes sure the summary ends on `.`, `!` or `?`.
///
/// A dangling clause after a late sentence end is dropped; otherwise a period is
/// appended. An empty input comes back as `"."`.
#[must_use]
pub fn finish_summary(generated_text: &str) -> String {
    let summary = normalize_whitespace(generated_text);
    if summary.ends_with(SENTENCE_TERMINATORS) {
        return summary;
    }

    let cutoff = char_len(&summary) as f64 * TRAILING_PUNCTUATION_RATIO;
    match summary.rfind(SENTENCE_TERMINATORS) {
        Some(byte_idx) if char_len(&summary[..byte_idx]) as f64 > cutoff => {
            summary[..=byte_idx].to_string()
        }
        _ => format!("{summary}."),
    }
}
