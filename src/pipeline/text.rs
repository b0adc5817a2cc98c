//! Text cleanup primitives shared by the excerpt selector and the summary finisher.

use regex::Regex;
use std::sync::LazyLock;

static WHITESPACE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("static regex compile"));

// Anything outside ASCII word characters, whitespace and light punctuation.
static ASCII_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9_\s.,!?;:\-]").expect("static regex compile"));

static UNICODE_NOISE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\w\s.,!?;:\-]").expect("static regex compile"));

static SENTENCE_END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[.!?]+").expect("static regex compile"));

/// Terminal punctuation marks.
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Trims the text and collapses every whitespace run into a single space.
#[must_use]
pub fn normalize_whitespace(text: &str) -> String {
    WHITESPACE_RE.replace_all(text.trim(), " ").into_owned()
}

/// Removes characters that are not word characters, whitespace, or one of `. , ! ? ; : -`.
///
/// With `unicode_word_chars` unset only ASCII letters, digits and `_` count as word
/// characters, so accented and non-Latin letters are dropped.
#[must_use]
pub fn strip_noise(text: &str, unicode_word_chars: bool) -> String {
    let re = if unicode_word_chars {
        &*UNICODE_NOISE_RE
    } else {
        &*ASCII_NOISE_RE
    };
    re.replace_all(text, "").into_owned()
}

/// Splits on runs of `.`, `!`, `?` and keeps trimmed fragments longer than `min_chars`.
#[must_use]
pub fn split_sentences(text: &str, min_chars: usize) -> Vec<&str> {
    SENTENCE_END_RE
        .split(text)
        .map(str::trim)
        .filter(|s| !s.is_empty() && char_len(s) > min_chars)
        .collect()
}

#[must_use]
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Returns the first `n` characters of `text`.
#[must_use]
pub fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((byte_idx, _)) => &text[..byte_idx],
        None => text,
    }
}
