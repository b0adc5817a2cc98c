//! Excerpt selection: shrinks arbitrary input to a short, sentence-aligned excerpt
//! before it is handed to the model.

use crate::core::config::ExcerptPolicy;

use super::text::{char_len, normalize_whitespace, split_sentences, strip_noise, take_chars};

/// Builds the excerpt for `raw_text` using the default policy.
///
/// Never fails: input without qualifying sentences yields `"."`.
#[must_use]
pub fn select_excerpt(raw_text: &str) -> String {
    select_excerpt_with(raw_text, &ExcerptPolicy::default())
}

/// Builds the excerpt for `raw_text` using an explicit policy.
///
/// The text is cleaned, split into sentences, reduced to first/middle/last when it
/// has more than `policy.key_sentence_count` of them, joined with `". "`, and finally
/// cut down to `policy.max_chars`.
#[must_use]
pub fn select_excerpt_with(raw_text: &str, policy: &ExcerptPolicy) -> String {
    let normalized = normalize_whitespace(raw_text);
    let cleaned = strip_noise(&normalized, policy.unicode_word_chars);
    let sentences = split_sentences(&cleaned, policy.min_sentence_chars);

    let selected = pick_key_sentences(&sentences, policy.key_sentence_count);
    let joined = format!("{}.", selected.join(". "));

    enforce_char_limit(joined, policy)
}

/// First, middle and last sentence once there are more than `threshold`; otherwise all
/// of them. Positions are not deduplicated.
fn pick_key_sentences<'a>(sentences: &[&'a str], threshold: usize) -> Vec<&'a str> {
    let count = sentences.len();
    if count > threshold {
        vec![sentences[0], sentences[count / 2], sentences[count - 1]]
    } else {
        sentences.to_vec()
    }
}

fn enforce_char_limit(excerpt: String, policy: &ExcerptPolicy) -> String {
    if char_len(&excerpt) <= policy.max_chars {
        return excerpt;
    }

    let head = take_chars(&excerpt, policy.max_chars);
    match head.rfind('.') {
        Some(byte_idx) if char_len(&head[..byte_idx]) > policy.late_period_floor => {
            head[..=byte_idx].to_string()
        }
        _ => format!("{head}."),
    }
}
