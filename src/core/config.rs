use std::env;
use std::time::Duration;

/// Hard ceiling on the excerpt forwarded to the model, in characters.
pub const EXCERPT_CHAR_LIMIT: usize = 400;

/// Fragments whose trimmed length is at or below this are discarded.
pub const MIN_SENTENCE_CHARS: usize = 12;

/// A period found past this index is a good enough place to cut an over-long excerpt.
pub const LATE_PERIOD_FLOOR: usize = 300;

/// Number of sentences kept (first, middle, last) once a document has more than this many.
pub const KEY_SENTENCE_COUNT: usize = 3;

/// Punctuation past this fraction of a generated summary counts as a sentence end worth keeping.
pub const TRAILING_PUNCTUATION_RATIO: f64 = 0.7;

/// Token cap applied to the excerpt before it reaches the model.
pub const MAX_INPUT_TOKENS: usize = 280;

pub const DEFAULT_MIN_LENGTH: u32 = 40;
pub const DEFAULT_MAX_LENGTH: u32 = 110;

pub const DEFAULT_HF_API_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-cnn";
pub const DEFAULT_GENERATION_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_INFERENCE_MAX_RETRIES: usize = 2;

/// Knobs for excerpt selection.
#[derive(Debug, Clone, PartialEq)]
pub struct ExcerptPolicy {
    pub max_chars: usize,
    pub min_sentence_chars: usize,
    pub late_period_floor: usize,
    pub key_sentence_count: usize,
    /// Keep non-ASCII letters and digits during noise stripping.
    pub unicode_word_chars: bool,
}

impl Default for ExcerptPolicy {
    fn default() -> Self {
        Self {
            max_chars: EXCERPT_CHAR_LIMIT,
            min_sentence_chars: MIN_SENTENCE_CHARS,
            late_period_floor: LATE_PERIOD_FLOOR,
            key_sentence_count: KEY_SENTENCE_COUNT,
            unicode_word_chars: false,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub hf_api_url: String,
    pub hf_api_token: Option<String>,
    pub generation_timeout: Duration,
    pub inference_max_retries: usize,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup so it can be exercised without
    /// touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let generation_timeout_secs = match lookup("GENERATION_TIMEOUT_SECS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|e| format!("GENERATION_TIMEOUT_SECS: {}", e))?,
            None => DEFAULT_GENERATION_TIMEOUT_SECS,
        };

        let inference_max_retries = match lookup("INFERENCE_MAX_RETRIES") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .map_err(|e| format!("INFERENCE_MAX_RETRIES: {}", e))?,
            None => DEFAULT_INFERENCE_MAX_RETRIES,
        };

        Ok(Self {
            hf_api_url: lookup("HF_API_URL")
                .filter(|url| !url.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_HF_API_URL.to_string()),
            hf_api_token: lookup("HF_API_TOKEN").filter(|token| !token.trim().is_empty()),
            generation_timeout: Duration::from_secs(generation_timeout_secs),
            inference_max_retries,
        })
    }
}
