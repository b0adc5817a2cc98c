use serde::{Deserialize, Serialize};

use super::config::{DEFAULT_MAX_LENGTH, DEFAULT_MIN_LENGTH};

fn default_min_length() -> u32 {
    DEFAULT_MIN_LENGTH
}

fn default_max_length() -> u32 {
    DEFAULT_MAX_LENGTH
}

/// Body of a summarization request. The length bounds are passed to the model as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeRequest {
    pub text: String,
    #[serde(default = "default_min_length")]
    pub min_length: u32,
    #[serde(default = "default_max_length")]
    pub max_length: u32,
}

impl SummarizeRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            min_length: DEFAULT_MIN_LENGTH,
            max_length: DEFAULT_MAX_LENGTH,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SummarizeResponse {
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthStatus {
    pub status: String,
    pub model_ready: bool,
    pub model: Option<String>,
}
