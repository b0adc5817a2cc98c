//! Generative model client module
//!
//! Defines the seam the service calls to turn an excerpt into raw summary text, and the
//! Hugging Face Inference API adapter that implements it.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde_json::{Value, json};
use std::time::Duration;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{info, warn};

use crate::core::config::AppConfig;
use crate::errors::SummaryError;
use crate::pipeline::text::take_chars;

const CHARS_PER_TOKEN: usize = 4;

// 200ms, 400ms, 800ms, ...
const RETRY_BACKOFF_BASE: u64 = 2;
const RETRY_BACKOFF_FACTOR: u64 = 100;

#[must_use]
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count() / CHARS_PER_TOKEN + 1
}

/// Trims `text` so that its estimated token count stays within `max_tokens`.
#[must_use]
pub fn fit_token_budget(text: &str, max_tokens: usize) -> &str {
    if estimate_tokens(text) <= max_tokens {
        return text;
    }
    take_chars(text, max_tokens.saturating_sub(1) * CHARS_PER_TOKEN)
}

/// Input handed to the model for one request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub excerpt: String,
    pub min_length: u32,
    pub max_length: u32,
    pub max_input_tokens: usize,
}

/// Anything that can turn an excerpt into raw summary text.
#[async_trait]
pub trait SummaryGenerator: Send + Sync {
    /// # Errors
    ///
    /// Returns an error when the model cannot be reached or produces no text.
    async fn generate(&self, request: &GenerationRequest) -> Result<String, SummaryError>;

    fn model_name(&self) -> &str;

    fn is_ready(&self) -> bool {
        true
    }
}

/// Fixed decoding settings sent along with every request.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodingSettings {
    pub num_beams: u32,
    pub early_stopping: bool,
    pub do_sample: bool,
    pub no_repeat_ngram_size: u32,
    pub length_penalty: f64,
    pub repetition_penalty: f64,
}

impl Default for DecodingSettings {
    fn default() -> Self {
        Self {
            num_beams: 2,
            early_stopping: true,
            do_sample: false,
            no_repeat_ngram_size: 2,
            length_penalty: 1.1,
            repetition_penalty: 1.1,
        }
    }
}

/// Client for a hosted summarization model on the Hugging Face Inference API
pub struct InferenceClient {
    http: Client,
    api_url: String,
    api_token: String,
    model_name: String,
    max_retries: usize,
    decoding: DecodingSettings,
}

impl InferenceClient {
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn new(
        api_url: String,
        api_token: String,
        timeout: Duration,
        max_retries: usize,
    ) -> Result<Self, SummaryError> {
        let http = Client::builder().timeout(timeout).build().map_err(|e| {
            SummaryError::HttpError(format!("Failed to build inference HTTP client: {e}"))
        })?;

        Ok(Self {
            model_name: model_name_from_url(&api_url),
            http,
            api_url,
            api_token,
            max_retries,
            decoding: DecodingSettings::default(),
        })
    }

    /// Builds a client from configuration, or `None` when no API token is configured.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    pub fn from_config(config: &AppConfig) -> Result<Option<Self>, SummaryError> {
        let Some(token) = config.hf_api_token.clone() else {
            return Ok(None);
        };

        Self::new(
            config.hf_api_url.clone(),
            token,
            config.generation_timeout,
            config.inference_max_retries,
        )
        .map(Some)
    }

    #[must_use]
    pub fn with_decoding(mut self, decoding: DecodingSettings) -> Self {
        self.decoding = decoding;
        self
    }

    #[must_use]
    pub fn build_payload(&self, request: &GenerationRequest) -> Value {
        let inputs = fit_token_budget(&request.excerpt, request.max_input_tokens);

        json!({
            "inputs": inputs,
            "parameters": {
                "min_length": request.min_length,
                "max_length": request.max_length,
                "num_beams": self.decoding.num_beams,
                "early_stopping": self.decoding.early_stopping,
                "do_sample": self.decoding.do_sample,
                "no_repeat_ngram_size": self.decoding.no_repeat_ngram_size,
                "length_penalty": self.decoding.length_penalty,
                "repetition_penalty": self.decoding.repetition_penalty,
            },
            "options": {
                "wait_for_model": false,
                "use_cache": false,
            }
        })
    }

    async fn post_once(&self, payload: &Value) -> Result<String, SummaryError> {
        let response = self
            .http
            .post(&self.api_url)
            .bearer_auth(&self.api_token)
            .json(payload)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        let body: Value = serde_json::from_str(&text).unwrap_or(Value::String(text));

        classify_response(status, &body)
    }
}

#[async_trait]
impl SummaryGenerator for InferenceClient {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, SummaryError> {
        let payload = self.build_payload(request);

        info!(
            model = %self.model_name,
            min_length = request.min_length,
            max_length = request.max_length,
            "Requesting summary from inference API"
        );

        with_retry(self.max_retries, || self.post_once(&payload)).await
    }

    fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Maps an Inference API status and body onto the generated text or an error.
///
/// 503 means the model is still loading; 429 and other 5xx responses are transient
/// HTTP failures. Any other non-2xx status is a hard inference error.
///
/// # Errors
///
/// Returns an error for every non-2xx status, or when a 2xx body carries no summary.
pub fn classify_response(status: StatusCode, body: &Value) -> Result<String, SummaryError> {
    if status == StatusCode::SERVICE_UNAVAILABLE {
        return Err(SummaryError::ModelLoading(error_detail(body)));
    }

    if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
        return Err(SummaryError::HttpError(format!(
            "{status}: {}",
            error_detail(body)
        )));
    }

    if !status.is_success() {
        return Err(SummaryError::InferenceError(format!(
            "{status}: {}",
            error_detail(body)
        )));
    }

    parse_inference_response(body)
}

fn retry_strategy(max_retries: usize) -> impl Iterator<Item = Duration> {
    ExponentialBackoff::from_millis(RETRY_BACKOFF_BASE)
        .factor(RETRY_BACKOFF_FACTOR)
        .map(jitter)
        .take(max_retries)
}

/// Runs `operation`, repeating it up to `max_retries` more times while it fails
/// with a transient error.
async fn with_retry<F, Fut>(max_retries: usize, operation: F) -> Result<String, SummaryError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<String, SummaryError>>,
{
    RetryIf::start(retry_strategy(max_retries), operation, |e: &SummaryError| {
        let transient = e.is_transient();
        if transient {
            warn!(error = %e, "Transient inference failure, retrying");
        }
        transient
    })
    .await
}

/// Extracts the generated text from an Inference API response body.
///
/// # Errors
///
/// Returns an error if the body reports an error or carries no summary text.
pub fn parse_inference_response(body: &Value) -> Result<String, SummaryError> {
    if let Some(err) = body.get("error").and_then(Value::as_str) {
        return Err(SummaryError::InferenceError(err.to_string()));
    }

    let first = match body {
        Value::Array(items) => items.first(),
        other => Some(other),
    };

    first
        .and_then(|item| item.get("summary_text").or_else(|| item.get("generated_text")))
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| {
            SummaryError::InferenceError("Invalid response format from inference API".to_string())
        })
}

fn error_detail(body: &Value) -> String {
    match body {
        Value::String(s) => s.clone(),
        other => other
            .get("error")
            .and_then(Value::as_str)
            .map_or_else(|| other.to_string(), str::to_string),
    }
}

fn model_name_from_url(api_url: &str) -> String {
    api_url
        .split_once("/models/")
        .map(|(_, model)| model.trim_end_matches('/'))
        .filter(|model| !model.is_empty())
        .unwrap_or(api_url)
        .to_string()
}
