//! End-to-end summarization: excerpt selection, one model call, summary repair.
//!
//! The model handle is injected at construction time; the service itself keeps no
//! per-request state and can be shared across concurrent requests.

use std::sync::Arc;
use std::time::Duration;
use tracing::{error, info};

use crate::ai::{GenerationRequest, SummaryGenerator};
use crate::core::config::{
    AppConfig, DEFAULT_GENERATION_TIMEOUT_SECS, ExcerptPolicy, MAX_INPUT_TOKENS,
};
use crate::core::models::{HealthStatus, SummarizeRequest, SummarizeResponse};
use crate::errors::SummaryError;
use crate::pipeline::{finish_summary, select_excerpt_with};

#[derive(Debug, Clone)]
pub struct ServiceSettings {
    pub excerpt_policy: ExcerptPolicy,
    pub max_input_tokens: usize,
    pub generation_timeout: Duration,
}

impl Default for ServiceSettings {
    fn default() -> Self {
        Self {
            excerpt_policy: ExcerptPolicy::default(),
            max_input_tokens: MAX_INPUT_TOKENS,
            generation_timeout: Duration::from_secs(DEFAULT_GENERATION_TIMEOUT_SECS),
        }
    }
}

impl From<&AppConfig> for ServiceSettings {
    fn from(config: &AppConfig) -> Self {
        Self {
            generation_timeout: config.generation_timeout,
            ..Self::default()
        }
    }
}

pub struct SummaryService {
    generator: Option<Arc<dyn SummaryGenerator>>,
    settings: ServiceSettings,
}

impl SummaryService {
    #[must_use]
    pub fn new(generator: Option<Arc<dyn SummaryGenerator>>, settings: ServiceSettings) -> Self {
        Self {
            generator,
            settings,
        }
    }

    #[must_use]
    pub fn settings(&self) -> &ServiceSettings {
        &self.settings
    }

    /// # Errors
    ///
    /// Returns `ModelUnavailable` when no model is loaded, `Timeout` when the model
    /// exceeds the generation budget, and the model's own error otherwise.
    #[tracing::instrument(level = "info", skip_all, fields(text_chars = request.text.chars().count()))]
    pub async fn summarize(
        &self,
        request: &SummarizeRequest,
    ) -> Result<SummarizeResponse, SummaryError> {
        let generator = match &self.generator {
            Some(generator) if generator.is_ready() => generator,
            _ => return Err(SummaryError::ModelUnavailable),
        };

        let excerpt = select_excerpt_with(&request.text, &self.settings.excerpt_policy);

        #[cfg(feature = "debug-logs")]
        info!("Excerpt sent to model: {}", excerpt);

        #[cfg(not(feature = "debug-logs"))]
        info!(excerpt_chars = excerpt.chars().count(), "Selected excerpt");

        let generation = GenerationRequest {
            excerpt,
            min_length: request.min_length,
            max_length: request.max_length,
            max_input_tokens: self.settings.max_input_tokens,
        };

        let timeout = self.settings.generation_timeout;
        let raw = match tokio::time::timeout(timeout, generator.generate(&generation)).await {
            Ok(result) => result?,
            Err(_) => {
                error!(?timeout, "Summary generation timed out");
                return Err(SummaryError::Timeout(timeout));
            }
        };

        let summary = finish_summary(&raw);
        info!(summary_chars = summary.chars().count(), "Summary finished");

        Ok(SummarizeResponse { summary })
    }

    #[must_use]
    pub fn health(&self) -> HealthStatus {
        HealthStatus {
            status: "ok".to_string(),
            model_ready: self.generator.as_ref().is_some_and(|g| g.is_ready()),
            model: self.generator.as_ref().map(|g| g.model_name().to_string()),
        }
    }
}
