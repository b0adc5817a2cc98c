#![allow(dead_code)]

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use briefly::ai::{GenerationRequest, SummaryGenerator};
use briefly::errors::SummaryError;
use briefly::service::{ServiceSettings, SummaryService};

/// In-memory stand-in for the hosted model.
pub struct FakeGenerator {
    reply: Result<String, String>,
    error_kind: fn(String) -> SummaryError,
    ready: bool,
    delay: Option<Duration>,
    pub seen: Mutex<Vec<GenerationRequest>>,
}

impl FakeGenerator {
    pub fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            error_kind: SummaryError::InferenceError,
            ready: true,
            delay: None,
            seen: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            ..Self::replying("")
        }
    }

    /// Always answers the way the hosted API does while the model warms up.
    pub fn loading(message: &str) -> Self {
        Self {
            error_kind: SummaryError::ModelLoading,
            ..Self::failing(message)
        }
    }

    pub fn not_ready(mut self) -> Self {
        self.ready = false;
        self
    }

    pub fn slow(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn requests(&self) -> Vec<GenerationRequest> {
        self.seen.lock().unwrap().clone()
    }
}

#[async_trait]
impl SummaryGenerator for FakeGenerator {
    async fn generate(&self, request: &GenerationRequest) -> Result<String, SummaryError> {
        self.seen.lock().unwrap().push(request.clone());
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.reply.clone().map_err(self.error_kind)
    }

    fn model_name(&self) -> &str {
        "fake/bart"
    }

    fn is_ready(&self) -> bool {
        self.ready
    }
}

pub fn service_with(generator: Arc<FakeGenerator>) -> SummaryService {
    SummaryService::new(Some(generator), ServiceSettings::default())
}

pub fn service_without_model() -> SummaryService {
    SummaryService::new(None, ServiceSettings::default())
}

pub const ARTICLE: &str = "
    Breaking news: A major technological breakthrough has been announced by researchers at leading universities.
    The new innovation promises to revolutionize the way we interact with artificial intelligence systems.
    Scientists have developed a method that significantly improves the accuracy and efficiency of machine learning models.
    The research team spent over three years developing this technology, which could have applications in various industries
    including healthcare, finance, and transportation. The breakthrough addresses several long-standing challenges in AI
    and opens up new possibilities for future developments.
";
