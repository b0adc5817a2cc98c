use std::time::Duration;
use thiserror::Error;

/// Message returned to callers when the model is not loaded.
pub const MODEL_UNAVAILABLE_MESSAGE: &str = "Summarization model is not available.";

/// Message returned to callers for every other failure. Internal detail stays in the logs.
pub const PROCESSING_FAILURE_MESSAGE: &str = "Could not process the text.";

/// Message returned to callers whose request body could not be decoded.
pub const INVALID_REQUEST_MESSAGE: &str = "Invalid request body";

#[derive(Debug, Error)]
pub enum SummaryError {
    #[error("Failed to parse request: {0}")]
    ParseError(String),

    #[error("Summarization model is not available")]
    ModelUnavailable,

    #[error("Inference API returned an error: {0}")]
    InferenceError(String),

    #[error("Model is still loading: {0}")]
    ModelLoading(String),

    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Summary generation timed out after {0:?}")]
    Timeout(Duration),
}

impl SummaryError {
    /// Whether repeating the same inference call may succeed.
    #[must_use]
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::ModelLoading(_) | Self::HttpError(_))
    }

    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::ParseError(_) => 400,
            Self::ModelUnavailable | Self::ModelLoading(_) => 503,
            _ => 500,
        }
    }

    /// Caller-facing message for this error.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::ParseError(msg) => match missing_field(msg) {
                Some(field) => format!("{INVALID_REQUEST_MESSAGE}: missing field `{field}`"),
                None => format!("{INVALID_REQUEST_MESSAGE}."),
            },
            Self::ModelUnavailable | Self::ModelLoading(_) => MODEL_UNAVAILABLE_MESSAGE.to_string(),
            _ => PROCESSING_FAILURE_MESSAGE.to_string(),
        }
    }
}

/// Field name from a serde "missing field `name`" message.
fn missing_field(msg: &str) -> Option<&str> {
    let rest = msg.split_once("missing field `")?.1;
    let (field, _) = rest.split_once('`')?;
    Some(field)
}

impl From<reqwest::Error> for SummaryError {
    fn from(error: reqwest::Error) -> Self {
        SummaryError::HttpError(error.to_string())
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(error: serde_json::Error) -> Self {
        SummaryError::ParseError(error.to_string())
    }
}
