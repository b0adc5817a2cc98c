//! Briefly - condenses news-style text into a short summary with a hosted
//! sequence-to-sequence model.
//!
//! Every request runs the same pipeline:
//! 1. The excerpt selector cleans the raw text and keeps a few key sentences
//!    (first, middle, last) within a fixed character budget
//! 2. The excerpt goes to the generative model (Hugging Face Inference API)
//! 3. The summary finisher normalizes the model output and repairs its last sentence
//!
//! Steps 1 and 3 are pure functions in [`pipeline`]; step 2 sits behind the
//! [`ai::SummaryGenerator`] trait and is injected into [`service::SummaryService`].
//!
//! # Example
//!
//! ```
//! use briefly::pipeline::{finish_summary, select_excerpt};
//!
//! let excerpt = select_excerpt(
//!     "Hi. This is a real sentence about news. Another detailed sentence follows here.",
//! );
//! assert_eq!(
//!     excerpt,
//!     "This is a real sentence about news. Another detailed sentence follows here."
//! );
//!
//! assert_eq!(finish_summary("Results were  strong"), "Results were strong.");
//! ```

pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod pipeline;
pub mod service;

pub use errors::SummaryError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// Uses `RUST_LOG` when set and falls back to `info`. Calling it more than once is
/// harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// briefly::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
