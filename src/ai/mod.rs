//! Generative model access

pub mod client;

// Re-export main types for convenience
pub use client::{GenerationRequest, InferenceClient, SummaryGenerator, estimate_tokens};
