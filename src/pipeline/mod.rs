//! Deterministic text pipeline around the model call.
//!
//! Both stages are pure functions over `&str` and hold no state.

pub mod excerpt;
pub mod finish;
pub mod text;

pub use excerpt::{select_excerpt, select_excerpt_with};
pub use finish::finish_summary;
