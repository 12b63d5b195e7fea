//! HTTP client for the `YouTube` Data API v3.
//!
//! Wraps `reqwest` with `YouTube`-specific error handling, API key management,
//! and typed response deserialization. Only the three endpoints the SoV
//! pipeline needs are covered: `search`, `videos`, and `commentThreads`.

mod client;
mod error;
mod types;

pub use client::YoutubeClient;
pub use error::YoutubeError;
pub use types::{CommentRecord, VideoRecord};
