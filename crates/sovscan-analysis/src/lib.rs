//! Share of Voice analysis for sovscan.
//!
//! Scans video metadata and top comments for tracked-brand mentions, scores
//! each mention by binary sentiment weighted by engagement, and aggregates
//! per-brand totals into a ranked report plus two CSV exports.

pub mod export;
pub mod mention;
pub mod pipeline;
pub mod report;
pub mod types;

use thiserror::Error;

pub use mention::score_fragment;
pub use pipeline::run_sov_analysis;
pub use report::{aggregate, BrandScore, SovAnalysis};
pub use types::{Fragment, Mention, MentionSource, SentimentLabel};

#[derive(Debug, Error)]
pub enum AnalysisError {
    /// A fatal search-side failure from the video platform client.
    #[error("YouTube client error: {0}")]
    Youtube(#[from] sovscan_youtube::YoutubeError),

    #[error("CSV export error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
