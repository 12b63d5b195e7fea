//! Binary sentiment classification for sovscan.
//!
//! The pipeline only needs a forced positive/negative call per text
//! fragment. [`SentimentClassifier`] is the seam: [`LexiconClassifier`] is
//! the self-contained default, [`RemoteClassifier`] delegates to an HTTP
//! inference endpoint. Classification never fails the pipeline — any
//! failure collapses to [`ClassifyOutcome::Failed`], whose score sign is 0.

mod lexicon;
mod remote;
mod types;

pub use lexicon::LexiconClassifier;
pub use remote::RemoteClassifier;
pub use types::{truncate_for_model, ClassifyOutcome, MAX_INPUT_CHARS};

/// A binary sentiment classifier over short text fragments.
///
/// Implementations truncate their input to [`MAX_INPUT_CHARS`] and map any
/// internal failure to [`ClassifyOutcome::Failed`] instead of erroring.
#[allow(async_fn_in_trait)]
pub trait SentimentClassifier {
    async fn classify(&self, text: &str) -> ClassifyOutcome;
}
