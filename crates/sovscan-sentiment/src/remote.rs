//! HTTP adapter for a hosted sentiment-classification endpoint.

use serde::{Deserialize, Serialize};

use crate::types::{truncate_for_model, ClassifyOutcome};
use crate::SentimentClassifier;

/// Client for a text-classification inference server.
///
/// Posts `{"inputs": text}` to `<base>/classify` and expects a ranked label
/// list in response. Every failure mode — network, status, body shape —
/// collapses to [`ClassifyOutcome::Failed`]; the pipeline never sees an
/// error from this adapter.
pub struct RemoteClassifier {
    client: reqwest::Client,
    url: String,
}

#[derive(Serialize)]
struct ClassifyRequest<'a> {
    inputs: &'a str,
}

#[derive(Deserialize)]
struct ClassifiedLabel {
    label: String,
}

impl RemoteClassifier {
    #[must_use]
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            url: format!("{}/classify", base_url.trim_end_matches('/')),
        }
    }
}

impl SentimentClassifier for RemoteClassifier {
    async fn classify(&self, text: &str) -> ClassifyOutcome {
        let request = ClassifyRequest {
            inputs: truncate_for_model(text),
        };

        let response = match self.client.post(&self.url).json(&request).send().await {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!(error = %e, "sentiment request failed; scoring as neutral");
                return ClassifyOutcome::Failed;
            }
        };

        if !response.status().is_success() {
            tracing::warn!(
                status = %response.status(),
                "sentiment endpoint returned non-success; scoring as neutral"
            );
            return ClassifyOutcome::Failed;
        }

        let labels: Vec<ClassifiedLabel> = match response.json().await {
            Ok(l) => l,
            Err(e) => {
                tracing::warn!(error = %e, "sentiment response parse error; scoring as neutral");
                return ClassifyOutcome::Failed;
            }
        };

        match labels.first() {
            Some(top) if top.label.eq_ignore_ascii_case("positive") => ClassifyOutcome::Positive,
            Some(_) => ClassifyOutcome::Negative,
            None => {
                tracing::warn!("sentiment endpoint returned no labels; scoring as neutral");
                ClassifyOutcome::Failed
            }
        }
    }
}
