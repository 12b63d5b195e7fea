//! Brand-mention detection and scoring for one content fragment.

use sovscan_core::BrandRoster;
use sovscan_sentiment::SentimentClassifier;

use crate::types::{Fragment, Mention};

/// Score one fragment against the roster.
///
/// The haystack is lowercased once; each brand whose name appears as a
/// substring yields an independent [`Mention`], in roster order (target
/// first). The classifier sees the original-case display text. This
/// function never errors: a failed classification produces a zero-score
/// mention rather than a gap.
pub async fn score_fragment<C: SentimentClassifier>(
    fragment: &Fragment<'_>,
    roster: &BrandRoster,
    classifier: &C,
) -> Vec<Mention> {
    let haystack = fragment.haystack.to_lowercase();
    let mut mentions = Vec::new();

    for brand in roster.names() {
        if !haystack.contains(brand) {
            continue;
        }
        let outcome = classifier.classify(fragment.display).await;
        let weight = i64::try_from(fragment.weight()).unwrap_or(i64::MAX);
        mentions.push(Mention {
            brand: brand.to_string(),
            source: fragment.source,
            text: fragment.display.to_string(),
            sentiment: outcome.into(),
            engagement: fragment.engagement,
            wess_score: outcome.sign() * weight,
        });
    }

    mentions
}
