//! Per-brand aggregation of scored mentions.

use crate::types::Mention;

/// One row of the ranked SoV report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BrandScore {
    pub brand: String,
    pub wess_score: i64,
}

/// The full analysis result: the flat mention table plus the ranked
/// per-brand totals.
#[derive(Debug, Clone)]
pub struct SovAnalysis {
    pub mentions: Vec<Mention>,
    pub report: Vec<BrandScore>,
}

/// Sum `wess_score` per brand and rank descending.
///
/// Returns `None` for an empty mention table — "ran, found nothing" is an
/// explicit signal, not an empty report. Ties keep first-encountered brand
/// order (the sort is stable), and totals are independent of mention order.
#[must_use]
pub fn aggregate(mentions: Vec<Mention>) -> Option<SovAnalysis> {
    if mentions.is_empty() {
        return None;
    }

    let mut totals: Vec<BrandScore> = Vec::new();
    for mention in &mentions {
        match totals.iter_mut().find(|t| t.brand == mention.brand) {
            Some(total) => total.wess_score += mention.wess_score,
            None => totals.push(BrandScore {
                brand: mention.brand.clone(),
                wess_score: mention.wess_score,
            }),
        }
    }

    totals.sort_by_key(|t| std::cmp::Reverse(t.wess_score));

    Some(SovAnalysis {
        mentions,
        report: totals,
    })
}
