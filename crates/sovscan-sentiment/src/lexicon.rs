//! Lexicon-backed binary classifier for consumer-appliance sentiment.

use crate::types::{truncate_for_model, ClassifyOutcome};
use crate::SentimentClassifier;

/// Domain-specific word weights.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative.
const LEXICON: &[(&str, f32)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("best", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("awesome", 0.5),
    ("amazing", 0.5),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("quality", 0.3),
    ("quiet", 0.4),
    ("silent", 0.4),
    ("smooth", 0.3),
    ("efficient", 0.4),
    ("reliable", 0.4),
    ("durable", 0.3),
    ("worth", 0.3),
    ("impressive", 0.4),
    ("perfect", 0.5),
    // Negative signals
    ("bad", -0.4),
    ("worst", -0.6),
    ("terrible", -0.6),
    ("hate", -0.6),
    ("noisy", -0.5),
    ("loud", -0.3),
    ("broke", -0.5),
    ("broken", -0.5),
    ("useless", -0.6),
    ("waste", -0.5),
    ("slow", -0.3),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("faulty", -0.6),
    ("defective", -0.6),
    ("refund", -0.4),
    ("returned", -0.3),
    ("stopped", -0.4),
    ("overpriced", -0.4),
    ("avoid", -0.5),
];

/// Binary classifier backed by the word lexicon.
///
/// A model forced into a binary choice always answers, so texts with no
/// lexicon hits classify as positive; only blank input is a `Failed`
/// classification.
#[derive(Debug, Default, Clone, Copy)]
pub struct LexiconClassifier;

impl LexiconClassifier {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl SentimentClassifier for LexiconClassifier {
    #[allow(clippy::unused_async)] // the trait seam is async for the remote adapter
    async fn classify(&self, text: &str) -> ClassifyOutcome {
        let text = truncate_for_model(text);
        if text.trim().is_empty() {
            return ClassifyOutcome::Failed;
        }

        let mut score = 0.0_f32;
        for word in text.split_whitespace() {
            let w = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            for &(lex_word, weight) in LEXICON {
                if w == lex_word {
                    score += weight;
                    break;
                }
            }
        }

        if score < 0.0 {
            ClassifyOutcome::Negative
        } else {
            ClassifyOutcome::Positive
        }
    }
}
