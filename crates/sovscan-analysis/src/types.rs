use sovscan_sentiment::ClassifyOutcome;

/// Where a mention was observed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MentionSource {
    Video,
    Comment,
}

impl std::fmt::Display for MentionSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MentionSource::Video => write!(f, "Video"),
            MentionSource::Comment => write!(f, "Comment"),
        }
    }
}

/// Binary sentiment label stored on a mention. No neutral label exists: a
/// failed classification is recorded as Negative with a zero score, which
/// keeps the row in the raw export without moving any brand's total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
        }
    }
}

impl From<ClassifyOutcome> for SentimentLabel {
    fn from(outcome: ClassifyOutcome) -> Self {
        match outcome {
            ClassifyOutcome::Positive => SentimentLabel::Positive,
            ClassifyOutcome::Negative | ClassifyOutcome::Failed => SentimentLabel::Negative,
        }
    }
}

/// One (brand, source, text) observation with its engagement-weighted
/// sentiment score.
#[derive(Debug, Clone)]
pub struct Mention {
    pub brand: String,
    pub source: MentionSource,
    /// Original-case text the mention was observed in.
    pub text: String,
    pub sentiment: SentimentLabel,
    /// Raw engagement: view count for videos, like count for comments.
    pub engagement: u64,
    /// Sentiment sign × engagement weight.
    pub wess_score: i64,
}

/// One scorable piece of content.
///
/// `haystack` is searched for brand names (lowercased internally);
/// `display` is the original-case text passed to the classifier and stored
/// on the mention. For a video the haystack is title + description while
/// the display text is the title alone; for a comment both are the comment
/// text.
#[derive(Debug, Clone, Copy)]
pub struct Fragment<'a> {
    pub haystack: &'a str,
    pub display: &'a str,
    pub source: MentionSource,
    pub engagement: u64,
}

impl Fragment<'_> {
    /// Engagement weight for scoring. Comments add 1 so a zero-like comment
    /// never multiplies the sentiment away.
    #[must_use]
    pub fn weight(&self) -> u64 {
        match self.source {
            MentionSource::Video => self.engagement,
            MentionSource::Comment => self.engagement + 1,
        }
    }
}
