/// Maximum number of characters fed to a classifier. Matches the input
/// window of the sentence-level models the remote endpoint serves.
pub const MAX_INPUT_CHARS: usize = 512;

/// Outcome of one classification call.
///
/// `Failed` is the recovered form of any classifier-internal error; its
/// sign is 0 so a failed classification contributes nothing to a score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClassifyOutcome {
    Positive,
    Negative,
    Failed,
}

impl ClassifyOutcome {
    /// Score sign: +1, -1, or 0 for a failed classification.
    #[must_use]
    pub fn sign(self) -> i64 {
        match self {
            ClassifyOutcome::Positive => 1,
            ClassifyOutcome::Negative => -1,
            ClassifyOutcome::Failed => 0,
        }
    }
}

/// Truncate `text` to at most [`MAX_INPUT_CHARS`] characters, respecting
/// char boundaries.
#[must_use]
pub fn truncate_for_model(text: &str) -> &str {
    match text.char_indices().nth(MAX_INPUT_CHARS) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
