//! SoV pipeline orchestration.

use sovscan_core::BrandRoster;
use sovscan_sentiment::SentimentClassifier;
use sovscan_youtube::YoutubeClient;

use crate::mention::score_fragment;
use crate::report::{aggregate, SovAnalysis};
use crate::types::{Fragment, MentionSource};
use crate::AnalysisError;

/// Run the full SoV analysis for one query.
///
/// 1. Search for up to `max_videos` videos matching the query.
/// 2. Per video, score the title + description against the roster
///    (engagement = view count, classifier input = title).
/// 3. Fetch up to `max_comments` top comments and score each independently
///    (engagement = like count). A brand matched only in a title gets
///    exactly one mention; comments never re-score the title.
/// 4. Aggregate all mentions into the ranked report.
///
/// Returns `Ok(None)` when no brand was mentioned anywhere — the explicit
/// "ran, found nothing" signal.
///
/// # Errors
///
/// Returns [`AnalysisError::Youtube`] only for the search call. Per-video
/// comment fetch failures (including disabled comments) are logged and
/// treated as "no comments".
pub async fn run_sov_analysis<C: SentimentClassifier>(
    client: &YoutubeClient,
    classifier: &C,
    roster: &BrandRoster,
    query: &str,
    max_videos: u32,
    max_comments: u32,
) -> Result<Option<SovAnalysis>, AnalysisError> {
    tracing::info!(query, max_videos, "searching videos");
    let videos = client.search_videos(query, max_videos).await?;
    tracing::info!(videos = videos.len(), "scanning videos for brand mentions");

    let mut mentions = Vec::new();

    for (i, video) in videos.iter().enumerate() {
        tracing::info!(
            video = %video.id,
            title = %video.title,
            position = i + 1,
            total = videos.len(),
            "processing video"
        );

        let haystack = format!("{} {}", video.title, video.description);
        let fragment = Fragment {
            haystack: &haystack,
            display: &video.title,
            source: MentionSource::Video,
            engagement: video.view_count,
        };
        mentions.extend(score_fragment(&fragment, roster, classifier).await);

        let comments = match client.fetch_comments(&video.id, max_comments).await {
            Ok(comments) => comments,
            Err(e) => {
                tracing::warn!(
                    video = %video.id,
                    error = %e,
                    "comment fetch failed; treating as no comments"
                );
                Vec::new()
            }
        };

        for comment in &comments {
            let fragment = Fragment {
                haystack: &comment.text,
                display: &comment.text,
                source: MentionSource::Comment,
                engagement: comment.like_count,
            };
            mentions.extend(score_fragment(&fragment, roster, classifier).await);
        }
    }

    tracing::info!(mentions = mentions.len(), "scan complete");
    Ok(aggregate(mentions))
}
