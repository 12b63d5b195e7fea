//! `YouTube` Data API v3 response types.
//!
//! The wire structs model only the fields the SoV pipeline reads; everything
//! else in the (large) API envelopes is ignored by serde. The public
//! [`VideoRecord`] and [`CommentRecord`] types are the validated boundary
//! the rest of the workspace consumes.

use serde::Deserialize;

/// Video metadata plus view count, assembled from `search` + `videos` calls.
#[derive(Debug, Clone)]
pub struct VideoRecord {
    pub id: String,
    pub title: String,
    pub description: String,
    /// Missing or unparsable statistics default to 0.
    pub view_count: u64,
}

/// One top-level comment on a video.
#[derive(Debug, Clone)]
pub struct CommentRecord {
    pub text: String,
    pub like_count: u64,
}

// ---------------------------------------------------------------------------
// search.list
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct SearchListResponse {
    #[serde(default)]
    pub items: Vec<SearchItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SearchItem {
    pub id: SearchItemId,
}

/// `search` returns a polymorphic id object; only video results carry
/// `videoId`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct SearchItemId {
    #[serde(default)]
    pub video_id: Option<String>,
}

// ---------------------------------------------------------------------------
// videos.list
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct VideoListResponse {
    #[serde(default)]
    pub items: Vec<VideoItem>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoItem {
    pub id: String,
    pub snippet: VideoSnippet,
    /// Absent when statistics are hidden for a video.
    #[serde(default)]
    pub statistics: Option<VideoStatistics>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct VideoSnippet {
    pub title: String,
    #[serde(default)]
    pub description: String,
}

/// The API serializes counts as JSON strings.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct VideoStatistics {
    #[serde(default)]
    pub view_count: Option<String>,
}

impl VideoItem {
    pub(crate) fn into_record(self) -> VideoRecord {
        let view_count = self
            .statistics
            .and_then(|s| s.view_count)
            .and_then(|raw| raw.parse::<u64>().ok())
            .unwrap_or(0);
        VideoRecord {
            id: self.id,
            title: self.snippet.title,
            description: self.snippet.description,
            view_count,
        }
    }
}

// ---------------------------------------------------------------------------
// commentThreads.list
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(crate) struct CommentThreadsResponse {
    #[serde(default)]
    pub items: Vec<CommentThread>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CommentThread {
    pub snippet: CommentThreadSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentThreadSnippet {
    pub top_level_comment: TopLevelComment,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TopLevelComment {
    pub snippet: CommentSnippet,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CommentSnippet {
    pub text_display: String,
    #[serde(default)]
    pub like_count: u64,
}

impl CommentThread {
    pub(crate) fn into_record(self) -> CommentRecord {
        let snippet = self.snippet.top_level_comment.snippet;
        CommentRecord {
            text: snippet.text_display,
            like_count: snippet.like_count,
        }
    }
}
