//! HTTP client for the `YouTube` Data API v3.

use std::time::Duration;

use reqwest::{Client, Url};

use crate::error::YoutubeError;
use crate::types::{
    CommentRecord, CommentThreadsResponse, SearchListResponse, VideoListResponse, VideoRecord,
};

const DEFAULT_BASE_URL: &str = "https://www.googleapis.com/youtube/v3/";

/// Client for the `YouTube` Data API v3.
///
/// Manages the HTTP client, API key, and base URL. Use [`YoutubeClient::new`]
/// for production or [`YoutubeClient::with_base_url`] to point at a mock
/// server in tests.
pub struct YoutubeClient {
    client: Client,
    api_key: String,
    base_url: Url,
}

impl YoutubeClient {
    /// Creates a new client pointed at the production `YouTube` API.
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, YoutubeError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom base URL (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`YoutubeError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed, or [`YoutubeError::Api`] if `base_url` is not
    /// a valid URL.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, YoutubeError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("sovscan/0.1 (share-of-voice)")
            .build()?;

        // Normalise: the base must end with a slash so resource names join
        // onto the path instead of replacing its last segment.
        let normalised = format!("{}/", base_url.trim_end_matches('/'));
        let base_url = Url::parse(&normalised)
            .map_err(|e| YoutubeError::Api(format!("invalid base URL '{base_url}': {e}")))?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url,
        })
    }

    /// Searches for videos matching `query` and returns metadata plus view
    /// counts.
    ///
    /// Two calls: `search` (ids only) followed by one batched `videos` call
    /// for snippets and statistics. An empty search result short-circuits
    /// without the second request.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] if the API returns an error envelope.
    /// - [`YoutubeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`YoutubeError::Deserialize`] if a response does not match the
    ///   expected shape.
    pub async fn search_videos(
        &self,
        query: &str,
        max_results: u32,
    ) -> Result<Vec<VideoRecord>, YoutubeError> {
        let max = max_results.to_string();
        let url = self.build_url(
            "search",
            &[
                ("part", "snippet"),
                ("q", query),
                ("type", "video"),
                ("maxResults", &max),
            ],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: SearchListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("search(q={query})"),
                source: e,
            })?;

        let video_ids: Vec<String> = envelope
            .items
            .into_iter()
            .filter_map(|item| item.id.video_id)
            .collect();

        if video_ids.is_empty() {
            return Ok(Vec::new());
        }

        self.list_videos(&video_ids).await
    }

    /// Fetches snippets and statistics for the given video ids in one call.
    async fn list_videos(&self, video_ids: &[String]) -> Result<Vec<VideoRecord>, YoutubeError> {
        let ids = video_ids.join(",");
        let url = self.build_url("videos", &[("part", "snippet,statistics"), ("id", &ids)])?;
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: VideoListResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("videos(id={ids})"),
                source: e,
            })?;

        Ok(envelope
            .items
            .into_iter()
            .map(crate::types::VideoItem::into_record)
            .collect())
    }

    /// Fetches top-level comments for a video, ordered by relevance.
    ///
    /// # Errors
    ///
    /// - [`YoutubeError::Api`] if the API returns an error envelope (this
    ///   includes videos with comments disabled).
    /// - [`YoutubeError::Http`] on network failure or non-2xx HTTP status.
    /// - [`YoutubeError::Deserialize`] if the response does not match the
    ///   expected shape.
    pub async fn fetch_comments(
        &self,
        video_id: &str,
        max_results: u32,
    ) -> Result<Vec<CommentRecord>, YoutubeError> {
        let max = max_results.to_string();
        let url = self.build_url(
            "commentThreads",
            &[
                ("part", "snippet"),
                ("videoId", video_id),
                ("maxResults", &max),
                ("order", "relevance"),
            ],
        )?;
        let body = self.request_json(&url).await?;
        Self::check_api_error(&body)?;

        let envelope: CommentThreadsResponse =
            serde_json::from_value(body).map_err(|e| YoutubeError::Deserialize {
                context: format!("commentThreads(videoId={video_id})"),
                source: e,
            })?;

        Ok(envelope
            .items
            .into_iter()
            .map(crate::types::CommentThread::into_record)
            .collect())
    }

    /// Builds the full request URL for a resource with percent-encoded query
    /// parameters, always appending the API key.
    fn build_url(&self, resource: &str, params: &[(&str, &str)]) -> Result<Url, YoutubeError> {
        let mut url = self
            .base_url
            .join(resource)
            .map_err(|e| YoutubeError::Api(format!("invalid resource '{resource}': {e}")))?;
        {
            let mut pairs = url.query_pairs_mut();
            for (k, v) in params {
                pairs.append_pair(k, v);
            }
            pairs.append_pair("key", &self.api_key);
        }
        Ok(url)
    }

    /// Sends a GET request, asserts a 2xx HTTP status, and parses the body
    /// as JSON.
    async fn request_json(&self, url: &Url) -> Result<serde_json::Value, YoutubeError> {
        let response = self.client.get(url.clone()).send().await?;
        let response = response.error_for_status()?;
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| YoutubeError::Deserialize {
            context: url.path().to_string(),
            source: e,
        })
    }

    /// Surfaces the `{"error": {"message": …}}` envelope as an error.
    fn check_api_error(body: &serde_json::Value) -> Result<(), YoutubeError> {
        if let Some(error) = body.get("error") {
            let msg = error
                .get("message")
                .and_then(serde_json::Value::as_str)
                .unwrap_or("unknown error")
                .to_string();
            return Err(YoutubeError::Api(msg));
        }
        Ok(())
    }
}
