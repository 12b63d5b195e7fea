use std::path::PathBuf;

#[derive(Clone)]
pub struct AppConfig {
    pub youtube_api_key: String,
    pub brands_path: PathBuf,
    pub query: String,
    pub max_videos: u32,
    pub max_comments: u32,
    pub request_timeout_secs: u64,
    pub sentiment_url: Option<String>,
    pub raw_out: PathBuf,
    pub summary_out: PathBuf,
    pub log_level: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("youtube_api_key", &"[redacted]")
            .field("brands_path", &self.brands_path)
            .field("query", &self.query)
            .field("max_videos", &self.max_videos)
            .field("max_comments", &self.max_comments)
            .field("request_timeout_secs", &self.request_timeout_secs)
            .field("sentiment_url", &self.sentiment_url)
            .field("raw_out", &self.raw_out)
            .field("summary_out", &self.summary_out)
            .field("log_level", &self.log_level)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_redacts_api_key() {
        let cfg = AppConfig {
            youtube_api_key: "secret-key".to_string(),
            brands_path: PathBuf::from("./config/brands.yaml"),
            query: "smart fan".to_string(),
            max_videos: 20,
            max_comments: 50,
            request_timeout_secs: 30,
            sentiment_url: None,
            raw_out: PathBuf::from("raw.csv"),
            summary_out: PathBuf::from("summary.csv"),
            log_level: "info".to_string(),
        };
        let rendered = format!("{cfg:?}");
        assert!(!rendered.contains("secret-key"));
        assert!(rendered.contains("[redacted]"));
    }
}
