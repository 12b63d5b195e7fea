//! Integration tests for `YoutubeClient` using wiremock HTTP mocks.

use sovscan_youtube::YoutubeClient;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> YoutubeClient {
    YoutubeClient::with_base_url("test-key", 30, base_url)
        .expect("client construction should not fail")
}

#[tokio::test]
async fn search_videos_joins_search_and_statistics() {
    let server = MockServer::start().await;

    let search_body = serde_json::json!({
        "items": [
            { "id": { "kind": "youtube#video", "videoId": "vid-1" } },
            { "id": { "kind": "youtube#video", "videoId": "vid-2" } },
            { "id": { "kind": "youtube#channel", "channelId": "chan-1" } }
        ]
    });

    let videos_body = serde_json::json!({
        "items": [
            {
                "id": "vid-1",
                "snippet": {
                    "title": "Atomberg smart fan review",
                    "description": "BLDC fans compared"
                },
                "statistics": { "viewCount": "1000" }
            },
            {
                "id": "vid-2",
                "snippet": { "title": "Ceiling fan teardown", "description": "" }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "smart fan"))
        .and(query_param("type", "video"))
        .and(query_param("maxResults", "20"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&search_body))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path("/videos"))
        .and(query_param("id", "vid-1,vid-2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&videos_body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let videos = client
        .search_videos("smart fan", 20)
        .await
        .expect("should parse videos");

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].id, "vid-1");
    assert_eq!(videos[0].title, "Atomberg smart fan review");
    assert_eq!(videos[0].view_count, 1000);
    // Hidden statistics default to zero rather than failing the whole batch.
    assert_eq!(videos[1].view_count, 0);
}

#[tokio::test]
async fn search_videos_empty_result_skips_videos_call() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "items": [] })))
        .mount(&server)
        .await;

    // No /videos mock mounted: a second request would fail the test via a
    // connection-level 404 surfacing as an error.
    let client = test_client(&server.uri());
    let videos = client
        .search_videos("smart fan", 20)
        .await
        .expect("empty search should succeed");

    assert!(videos.is_empty());
}

#[tokio::test]
async fn fetch_comments_returns_parsed_records() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "items": [
            {
                "snippet": {
                    "topLevelComment": {
                        "snippet": {
                            "textDisplay": "I hate havells fans",
                            "likeCount": 0
                        }
                    }
                }
            },
            {
                "snippet": {
                    "topLevelComment": {
                        "snippet": {
                            "textDisplay": "atomberg is so quiet",
                            "likeCount": 12
                        }
                    }
                }
            }
        ]
    });

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .and(query_param("videoId", "vid-1"))
        .and(query_param("order", "relevance"))
        .and(query_param("maxResults", "50"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let comments = client
        .fetch_comments("vid-1", 50)
        .await
        .expect("should parse comments");

    assert_eq!(comments.len(), 2);
    assert_eq!(comments[0].text, "I hate havells fans");
    assert_eq!(comments[0].like_count, 0);
    assert_eq!(comments[1].like_count, 12);
}

#[tokio::test]
async fn comments_disabled_surfaces_api_error() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": {
            "code": 403,
            "message": "The video identified by the videoId parameter has disabled comments."
        }
    });

    Mock::given(method("GET"))
        .and(path("/commentThreads"))
        .respond_with(ResponseTemplate::new(403).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let result = client.fetch_comments("vid-1", 50).await;

    assert!(result.is_err(), "disabled comments should be an error");
}

#[tokio::test]
async fn api_error_envelope_returns_err() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "error": { "code": 400, "message": "API key not valid" }
    });

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let err = client.search_videos("smart fan", 20).await.unwrap_err();
    assert!(
        err.to_string().contains("API key not valid"),
        "expected API error message, got: {err}"
    );
}
