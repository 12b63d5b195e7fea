//! Integration tests for `RemoteClassifier` using wiremock HTTP mocks.

use sovscan_sentiment::{ClassifyOutcome, RemoteClassifier, SentimentClassifier};
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn positive_label_maps_to_positive() {
    let server = MockServer::start().await;

    let body = serde_json::json!([
        { "label": "POSITIVE", "score": 0.998 },
        { "label": "NEGATIVE", "score": 0.002 }
    ]);

    Mock::given(method("POST"))
        .and(path("/classify"))
        .and(body_partial_json(
            serde_json::json!({ "inputs": "great fan" }),
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&server.uri());
    assert_eq!(
        classifier.classify("great fan").await,
        ClassifyOutcome::Positive
    );
}

#[tokio::test]
async fn negative_label_maps_to_negative() {
    let server = MockServer::start().await;

    let body = serde_json::json!([{ "label": "NEGATIVE", "score": 0.91 }]);

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&server.uri());
    assert_eq!(
        classifier.classify("terrible fan").await,
        ClassifyOutcome::Negative
    );
}

#[tokio::test]
async fn server_error_fails_neutral() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&server.uri());
    assert_eq!(
        classifier.classify("any text").await,
        ClassifyOutcome::Failed
    );
}

#[tokio::test]
async fn malformed_body_fails_neutral() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&server.uri());
    assert_eq!(
        classifier.classify("any text").await,
        ClassifyOutcome::Failed
    );
}

#[tokio::test]
async fn empty_label_list_fails_neutral() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/classify"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let classifier = RemoteClassifier::new(&server.uri());
    assert_eq!(
        classifier.classify("any text").await,
        ClassifyOutcome::Failed
    );
}
