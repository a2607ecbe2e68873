//! Integration tests for `GroundedSearchClient::find_nearby_places`.
//!
//! Uses `wiremock` to stand up a local HTTP server per test so no real
//! network traffic is made.

use aroundin_api_client::{ApiError, ClientConfig, GroundedSearchClient};
use aroundin_geo::Coordinate;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const NAIROBI_CBD: Coordinate = Coordinate::new(-1.2841, 36.8155);

fn test_client(server: &MockServer) -> GroundedSearchClient {
    let config = ClientConfig::default()
        .with_base_url(format!("{}/v1beta", server.uri()))
        .with_api_key("test-key")
        .with_timeout(Duration::from_secs(5));
    GroundedSearchClient::with_config(config).expect("failed to build test client")
}

fn grounded_response() -> serde_json::Value {
    json!({
        "candidates": [{
            "content": {"role": "model", "parts": [{"text": "QuickFix on Moi Avenue repairs screens."}]},
            "groundingMetadata": {
                "groundingChunks": [
                    {"maps": {"uri": "https://maps.google.com/?cid=42", "title": "QuickFix Phone Repairs"}}
                ]
            }
        }]
    })
}

#[tokio::test]
async fn find_nearby_places_returns_text_and_sources() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-2.5-flash:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(grounded_response()))
        .expect(1)
        .mount(&server)
        .await;

    let answer = test_client(&server)
        .find_nearby_places("phone repair", NAIROBI_CBD)
        .await
        .expect("expected a grounded answer");

    assert_eq!(answer.text, "QuickFix on Moi Avenue repairs screens.");
    assert_eq!(answer.sources.len(), 1);
    assert_eq!(answer.sources[0].title, "QuickFix Phone Repairs");
    assert_eq!(answer.sources[0].uri, "https://maps.google.com/?cid=42");
}

#[tokio::test]
async fn find_nearby_places_sends_query_and_location() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "contents": [{"parts": [{"text": "phone repair"}]}],
            "tools": [{"googleMaps": {}}],
            "toolConfig": {"retrievalConfig": {"latLng": {"latitude": -1.2841, "longitude": 36.8155}}}
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(grounded_response()))
        .expect(1)
        .mount(&server)
        .await;

    let result = test_client(&server)
        .find_nearby_places("phone repair", NAIROBI_CBD)
        .await;

    assert!(result.is_ok(), "expected Ok, got: {result:?}");
}

#[tokio::test]
async fn find_nearby_places_surfaces_api_errors() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(429).set_body_string("quota exhausted"))
        .expect(1)
        .mount(&server)
        .await;

    let err = test_client(&server)
        .find_nearby_places("pizza", NAIROBI_CBD)
        .await
        .unwrap_err();

    assert!(err.is_quota_exceeded(), "unexpected error: {err:?}");
    assert!(err.to_string().contains("quota exhausted"));
}

#[tokio::test]
async fn find_nearby_places_rejects_malformed_body() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&server)
        .await;

    let err = test_client(&server)
        .find_nearby_places("pizza", NAIROBI_CBD)
        .await
        .unwrap_err();

    assert!(matches!(err, ApiError::Json(_)), "unexpected error: {err:?}");
}

#[tokio::test]
async fn find_nearby_places_without_key_sends_nothing() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(grounded_response()))
        .expect(0)
        .mount(&server)
        .await;

    let config = ClientConfig::default().with_base_url(server.uri());
    let client = GroundedSearchClient::with_config(config).unwrap();

    let err = client.find_nearby_places("pizza", NAIROBI_CBD).await.unwrap_err();

    assert!(matches!(err, ApiError::MissingApiKey("API_KEY")));
}
