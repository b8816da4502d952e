use httpmock::Method::POST;
use httpmock::MockServer;
use llm::{GeminiClient, GenerationRequest, LLMClient, LLMError};
use serde_json::json;

const PATH: &str = "/v1beta/models/gemini-2.5-flash:generateContent";

#[tokio::test]
async fn returns_candidate_text() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PATH)
                .header("x-goog-api-key", "secret")
                .body_contains("Keep porch lights on");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "candidates": [{
                        "content": {"role": "model", "parts": [{"text": "Lock your doors."}]}
                    }]
                }));
        })
        .await;

    let client = GeminiClient::new(server.base_url(), "secret");
    let text = client
        .generate(GenerationRequest::new("gemini-2.5-flash", "Keep porch lights on"))
        .await
        .unwrap();
    mock.assert_async().await;
    assert_eq!(text, "Lock your doors.");
}

#[tokio::test]
async fn sends_schema_for_json_requests() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(POST)
                .path(PATH)
                .body_contains("\"responseMimeType\":\"application/json\"")
                .body_contains("\"responseSchema\"");
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({
                    "candidates": [{"content": {"parts": [{"text": "{\"ok\":true}"}]}}]
                }));
        })
        .await;

    let client = GeminiClient::new(server.base_url(), "k");
    let req = GenerationRequest::new("gemini-2.5-flash", "classify")
        .json_schema(json!({"type": "OBJECT"}));
    let text = client.generate(req).await.unwrap();
    mock.assert_async().await;
    assert_eq!(text, "{\"ok\":true}");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(503).body("overloaded");
        })
        .await;

    let client = GeminiClient::new(server.base_url(), "k");
    let err = client
        .generate(GenerationRequest::new("gemini-2.5-flash", "hi"))
        .await
        .unwrap_err();
    match err {
        LLMError::Status { status, body } => {
            assert_eq!(status, 503);
            assert_eq!(body, "overloaded");
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[tokio::test]
async fn empty_candidates_are_invalid() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(POST).path(PATH);
            then.status(200)
                .header("content-type", "application/json")
                .json_body(json!({"candidates": []}));
        })
        .await;

    let client = GeminiClient::new(server.base_url(), "k");
    let err = client
        .generate(GenerationRequest::new("gemini-2.5-flash", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, LLMError::InvalidResponse));
}

#[tokio::test]
async fn unreachable_host_is_a_network_error() {
    let client = GeminiClient::new("http://127.0.0.1:9", "k");
    let err = client
        .generate(GenerationRequest::new("gemini-2.5-flash", "hi"))
        .await
        .unwrap_err();
    assert!(matches!(err, LLMError::Network(_)));
}
