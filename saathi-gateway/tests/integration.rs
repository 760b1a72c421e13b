//! Integration tests for the gateway client using wiremock.

use futures::StreamExt;
use saathi_gateway::Gateway;
use saathi_types::{ChatBackend, ChatError, Language, StreamEvent, Turn};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn fever_turns() -> Vec<Turn> {
    vec![
        Turn::assistant("Hello! I'm SehatSaathi, your health companion. How can I help you today?"),
        Turn::user("I have a fever"),
    ]
}

fn sse_body(lines: &[&str]) -> String {
    let mut body = String::new();
    for line in lines {
        body.push_str(line);
        body.push('\n');
    }
    body
}

async fn collect(
    gateway: &Gateway,
    turns: &[Turn],
    language: Language,
) -> Result<Vec<StreamEvent>, ChatError> {
    let handle = gateway.stream_chat(turns, language).await?;
    Ok(handle.receiver.collect::<Vec<_>>().await)
}

#[tokio::test]
async fn sends_bearer_token_and_json_body() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/functions/v1/chat"))
        .and(header("authorization", "Bearer publishable-key"))
        .and(header("content-type", "application/json"))
        .and(body_json(serde_json::json!({
            "messages": [
                {"role": "assistant", "content": "Hello! I'm SehatSaathi, your health companion. How can I help you today?"},
                {"role": "user", "content": "I have a fever"},
            ],
            "language": "en",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sse_body(&["data: [DONE]"]), "text/event-stream"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = Gateway::new(mock_server.uri(), "publishable-key");
    let result = collect(&gateway, &fever_turns(), Language::En).await;
    assert!(result.is_ok(), "expected Ok, got: {:?}", result.err());
}

#[tokio::test]
async fn streams_deltas_until_sentinel() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/functions/v1/chat"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(
            sse_body(&[
                ": keep-alive",
                "",
                r#"data: {"choices":[{"delta":{"role":"assistant","content":""}}]}"#,
                r#"data: {"choices":[{"delta":{"content":"Please"}}]}"#,
                r#"data: {"choices":[{"delta":{"content":" rest."}}]}"#,
                r#"data: {"choices":[{"delta":{},"finish_reason":"stop"}]}"#,
                "data: [DONE]",
            ]),
            "text/event-stream",
        ))
        .mount(&mock_server)
        .await;

    let gateway = Gateway::new(mock_server.uri(), "key");
    let events = collect(&gateway, &fever_turns(), Language::En)
        .await
        .unwrap();

    let texts: Vec<&str> = events
        .iter()
        .filter_map(|e| match e {
            StreamEvent::Delta(t) => Some(t.as_str()),
            _ => None,
        })
        .collect();
    assert_eq!(texts, vec!["Please", " rest."]);
    assert!(matches!(events.last(), Some(StreamEvent::Done)));
}

#[tokio::test]
async fn status_429_maps_to_rate_limited() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/functions/v1/chat"))
        .respond_with(ResponseTemplate::new(429).set_body_json(serde_json::json!({
            "error": "Rate limits exceeded, please try again later."
        })))
        .mount(&mock_server)
        .await;

    let gateway = Gateway::new(mock_server.uri(), "key");
    let err = collect(&gateway, &fever_turns(), Language::En)
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::RateLimited));
}

#[tokio::test]
async fn status_402_maps_to_payment_required() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/functions/v1/chat"))
        .respond_with(ResponseTemplate::new(402).set_body_json(serde_json::json!({
            "error": "Payment required, please add funds to your workspace."
        })))
        .mount(&mock_server)
        .await;

    let gateway = Gateway::new(mock_server.uri(), "key");
    let err = collect(&gateway, &fever_turns(), Language::En)
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::PaymentRequired));
}

#[tokio::test]
async fn other_status_maps_to_endpoint_error_with_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/functions/v1/chat"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(serde_json::json!({"error": "AI gateway error"})),
        )
        .mount(&mock_server)
        .await;

    let gateway = Gateway::new(mock_server.uri(), "key");
    let err = collect(&gateway, &fever_turns(), Language::En)
        .await
        .unwrap_err();
    match err {
        ChatError::Endpoint { status, message } => {
            assert_eq!(status, 500);
            assert_eq!(message, "AI gateway error");
        }
        other => panic!("expected Endpoint, got {other:?}"),
    }
}

#[tokio::test]
async fn connection_failure_maps_to_transport() {
    // Nothing listens on this port.
    let gateway = Gateway::new("http://127.0.0.1:9", "key");
    let err = collect(&gateway, &fever_turns(), Language::En)
        .await
        .unwrap_err();
    assert!(matches!(err, ChatError::Transport(_)));
}

#[tokio::test]
async fn hindi_language_tag_reaches_the_wire() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/functions/v1/chat"))
        .and(body_json(serde_json::json!({
            "messages": [{"role": "user", "content": "बुखार"}],
            "language": "hi",
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(sse_body(&["data: [DONE]"]), "text/event-stream"),
        )
        .expect(1)
        .mount(&mock_server)
        .await;

    let gateway = Gateway::new(mock_server.uri(), "key");
    let turns = vec![Turn::user("बुखार")];
    let result = collect(&gateway, &turns, Language::Hi).await;
    assert!(result.is_ok(), "expected Ok, got: {:?}", result.err());
}
