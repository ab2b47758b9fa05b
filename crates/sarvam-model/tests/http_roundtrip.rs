use std::time::Duration;

use mufasa_model::{
    CompletionRequest, FailureKind, Message, ModelProvider, TranslationRequest,
};
use mufasa_sarvam_model::{SarvamConfigBuilder, SarvamProvider};
use serde_json::Value;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serves exactly one canned response and hands back the raw request.
async fn serve_once(
    status: &'static str,
    body: &'static str,
) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        let request = read_request(&mut stream).await;
        let response = format!(
            "HTTP/1.1 {status}\r\ncontent-type: application/json\r\n\
             content-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        stream.write_all(response.as_bytes()).await.unwrap();
        stream.shutdown().await.ok();
        request
    });
    (format!("http://{addr}"), handle)
}

async fn read_request(stream: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 4096];
    loop {
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n")
        else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_lowercase();
        let content_length = head
            .lines()
            .find_map(|line| line.strip_prefix("content-length:"))
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + content_length {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

fn request_body(raw: &str) -> Value {
    let (_, body) = raw.split_once("\r\n\r\n").unwrap();
    serde_json::from_str(body).unwrap()
}

fn provider_for(base_url: &str) -> SarvamProvider {
    let config = SarvamConfigBuilder::with_api_key("test-key")
        .with_base_url(base_url)
        .with_completion_timeout(Duration::from_millis(300))
        .with_translation_timeout(Duration::from_millis(300))
        .build();
    SarvamProvider::new(config)
}

#[tokio::test]
async fn test_completion_success() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"choices":[{"message":{"role":"assistant","content":"Namaste!"}}]}"#,
    )
    .await;
    let provider = provider_for(&base_url);
    let req = CompletionRequest::new(vec![
        Message::system("You are Mufasa."),
        Message::user("hi"),
        Message::assistant("Hello!"),
        Message::user("how are you?"),
    ]);

    let text = provider.complete_chat(&req).await.unwrap();
    assert_eq!(text, "Namaste!");

    let raw = server.await.unwrap();
    let head = raw.to_lowercase();
    assert!(head.starts_with("post /chat/completions "));
    assert!(head.contains("api-subscription-key: test-key"));

    let body = request_body(&raw);
    assert_eq!(body["model"], "sarvam-m");
    assert_eq!(body["wiki_grounding"], false);
    assert!(body.get("max_tokens").is_none());
    assert!(body.get("stop").is_none());
    let roles: Vec<_> = body["messages"]
        .as_array()
        .unwrap()
        .iter()
        .map(|m| m["role"].as_str().unwrap().to_owned())
        .collect();
    assert_eq!(roles, ["system", "user", "assistant", "user"]);
}

#[tokio::test]
async fn test_completion_unauthorized() {
    let (base_url, _server) =
        serve_once("401 Unauthorized", r#"{"error":{"message":"no"}}"#).await;
    let provider = provider_for(&base_url);
    let req = CompletionRequest::new(vec![Message::user("hi")]);

    let failure = provider.complete_chat(&req).await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::Unauthorized);
    assert!(failure.reason().starts_with("Invalid API key"));
}

#[tokio::test]
async fn test_completion_invalid_json() {
    let (base_url, _server) = serve_once("200 OK", "not json").await;
    let provider = provider_for(&base_url);
    let req = CompletionRequest::new(vec![Message::user("hi")]);

    let failure = provider.complete_chat(&req).await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::MalformedResponse);
    assert_eq!(failure.reason(), "Invalid JSON response from API");
}

#[tokio::test]
async fn test_completion_timeout_is_not_retried() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let mut accepted = 0;
        let mut held = Vec::new();
        while let Ok(Ok((stream, _))) =
            tokio::time::timeout(Duration::from_millis(800), listener.accept())
                .await
        {
            accepted += 1;
            held.push(stream);
        }
        accepted
    });

    let provider = provider_for(&format!("http://{addr}"));
    let req = CompletionRequest::new(vec![Message::user("hi")]);
    let failure = provider.complete_chat(&req).await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::Timeout);
    assert!(failure.reason().starts_with("Request timed out"));

    assert_eq!(server.await.unwrap(), 1);
}

/// Returns a base URL nothing listens on.
async fn refused_base_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}

#[tokio::test]
async fn test_completion_connection_refused() {
    let provider = provider_for(&refused_base_url().await);
    let req = CompletionRequest::new(vec![Message::user("hi")]);
    let failure = provider.complete_chat(&req).await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::Connection);
    assert!(failure.reason().starts_with("Connection error"));
}

#[tokio::test]
async fn test_translation() {
    let (base_url, server) =
        serve_once("200 OK", r#"{"translated_text":"வணக்கம்"}"#).await;
    let provider = provider_for(&base_url);
    let req = TranslationRequest::new("Hello").between("en-IN", "ta-IN");

    assert_eq!(provider.translate(&req).await.unwrap(), "வணக்கம்");

    let raw = server.await.unwrap();
    assert!(raw.to_lowercase().starts_with("post /translate "));
    let body = request_body(&raw);
    assert_eq!(body["input"], "Hello");
    assert_eq!(body["target_language_code"], "ta-IN");
    assert_eq!(body["model"], "mayura:v1");
    assert_eq!(body["enable_preprocessing"], true);
}

#[tokio::test]
async fn test_translation_failure() {
    let (base_url, _server) =
        serve_once("503 Service Unavailable", "{}").await;
    let provider = provider_for(&base_url);
    let req = TranslationRequest::new("Hello");

    let failure = provider.translate(&req).await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::Server);
    assert_eq!(failure.reason(), "Translation failed: HTTP 503");
}

#[tokio::test]
async fn test_detect_language() {
    let (base_url, server) = serve_once(
        "200 OK",
        r#"{"detected_language":"hi-IN","confidence":0.98}"#,
    )
    .await;
    let provider = provider_for(&base_url);

    let detected = provider.detect_language("नमस्ते").await.unwrap();
    assert_eq!(detected.language.as_deref(), Some("hi-IN"));
    assert_eq!(detected.confidence, Some(0.98));

    let raw = server.await.unwrap();
    assert!(raw.to_lowercase().starts_with("post /detect-language "));
    assert_eq!(request_body(&raw)["input"], "नमस्ते");
}

#[tokio::test]
async fn test_completion_closed_before_response() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = tokio::spawn(async move {
        let (mut stream, _) = listener.accept().await.unwrap();
        read_request(&mut stream).await;
        // Hang up without writing a status line.
        drop(stream);
    });

    let provider = provider_for(&format!("http://{addr}"));
    let req = CompletionRequest::new(vec![Message::user("hi")]);
    let failure = provider.complete_chat(&req).await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::Transport);
    assert!(failure.reason().starts_with("Request error: "));

    server.await.unwrap();
}

#[tokio::test]
async fn test_translation_connection_refused() {
    let provider = provider_for(&refused_base_url().await);
    let req = TranslationRequest::new("Hello");

    let failure = provider.translate(&req).await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::Connection);
    assert!(failure.reason().starts_with("Translation error: "));
}

#[tokio::test]
async fn test_translation_malformed_body() {
    let (base_url, _server) = serve_once("200 OK", "<html>oops</html>").await;
    let provider = provider_for(&base_url);
    let req = TranslationRequest::new("Hello");

    let failure = provider.translate(&req).await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::MalformedResponse);
    assert!(failure.reason().starts_with("Translation error: "));
}

#[tokio::test]
async fn test_detect_language_server_error() {
    let (base_url, _server) =
        serve_once("500 Internal Server Error", "{}").await;
    let provider = provider_for(&base_url);

    let failure = provider.detect_language("hello").await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::Server);
    assert_eq!(failure.reason(), "Language detection failed: HTTP 500");
}

#[tokio::test]
async fn test_detect_language_connection_refused() {
    let provider = provider_for(&refused_base_url().await);

    let failure = provider.detect_language("hello").await.unwrap_err();
    assert_eq!(failure.kind(), FailureKind::Connection);
    assert!(failure.reason().starts_with("Language detection error: "));
}
