//! HTTP-level tests for the directory and Gemini clients against a mock
//! server: every directory outcome degrades to the right context sentence,
//! and the Gemini client round-trips the generateContent wire format.

use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;

use curechat_chat::directory::{
    DirectoryService, HttpDirectory, EMPTY_DIRECTORY_CONTEXT, FETCH_FAILED_CONTEXT,
    UNAVAILABLE_CONTEXT,
};
use curechat_chat::gemini::{GeminiClient, InferenceService};

// ---------------------------------------------------------------
// Directory fetcher
// ---------------------------------------------------------------

#[tokio::test]
async fn directory_formats_doctor_list() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(GET).path("/api/internal/doctors");
        then.status(200).json_body(json!([
            {"name": "Asha Rao", "specialization": "Cardiology", "availability": "Mon-Fri 9-5"},
            {"name": "Liam Chen", "specialization": "General Physician", "availability": "Sat 10-2"}
        ]));
    });

    let client = HttpDirectory::new(server.url("/api/internal/doctors"));
    let context = client.fetch_directory().await;

    mock.assert();
    assert!(context.starts_with("Here is the current list of available doctors"));
    assert!(context.contains("- Dr. Asha Rao (Cardiology): Available Mon-Fri 9-5"));
    assert!(context.contains("- Dr. Liam Chen (General Physician): Available Sat 10-2"));
}

#[tokio::test]
async fn directory_empty_list_degrades_to_placeholder() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/internal/doctors");
        then.status(200).json_body(json!([]));
    });

    let client = HttpDirectory::new(server.url("/api/internal/doctors"));
    assert_eq!(client.fetch_directory().await, EMPTY_DIRECTORY_CONTEXT);
}

#[tokio::test]
async fn directory_server_error_degrades() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/internal/doctors");
        then.status(503);
    });

    let client = HttpDirectory::new(server.url("/api/internal/doctors"));
    assert_eq!(client.fetch_directory().await, FETCH_FAILED_CONTEXT);
}

#[tokio::test]
async fn directory_undecodable_body_degrades() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/internal/doctors");
        then.status(200).body("this is not a doctor list");
    });

    let client = HttpDirectory::new(server.url("/api/internal/doctors"));
    assert_eq!(client.fetch_directory().await, UNAVAILABLE_CONTEXT);
}

#[tokio::test]
async fn directory_timeout_degrades() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(GET).path("/api/internal/doctors");
        then.status(200)
            .json_body(json!([]))
            .delay(Duration::from_millis(500));
    });

    let client = HttpDirectory::with_timeout(
        server.url("/api/internal/doctors"),
        Duration::from_millis(50),
    );
    assert_eq!(client.fetch_directory().await, UNAVAILABLE_CONTEXT);
}

#[tokio::test]
async fn directory_connection_refused_degrades() {
    // Nothing listens on port 1.
    let client = HttpDirectory::new("http://127.0.0.1:1/api/internal/doctors");
    assert_eq!(client.fetch_directory().await, UNAVAILABLE_CONTEXT);
}

// ---------------------------------------------------------------
// Gemini client
// ---------------------------------------------------------------

#[tokio::test]
async fn gemini_sends_prompt_and_extracts_text() {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path("/models/gemini-flash-latest:generateContent")
            .query_param("key", "test-key")
            .json_body(json!({
                "contents": [
                    {"role": "user", "parts": [{"text": "analyze this"}]}
                ]
            }));
        then.status(200).json_body(json!({
            "candidates": [
                {"content": {"parts": [{"text": "{\"specialty\":\"Cardiology\",\"reply\":\"ok\",\"isEmergency\":false}"}]}}
            ]
        }));
    });

    let client =
        GeminiClient::new("test-key", "gemini-flash-latest").with_base_url(server.url("/models"));
    let text = client.infer("analyze this").await.unwrap();

    mock.assert();
    assert_eq!(
        text,
        "{\"specialty\":\"Cardiology\",\"reply\":\"ok\",\"isEmergency\":false}"
    );
}

#[tokio::test]
async fn gemini_api_error_propagates_with_message() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/models/gemini-flash-latest:generateContent");
        then.status(429)
            .json_body(json!({"error": {"code": 429, "message": "Quota exceeded"}}));
    });

    let client =
        GeminiClient::new("test-key", "gemini-flash-latest").with_base_url(server.url("/models"));
    let err = client.infer("hello").await.unwrap_err();

    let text = err.to_string();
    assert!(text.contains("429"), "got: {}", text);
    assert!(text.contains("Quota exceeded"), "got: {}", text);
}

#[tokio::test]
async fn gemini_empty_candidates_is_an_error() {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST)
            .path("/models/gemini-flash-latest:generateContent");
        then.status(200).json_body(json!({"candidates": []}));
    });

    let client =
        GeminiClient::new("test-key", "gemini-flash-latest").with_base_url(server.url("/models"));
    let err = client.infer("hello").await.unwrap_err();
    assert!(err.to_string().contains("no candidates"));
}
