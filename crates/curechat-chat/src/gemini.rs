//! Gemini inference client.
//!
//! Calls the `generateContent` endpoint and returns the model's raw text.
//! Failures are not absorbed here; the request handler converts them into
//! a 500 response.

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use curechat_core::{Error, Result};

const BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta/models";

/// Text-in, text-out inference seam.
#[async_trait]
pub trait InferenceService: Send + Sync {
    /// Run the prompt through the model and return its raw text output.
    async fn infer(&self, prompt: &str) -> Result<String>;
}

/// Client for the Gemini `generateContent` API.
pub struct GeminiClient {
    client: Client,
    api_key: String,
    model: String,
    base_url: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            base_url: BASE_URL.to_string(),
        }
    }

    /// Point the client at a different endpoint root (tests use a mock server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[async_trait]
impl InferenceService for GeminiClient {
    async fn infer(&self, prompt: &str) -> Result<String> {
        let url = format!(
            "{}/{}:generateContent?key={}",
            self.base_url, self.model, self.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content {
                role: "user".to_string(),
                parts: vec![Part {
                    text: prompt.to_string(),
                }],
            }],
        };

        debug!("Calling Gemini model {}", self.model);

        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Http(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(Error::Inference(format!(
                "Gemini API error {}: {}",
                status.as_u16(),
                api_error_message(&body)
            )));
        }

        let payload: Value = response
            .json()
            .await
            .map_err(|e| Error::Inference(e.to_string()))?;

        extract_text(&payload)
            .ok_or_else(|| Error::Inference("Gemini returned no candidates".to_string()))
    }
}

#[derive(Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Serialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

#[derive(Serialize)]
struct Part {
    text: String,
}

/// Concatenate the text of every candidate part.
fn extract_text(root: &Value) -> Option<String> {
    let candidates = root.get("candidates")?.as_array()?;

    let mut collected = String::new();
    for candidate in candidates {
        if let Some(parts) = candidate
            .get("content")
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.as_array())
        {
            for part in parts {
                if let Some(text) = part.get("text").and_then(|t| t.as_str()) {
                    collected.push_str(text);
                }
            }
        }
    }

    if collected.is_empty() {
        None
    } else {
        Some(collected)
    }
}

/// Pull `error.message` out of an API error body, falling back to the raw body.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|json| {
            json.get("error")
                .and_then(|err| err.get("message"))
                .and_then(|msg| msg.as_str())
                .map(|msg| msg.to_string())
        })
        .unwrap_or_else(|| body.to_string())
}
