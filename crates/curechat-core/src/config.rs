//! Configuration from environment variables.

use serde::{Deserialize, Serialize};
use tracing::warn;

/// Default HTTP server port.
pub const DEFAULT_PORT: u16 = 5002;

/// Default Gemini model used when GEMINI_MODEL is not set.
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";

/// Default internal doctors endpoint used when DIRECTORY_URL is not set.
pub const DEFAULT_DIRECTORY_URL: &str = "http://localhost:5000/api/internal/doctors";

/// Top-level relay configuration, read once at startup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RelayConfig {
    /// HTTP server port.
    pub port: u16,
    /// Gemini API key. The server starts without one; inference calls
    /// fail per-request until it is set.
    pub gemini_api_key: Option<String>,
    /// Gemini model id.
    pub gemini_model: String,
    /// Doctor directory endpoint.
    pub directory_url: String,
}

impl RelayConfig {
    /// Create configuration from environment and defaults.
    pub fn from_env() -> Self {
        let port = std::env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        let gemini_api_key = std::env::var("GEMINI_API_KEY").ok();
        if gemini_api_key.is_none() {
            warn!("GEMINI_API_KEY not set - inference calls will fail");
        }

        let gemini_model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_GEMINI_MODEL.to_string());

        let directory_url =
            std::env::var("DIRECTORY_URL").unwrap_or_else(|_| DEFAULT_DIRECTORY_URL.to_string());

        Self {
            port,
            gemini_api_key,
            gemini_model,
            directory_url,
        }
    }
}
