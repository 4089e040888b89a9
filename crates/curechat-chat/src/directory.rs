//! Doctor directory client.
//!
//! The directory lookup never fails outward: every error path degrades to a
//! fixed context sentence so the chat pipeline can always proceed.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

use crate::types::DoctorRecord;

/// Request timeout for the directory fetch.
const FETCH_TIMEOUT: Duration = Duration::from_secs(5);

/// Header sentence placed before the per-doctor lines.
const CONTEXT_HEADER: &str =
    "Here is the current list of available doctors and their specialties:\n";

/// Context used when the directory returns an empty list.
pub const EMPTY_DIRECTORY_CONTEXT: &str =
    "Currently, no specific doctor schedules are listed in the database.";

/// Context used when the directory answers with a non-success status.
pub const FETCH_FAILED_CONTEXT: &str =
    "Note: Could not retrieve live doctor schedules at this moment.";

/// Context used when the directory is unreachable, times out, or returns
/// a body that does not decode.
pub const UNAVAILABLE_CONTEXT: &str =
    "Note: Doctor schedule service is currently unavailable.";

/// Read-only view of the doctor directory.
#[async_trait]
pub trait DirectoryService: Send + Sync {
    /// Fetch the current doctors context string. Degrades instead of failing.
    async fn fetch_directory(&self) -> String;
}

/// HTTP client for the internal doctors endpoint.
pub struct HttpDirectory {
    client: Client,
    url: String,
    timeout: Duration,
}

impl HttpDirectory {
    pub fn new(url: impl Into<String>) -> Self {
        Self::with_timeout(url, FETCH_TIMEOUT)
    }

    /// Override the request timeout. Tests use this to exercise the timeout
    /// branch without waiting out the real five seconds.
    pub fn with_timeout(url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            client: Client::new(),
            url: url.into(),
            timeout,
        }
    }
}

#[async_trait]
impl DirectoryService for HttpDirectory {
    async fn fetch_directory(&self) -> String {
        let response = match self
            .client
            .get(&self.url)
            .timeout(self.timeout)
            .send()
            .await
        {
            Ok(resp) => resp,
            Err(e) => {
                warn!("Doctor directory unreachable: {}", e);
                return UNAVAILABLE_CONTEXT.to_string();
            }
        };

        if !response.status().is_success() {
            warn!("Doctor directory returned status {}", response.status());
            return FETCH_FAILED_CONTEXT.to_string();
        }

        let doctors: Vec<DoctorRecord> = match response.json().await {
            Ok(list) => list,
            Err(e) => {
                warn!("Failed to decode doctor directory response: {}", e);
                return UNAVAILABLE_CONTEXT.to_string();
            }
        };

        info!("Fetched {} doctors from directory", doctors.len());
        doctors_context(&doctors)
    }
}

/// Format doctor records into the prompt context block.
pub fn doctors_context(doctors: &[DoctorRecord]) -> String {
    if doctors.is_empty() {
        return EMPTY_DIRECTORY_CONTEXT.to_string();
    }

    let mut context = String::from(CONTEXT_HEADER);
    for doc in doctors {
        context.push_str(&format!(
            "- Dr. {} ({}): Available {}\n",
            doc.name, doc.specialization, doc.availability
        ));
    }
    context
}
