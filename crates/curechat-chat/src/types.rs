//! Wire types for the chat relay.

use serde::{Deserialize, Serialize};

/// Incoming chat request.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub message: Option<String>,
}

/// Doctor record as returned by the internal directory endpoint.
///
/// The endpoint sends more fields than these; anything beyond the three the
/// prompt needs is ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoctorRecord {
    pub name: String,
    pub specialization: String,
    pub availability: String,
}

/// The three-field reply the prompt instructs the model to produce.
///
/// The success path passes the model's parsed JSON through verbatim without
/// validating it against this shape; the struct is the contract for the
/// fallback envelope and for typed assertions in tests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelReply {
    pub specialty: String,
    pub reply: String,
    #[serde(rename = "isEmergency")]
    pub is_emergency: bool,
}
