//! Chat relay pipeline — doctor directory context, prompt assembly,
//! Gemini inference, and model-output normalization.
//!
//! The two outbound calls sit behind object-safe traits so route handlers
//! and tests can substitute doubles.

pub mod directory;
pub mod gemini;
pub mod normalize;
pub mod prompt;
pub mod types;

pub use directory::{DirectoryService, HttpDirectory};
pub use gemini::{GeminiClient, InferenceService};
pub use types::{ChatRequest, DoctorRecord, ModelReply};
