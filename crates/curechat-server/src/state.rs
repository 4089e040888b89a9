//! Shared application state.

use std::sync::Arc;

use curechat_chat::{DirectoryService, InferenceService};

/// Shared application state accessible from all route handlers.
///
/// The two outbound services sit behind trait objects so tests can swap in
/// doubles. Nothing here is mutable; requests share no state.
pub struct AppState {
    pub directory: Arc<dyn DirectoryService>,
    pub inference: Arc<dyn InferenceService>,
}

impl AppState {
    pub fn new(
        directory: Arc<dyn DirectoryService>,
        inference: Arc<dyn InferenceService>,
    ) -> Self {
        Self {
            directory,
            inference,
        }
    }
}
