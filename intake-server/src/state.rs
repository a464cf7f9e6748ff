use intake_core::{IdSource, SystemIdSource};

use std::sync::Arc;

/// Shared state for the stateless submission handlers.
/// Only the id source lives here; each request owns everything else,
/// so concurrent submissions need no locking.
#[derive(Clone)]
pub struct AppState {
    pub ids: Arc<dyn IdSource>,
}

impl AppState {
    /// Production state: wall clock + thread-local RNG
    pub fn new() -> Self {
        Self {
            ids: Arc::new(SystemIdSource),
        }
    }

    /// State with an injected id source, for tests
    pub fn with_id_source(ids: Arc<dyn IdSource>) -> Self {
        Self { ids }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
