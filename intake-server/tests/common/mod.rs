#![allow(dead_code)]

//! Test infrastructure for intake-server API tests

use intake_core::IdSource;
use intake_server::AppState;

use std::sync::Arc;

/// Deterministic id source for asserting exact identifiers
pub struct FixedIdSource {
    pub millis: i64,
    pub suffix: &'static str,
}

impl IdSource for FixedIdSource {
    fn now_millis(&self) -> i64 {
        self.millis
    }

    fn random_suffix(&self) -> String {
        self.suffix.to_string()
    }
}

/// Create AppState with the production id source
pub fn create_test_state() -> AppState {
    AppState::new()
}

/// Create AppState with a fixed id source
pub fn create_fixed_state(millis: i64, suffix: &'static str) -> AppState {
    AppState::with_id_source(Arc::new(FixedIdSource { millis, suffix }))
}
