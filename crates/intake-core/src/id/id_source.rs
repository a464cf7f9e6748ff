//! Clock + random source behind project id generation.
//!
//! Injected as a collaborator so tests can supply deterministic values
//! and assert exact identifier formatting.

use chrono::Utc;
use rand::Rng;

/// Length of the random suffix in a project id
pub const SUFFIX_LEN: usize = 9;

const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Provides the two inputs a project id is built from
pub trait IdSource: Send + Sync {
    /// Current time as epoch milliseconds
    fn now_millis(&self) -> i64;

    /// `SUFFIX_LEN` random base-36 characters
    fn random_suffix(&self) -> String;
}

/// Production source: wall clock + thread-local RNG
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemIdSource;

impl IdSource for SystemIdSource {
    fn now_millis(&self) -> i64 {
        Utc::now().timestamp_millis()
    }

    fn random_suffix(&self) -> String {
        let mut rng = rand::rng();
        (0..SUFFIX_LEN)
            .map(|_| BASE36[rng.random_range(0..BASE36.len())] as char)
            .collect()
    }
}
