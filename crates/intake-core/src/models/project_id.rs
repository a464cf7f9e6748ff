//! Project identifier: `PROJ-<epoch millis>-<9 random base-36 chars>`.

use crate::id::id_source::{IdSource, SUFFIX_LEN};
use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Server-generated submission identifier.
/// Uniqueness is birthday-bound only (millisecond timestamp plus
/// 36^9 random suffixes); nothing persists prior ids to check against.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectId(String);

impl ProjectId {
    pub const PREFIX: &'static str = "PROJ";

    /// Generate a fresh id from the given clock + random source
    pub fn generate(source: &dyn IdSource) -> Self {
        Self(format!(
            "{}-{}-{}",
            Self::PREFIX,
            source.now_millis(),
            source.random_suffix()
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(s: &str) -> bool {
        let mut parts = s.splitn(3, '-');
        let (Some(prefix), Some(millis), Some(suffix)) = (parts.next(), parts.next(), parts.next())
        else {
            return false;
        };

        prefix == Self::PREFIX
            && !millis.is_empty()
            && millis.bytes().all(|b| b.is_ascii_digit())
            && suffix.len() == SUFFIX_LEN
            && suffix
                .bytes()
                .all(|b| b.is_ascii_digit() || b.is_ascii_lowercase())
    }
}

impl FromStr for ProjectId {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        if Self::is_well_formed(s) {
            Ok(Self(s.to_string()))
        } else {
            Err(CoreError::InvalidProjectId {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })
        }
    }
}

impl std::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
