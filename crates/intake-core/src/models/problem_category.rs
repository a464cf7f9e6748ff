use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Which class of problem the proposal targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProblemCategory {
    RepetitiveTasks,
    SkillBottlenecks,
    NavigatingAmbiguity,
}

impl ProblemCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::RepetitiveTasks => "repetitive-tasks",
            Self::SkillBottlenecks => "skill-bottlenecks",
            Self::NavigatingAmbiguity => "navigating-ambiguity",
        }
    }

    /// Human-readable label shown in the form's option list
    pub fn label(&self) -> &'static str {
        match self {
            Self::RepetitiveTasks => "Repetitive Tasks",
            Self::SkillBottlenecks => "Skill Bottlenecks",
            Self::NavigatingAmbiguity => "Navigating Ambiguity",
        }
    }

    /// Short description shown under the label
    pub fn description(&self) -> &'static str {
        match self {
            Self::RepetitiveTasks => "Manual, time-consuming work",
            Self::SkillBottlenecks => "Waiting for expert help or specialized skills",
            Self::NavigatingAmbiguity => "Getting unstuck on unclear problems",
        }
    }
}

impl FromStr for ProblemCategory {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "repetitive-tasks" => Ok(Self::RepetitiveTasks),
            "skill-bottlenecks" => Ok(Self::SkillBottlenecks),
            "navigating-ambiguity" => Ok(Self::NavigatingAmbiguity),
            _ => Err(CoreError::InvalidProblemCategory {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for ProblemCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
