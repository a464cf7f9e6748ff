use crate::{ConditionalSection, CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// What kind of AI use case a proposal describes.
/// Wire values are kebab-case to match the form's select options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseCaseType {
    ContentCreation,
    Research,
    Coding,
    DataAnalysis,
    IdeationStrategy,
    Automation,
}

impl UseCaseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ContentCreation => "content-creation",
            Self::Research => "research",
            Self::Coding => "coding",
            Self::DataAnalysis => "data-analysis",
            Self::IdeationStrategy => "ideation-strategy",
            Self::Automation => "automation",
        }
    }

    /// Human-readable label shown in the form's option list
    pub fn label(&self) -> &'static str {
        match self {
            Self::ContentCreation => "Content Creation",
            Self::Research => "Research",
            Self::Coding => "Coding",
            Self::DataAnalysis => "Data Analysis",
            Self::IdeationStrategy => "Ideation & Strategy",
            Self::Automation => "Automation",
        }
    }

    /// Short description shown under the label
    pub fn description(&self) -> &'static str {
        match self {
            Self::ContentCreation => "Generate, edit, or optimize written content",
            Self::Research => "Gather and analyze information",
            Self::Coding => "Generate, debug, or optimize code",
            Self::DataAnalysis => "Process and extract insights from data",
            Self::IdeationStrategy => "Brainstorm ideas and strategic planning",
            Self::Automation => "Automate repetitive manual tasks",
        }
    }

    /// Extra form section revealed when this type is selected, if any.
    /// At most one section can be active since the selector is single-choice.
    pub fn conditional_section(&self) -> Option<ConditionalSection> {
        match self {
            Self::Automation => Some(ConditionalSection::Automation),
            Self::ContentCreation => Some(ConditionalSection::ContentCreation),
            Self::DataAnalysis => Some(ConditionalSection::DataAnalysis),
            _ => None,
        }
    }
}

impl FromStr for UseCaseType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "content-creation" => Ok(Self::ContentCreation),
            "research" => Ok(Self::Research),
            "coding" => Ok(Self::Coding),
            "data-analysis" => Ok(Self::DataAnalysis),
            "ideation-strategy" => Ok(Self::IdeationStrategy),
            "automation" => Ok(Self::Automation),
            _ => Err(CoreError::InvalidUseCaseType {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for UseCaseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
