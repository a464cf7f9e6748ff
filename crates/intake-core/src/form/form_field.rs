use crate::{CoreError, Result as CoreResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;

/// Typed name of an intake form field. Wire names are camelCase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Title,
    Team,
    Description,
    BusinessProblem,
    ExpectedImpact,
    CurrentProcess,
    TimeInvestment,
    PeopleAffected,
    Timeline,
    UseCaseType,
    ProblemCategory,
}

impl FormField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Team => "team",
            Self::Description => "description",
            Self::BusinessProblem => "businessProblem",
            Self::ExpectedImpact => "expectedImpact",
            Self::CurrentProcess => "currentProcess",
            Self::TimeInvestment => "timeInvestment",
            Self::PeopleAffected => "peopleAffected",
            Self::Timeline => "timeline",
            Self::UseCaseType => "useCaseType",
            Self::ProblemCategory => "problemCategory",
        }
    }
}

impl FromStr for FormField {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "title" => Ok(Self::Title),
            "team" => Ok(Self::Team),
            "description" => Ok(Self::Description),
            "businessProblem" => Ok(Self::BusinessProblem),
            "expectedImpact" => Ok(Self::ExpectedImpact),
            "currentProcess" => Ok(Self::CurrentProcess),
            "timeInvestment" => Ok(Self::TimeInvestment),
            "peopleAffected" => Ok(Self::PeopleAffected),
            "timeline" => Ok(Self::Timeline),
            "useCaseType" => Ok(Self::UseCaseType),
            "problemCategory" => Ok(Self::ProblemCategory),
            _ => Err(CoreError::UnknownFormField {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
