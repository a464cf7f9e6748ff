use serde::{Deserialize, Serialize};

/// A form section revealed only for a specific use case type.
/// Derived from the selected `UseCaseType`, never tracked separately,
/// so the visible section cannot drift out of sync with the selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ConditionalSection {
    /// "Current Manual Process" details
    Automation,
    /// Content type and audience details
    ContentCreation,
    /// Data sources and formats details
    DataAnalysis,
}

impl ConditionalSection {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Automation => "automation",
            Self::ContentCreation => "content-creation",
            Self::DataAnalysis => "data-analysis",
        }
    }
}

impl std::fmt::Display for ConditionalSection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
