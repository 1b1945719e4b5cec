//! Flag reasons - Which safety check caused a result to be flagged

use serde::{Deserialize, Serialize};
use std::fmt;

/// A safety check that can flag content
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FlagReason {
    /// Personally identifiable information was found
    ContainsPii,
    /// Unfriendly tone or content
    Unfriendly,
    /// Unprofessional tone or content
    Unprofessional,
    /// Disturbing imagery (image and video only)
    Disturbing,
}

impl FlagReason {
    /// Name of the record field backing this reason
    #[must_use]
    pub const fn field_name(&self) -> &'static str {
        match self {
            Self::ContainsPii => "contains_pii",
            Self::Unfriendly => "is_unfriendly",
            Self::Unprofessional => "is_unprofessional",
            Self::Disturbing => "is_disturbing",
        }
    }

    /// Human-readable label for alerts
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ContainsPii => "contains PII",
            Self::Unfriendly => "unfriendly",
            Self::Unprofessional => "unprofessional",
            Self::Disturbing => "disturbing",
        }
    }
}

impl fmt::Display for FlagReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
