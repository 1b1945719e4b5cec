//! Safety signals shared by every moderation result
//!
//! These are the base fields every modality reports. A moderation record
//! holds a copy of them and derives its `is_flagged` field from them.
//!
//! # Examples
//!
//! ```
//! use moderation::value_objects::SafetySignals;
//!
//! let signals = SafetySignals::new()
//!     .with_rationale("Shares a phone number")
//!     .with_pii(true);
//!
//! assert!(signals.any_raised());
//! assert_eq!(signals.rationale, "Shares a phone number");
//! ```

use serde::{Deserialize, Serialize};

use super::FlagReason;
use crate::parsing::FieldValues;
use crate::schema::field;

/// Base moderation fields common to all modalities
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SafetySignals {
    /// Explanation of what was harmful and why
    pub rationale: String,
    /// Whether the content contains personally identifiable information
    pub contains_pii: bool,
    /// Whether unfriendly tone or content was detected
    pub is_unfriendly: bool,
    /// Whether unprofessional tone or content was detected
    pub is_unprofessional: bool,
}

impl SafetySignals {
    /// Create signals with every check passing and an empty rationale
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rationale
    #[must_use]
    pub fn with_rationale(mut self, rationale: impl Into<String>) -> Self {
        self.rationale = rationale.into();
        self
    }

    /// Set the PII flag
    #[must_use]
    pub fn with_pii(mut self, contains_pii: bool) -> Self {
        self.contains_pii = contains_pii;
        self
    }

    /// Set the unfriendly flag
    #[must_use]
    pub fn with_unfriendly(mut self, is_unfriendly: bool) -> Self {
        self.is_unfriendly = is_unfriendly;
        self
    }

    /// Set the unprofessional flag
    #[must_use]
    pub fn with_unprofessional(mut self, is_unprofessional: bool) -> Self {
        self.is_unprofessional = is_unprofessional;
        self
    }

    /// Whether any of the shared checks failed
    #[must_use]
    pub const fn any_raised(&self) -> bool {
        self.contains_pii || self.is_unfriendly || self.is_unprofessional
    }

    /// The shared checks that failed, in field order
    #[must_use]
    pub fn reasons(&self) -> Vec<FlagReason> {
        [
            (self.contains_pii, FlagReason::ContainsPii),
            (self.is_unfriendly, FlagReason::Unfriendly),
            (self.is_unprofessional, FlagReason::Unprofessional),
        ]
        .into_iter()
        .filter_map(|(raised, reason)| raised.then_some(reason))
        .collect()
    }

    pub(crate) fn take_from(fields: &mut FieldValues) -> Self {
        Self {
            rationale: fields.take_text(field::RATIONALE),
            contains_pii: fields.flag(field::CONTAINS_PII),
            is_unfriendly: fields.flag(field::IS_UNFRIENDLY),
            is_unprofessional: fields.flag(field::IS_UNPROFESSIONAL),
        }
    }
}
