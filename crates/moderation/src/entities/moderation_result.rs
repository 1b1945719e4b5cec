//! Base moderation result and the capability set shared by every modality
//!
//! # Examples
//!
//! ```
//! use moderation::{ModerationOutcome, ModerationResult, SafetySignals};
//!
//! let clean = ModerationResult::default();
//! assert!(!clean.is_flagged());
//!
//! let leaked = ModerationResult::new(SafetySignals::new().with_pii(true));
//! assert!(leaked.is_flagged());
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use crate::parsing::{FieldValues, deserialize_record};
use crate::schema::{
    CONTAINS_PII, FLAGGED, ModerationRecord, RATIONALE, RecordSchema, UNFRIENDLY, UNPROFESSIONAL,
};
use crate::value_objects::{FlagReason, SafetySignals};

/// Derive the aggregate flag from its sources
///
/// Every record constructor calls this exactly once, after all other fields
/// are final. Records without a disturbing check pass `false`.
pub(crate) const fn derive_is_flagged(signals: &SafetySignals, is_disturbing: bool) -> bool {
    signals.any_raised() || is_disturbing
}

/// Read access shared by every moderation result
///
/// Write consumers (logging, alerting) against this trait and reach for the
/// concrete type only for modality-specific fields.
pub trait ModerationOutcome {
    /// The base fields of this result
    fn signals(&self) -> &SafetySignals;

    /// Whether the content failed at least one safety check
    fn is_flagged(&self) -> bool;

    /// Explanation of what was harmful and why
    fn rationale(&self) -> &str {
        &self.signals().rationale
    }

    /// Whether the content contains personally identifiable information
    fn contains_pii(&self) -> bool {
        self.signals().contains_pii
    }

    /// Whether unfriendly tone or content was detected
    fn is_unfriendly(&self) -> bool {
        self.signals().is_unfriendly
    }

    /// Whether unprofessional tone or content was detected
    fn is_unprofessional(&self) -> bool {
        self.signals().is_unprofessional
    }

    /// The checks that caused this result to be flagged
    ///
    /// Empty exactly when [`is_flagged`](Self::is_flagged) is `false`.
    fn flag_reasons(&self) -> Vec<FlagReason> {
        self.signals().reasons()
    }
}

static SCHEMA: RecordSchema = RecordSchema {
    name: "ModerationResult",
    modality: None,
    fields: &[FLAGGED, RATIONALE, CONTAINS_PII, UNFRIENDLY, UNPROFESSIONAL],
};

/// Outcome of a safety check on a piece of content
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ModerationResult {
    is_flagged: bool,
    #[serde(flatten)]
    signals: SafetySignals,
}

impl ModerationResult {
    /// Create a result, deriving `is_flagged` from the signals
    #[must_use]
    pub fn new(signals: SafetySignals) -> Self {
        let is_flagged = derive_is_flagged(&signals, false);
        Self {
            is_flagged,
            signals,
        }
    }

    /// Take back the base fields
    #[must_use]
    pub fn into_signals(self) -> SafetySignals {
        self.signals
    }
}

impl Default for ModerationResult {
    fn default() -> Self {
        Self::new(SafetySignals::default())
    }
}

impl From<SafetySignals> for ModerationResult {
    fn from(signals: SafetySignals) -> Self {
        Self::new(signals)
    }
}

impl ModerationOutcome for ModerationResult {
    fn signals(&self) -> &SafetySignals {
        &self.signals
    }

    fn is_flagged(&self) -> bool {
        self.is_flagged
    }
}

impl ModerationRecord for ModerationResult {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn from_fields(mut fields: FieldValues) -> Self {
        Self::new(SafetySignals::take_from(&mut fields))
    }
}

impl<'de> Deserialize<'de> for ModerationResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer)
    }
}
