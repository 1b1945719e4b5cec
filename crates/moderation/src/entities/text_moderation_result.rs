//! Moderation result for text content

use serde::{Deserialize, Deserializer, Serialize};

use super::moderation_result::{ModerationOutcome, ModerationResult, derive_is_flagged};
use crate::parsing::{FieldValues, deserialize_record};
use crate::schema::{
    CONTAINS_PII, FLAGGED, ModerationRecord, RATIONALE, RecordSchema, UNFRIENDLY, UNPROFESSIONAL,
};
use crate::value_objects::{Modality, SafetySignals};

static SCHEMA: RecordSchema = RecordSchema {
    name: "TextModerationResult",
    modality: Some(Modality::Text),
    fields: &[FLAGGED, RATIONALE, CONTAINS_PII, UNFRIENDLY, UNPROFESSIONAL],
};

/// Moderation outcome for a chat message, post or other text
///
/// Carries exactly the base fields.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TextModerationResult {
    is_flagged: bool,
    #[serde(flatten)]
    signals: SafetySignals,
}

impl TextModerationResult {
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

impl Default for TextModerationResult {
    fn default() -> Self {
        Self::new(SafetySignals::default())
    }
}

impl From<ModerationResult> for TextModerationResult {
    fn from(result: ModerationResult) -> Self {
        Self::new(result.into_signals())
    }
}

impl From<TextModerationResult> for ModerationResult {
    fn from(result: TextModerationResult) -> Self {
        Self::new(result.into_signals())
    }
}

impl ModerationOutcome for TextModerationResult {
    fn signals(&self) -> &SafetySignals {
        &self.signals
    }

    fn is_flagged(&self) -> bool {
        self.is_flagged
    }
}

impl ModerationRecord for TextModerationResult {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn from_fields(mut fields: FieldValues) -> Self {
        Self::new(SafetySignals::take_from(&mut fields))
    }
}

impl<'de> Deserialize<'de> for TextModerationResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer)
    }
}
