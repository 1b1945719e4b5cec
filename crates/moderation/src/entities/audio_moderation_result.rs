//! Moderation result for audio recordings
//!
//! Audio is checked on its transcription, so the result carries the base
//! fields plus the transcription text. The transcription is informational
//! and never flags the result on its own.

use serde::{Deserialize, Deserializer, Serialize};

use super::moderation_result::{ModerationOutcome, derive_is_flagged};
use crate::parsing::{FieldValues, deserialize_record};
use crate::schema::{
    CONTAINS_PII, FLAGGED, FieldSpec, ModerationRecord, RATIONALE, RecordSchema, UNFRIENDLY,
    UNPROFESSIONAL, field,
};
use crate::value_objects::{Modality, SafetySignals};

static SCHEMA: RecordSchema = RecordSchema {
    name: "AudioModerationResult",
    modality: Some(Modality::Audio),
    fields: &[
        FLAGGED,
        RATIONALE,
        CONTAINS_PII,
        UNFRIENDLY,
        UNPROFESSIONAL,
        FieldSpec::text(field::TRANSCRIPTION, "Transcription of the audio"),
    ],
};

/// Moderation outcome for an audio clip
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct AudioModerationResult {
    is_flagged: bool,
    #[serde(flatten)]
    signals: SafetySignals,
    transcription: String,
}

impl AudioModerationResult {
    /// Create a result, deriving `is_flagged` from the signals
    #[must_use]
    pub fn new(signals: SafetySignals, transcription: impl Into<String>) -> Self {
        let is_flagged = derive_is_flagged(&signals, false);
        Self {
            is_flagged,
            signals,
            transcription: transcription.into(),
        }
    }

    /// Transcription of the audio
    #[must_use]
    pub fn transcription(&self) -> &str {
        &self.transcription
    }
}

impl Default for AudioModerationResult {
    fn default() -> Self {
        Self::new(SafetySignals::default(), String::new())
    }
}

impl ModerationOutcome for AudioModerationResult {
    fn signals(&self) -> &SafetySignals {
        &self.signals
    }

    fn is_flagged(&self) -> bool {
        self.is_flagged
    }
}

impl ModerationRecord for AudioModerationResult {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn from_fields(mut fields: FieldValues) -> Self {
        let transcription = fields.take_text(field::TRANSCRIPTION);
        Self::new(SafetySignals::take_from(&mut fields), transcription)
    }
}

impl<'de> Deserialize<'de> for AudioModerationResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer)
    }
}
