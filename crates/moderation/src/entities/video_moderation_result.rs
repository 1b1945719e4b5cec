//! Moderation result for video clips

use serde::{Deserialize, Deserializer, Serialize};

use super::moderation_result::{ModerationOutcome, derive_is_flagged};
use crate::parsing::{FieldValues, deserialize_record};
use crate::schema::{
    CONTAINS_PII, FLAGGED, FieldSpec, ModerationRecord, RATIONALE, RecordSchema, UNFRIENDLY,
    UNPROFESSIONAL, field,
};
use crate::value_objects::{FlagReason, Modality, SafetySignals, VisualAssessment};

static SCHEMA: RecordSchema = RecordSchema {
    name: "VideoModerationResult",
    modality: Some(Modality::Video),
    fields: &[
        FLAGGED,
        RATIONALE,
        CONTAINS_PII,
        UNFRIENDLY,
        UNPROFESSIONAL,
        FieldSpec::flag_source(field::IS_DISTURBING, "Whether the video is disturbing"),
        FieldSpec::boolean(field::IS_LOW_QUALITY, "Whether the video is low quality"),
    ],
};

/// Moderation outcome for a video
///
/// Same shape as [`ImageModerationResult`](super::ImageModerationResult).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct VideoModerationResult {
    is_flagged: bool,
    #[serde(flatten)]
    signals: SafetySignals,
    #[serde(flatten)]
    visual: VisualAssessment,
}

impl VideoModerationResult {
    /// Create a result, deriving `is_flagged` from the signals and the
    /// disturbing check
    #[must_use]
    pub fn new(signals: SafetySignals, visual: VisualAssessment) -> Self {
        let is_flagged = derive_is_flagged(&signals, visual.is_disturbing);
        Self {
            is_flagged,
            signals,
            visual,
        }
    }

    /// Whether the video is disturbing
    #[must_use]
    pub const fn is_disturbing(&self) -> bool {
        self.visual.is_disturbing
    }

    /// Whether the video is low quality (never flags the result)
    #[must_use]
    pub const fn is_low_quality(&self) -> bool {
        self.visual.is_low_quality
    }

    /// The visual checks
    #[must_use]
    pub const fn visual(&self) -> VisualAssessment {
        self.visual
    }
}

impl Default for VideoModerationResult {
    fn default() -> Self {
        Self::new(SafetySignals::default(), VisualAssessment::default())
    }
}

impl ModerationOutcome for VideoModerationResult {
    fn signals(&self) -> &SafetySignals {
        &self.signals
    }

    fn is_flagged(&self) -> bool {
        self.is_flagged
    }

    fn flag_reasons(&self) -> Vec<FlagReason> {
        let mut reasons = self.signals.reasons();
        if self.visual.is_disturbing {
            reasons.push(FlagReason::Disturbing);
        }
        reasons
    }
}

impl ModerationRecord for VideoModerationResult {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn from_fields(mut fields: FieldValues) -> Self {
        let visual = VisualAssessment::take_from(&fields);
        Self::new(SafetySignals::take_from(&mut fields), visual)
    }
}

impl<'de> Deserialize<'de> for VideoModerationResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer)
    }
}
