//! Moderation result for still images

use serde::{Deserialize, Deserializer, Serialize};

use super::moderation_result::{ModerationOutcome, derive_is_flagged};
use crate::parsing::{FieldValues, deserialize_record};
use crate::schema::{
    CONTAINS_PII, FLAGGED, FieldSpec, ModerationRecord, RATIONALE, RecordSchema, UNFRIENDLY,
    UNPROFESSIONAL, field,
};
use crate::value_objects::{FlagReason, Modality, SafetySignals, VisualAssessment};

static SCHEMA: RecordSchema = RecordSchema {
    name: "ImageModerationResult",
    modality: Some(Modality::Image),
    fields: &[
        FLAGGED,
        RATIONALE,
        CONTAINS_PII,
        UNFRIENDLY,
        UNPROFESSIONAL,
        FieldSpec::flag_source(field::IS_DISTURBING, "Whether the image is disturbing"),
        FieldSpec::boolean(field::IS_LOW_QUALITY, "Whether the image is low quality"),
    ],
};

/// Moderation outcome for an image
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct ImageModerationResult {
    is_flagged: bool,
    #[serde(flatten)]
    signals: SafetySignals,
    #[serde(flatten)]
    visual: VisualAssessment,
}

impl ImageModerationResult {
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

    /// Whether the image is disturbing
    #[must_use]
    pub const fn is_disturbing(&self) -> bool {
        self.visual.is_disturbing
    }

    /// Whether the image is low quality (never flags the result)
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

impl Default for ImageModerationResult {
    fn default() -> Self {
        Self::new(SafetySignals::default(), VisualAssessment::default())
    }
}

impl ModerationOutcome for ImageModerationResult {
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

impl ModerationRecord for ImageModerationResult {
    fn schema() -> &'static RecordSchema {
        &SCHEMA
    }

    fn from_fields(mut fields: FieldValues) -> Self {
        let visual = VisualAssessment::take_from(&fields);
        Self::new(SafetySignals::take_from(&mut fields), visual)
    }
}

impl<'de> Deserialize<'de> for ImageModerationResult {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserialize_record(deserializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn has_all_required_fields() {
        let result = ImageModerationResult::new(
            SafetySignals::new()
                .with_rationale("Test rationale")
                .with_pii(true),
            VisualAssessment::default()
                .with_disturbing(false)
                .with_low_quality(true),
        );

        assert_eq!(result.rationale(), "Test rationale");
        assert!(result.contains_pii());
        assert!(!result.is_disturbing());
        assert!(result.is_low_quality());
        assert!(result.is_flagged());
    }

    #[test]
    fn disturbing_flags_the_result() {
        let result = ImageModerationResult::new(
            SafetySignals::default(),
            VisualAssessment::default().with_disturbing(true),
        );
        assert!(result.is_flagged());
        assert!(!result.is_low_quality());
        assert_eq!(result.flag_reasons(), vec![FlagReason::Disturbing]);
    }

    #[test]
    fn low_quality_alone_does_not_flag() {
        let result = ImageModerationResult::new(
            SafetySignals::default(),
            VisualAssessment::default().with_low_quality(true),
        );
        assert!(!result.is_flagged());
        assert!(result.flag_reasons().is_empty());
    }

    #[test]
    fn defaults() {
        let result = ImageModerationResult::default();
        assert!(!result.is_disturbing());
        assert!(!result.is_low_quality());
        assert!(!result.is_flagged());
        assert_eq!(result.visual(), VisualAssessment::default());
    }

    #[test]
    fn flag_reasons_put_disturbing_last() {
        let result = ImageModerationResult::new(
            SafetySignals::new().with_pii(true),
            VisualAssessment::default().with_disturbing(true),
        );
        assert_eq!(
            result.flag_reasons(),
            vec![FlagReason::ContainsPii, FlagReason::Disturbing]
        );
    }

    #[test]
    fn serializes_every_field_flat() {
        let json = serde_json::to_value(ImageModerationResult::default()).unwrap();
        let object = json.as_object().unwrap();

        let mut keys: Vec<_> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "contains_pii",
                "is_disturbing",
                "is_flagged",
                "is_low_quality",
                "is_unfriendly",
                "is_unprofessional",
                "rationale"
            ]
        );
    }

    #[test]
    fn deserialization_recomputes_is_flagged() {
        let result: ImageModerationResult =
            serde_json::from_str(r#"{"is_flagged": false, "is_disturbing": true}"#).unwrap();
        assert!(result.is_flagged());
    }
}
