//! Property-based tests for moderation records
//!
//! These tests use proptest to verify the `is_flagged` invariant across many
//! random inputs, for typed construction and for untyped payloads alike.

use moderation::{
    AnyModerationResult, AudioModerationResult, ImageModerationResult, ModerationOutcome,
    ModerationResult, ParseOptions, SafetySignals, TextModerationResult, VideoModerationResult,
    VisualAssessment, from_value,
};
use proptest::prelude::*;
use serde_json::{Value, json};

fn arb_signals() -> impl Strategy<Value = SafetySignals> {
    (".{0,40}", any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
        |(rationale, contains_pii, is_unfriendly, is_unprofessional)| SafetySignals {
            rationale,
            contains_pii,
            is_unfriendly,
            is_unprofessional,
        },
    )
}

fn arb_visual() -> impl Strategy<Value = VisualAssessment> {
    (any::<bool>(), any::<bool>()).prop_map(|(is_disturbing, is_low_quality)| VisualAssessment {
        is_disturbing,
        is_low_quality,
    })
}

fn expected_flag(signals: &SafetySignals, is_disturbing: bool) -> bool {
    signals.contains_pii || signals.is_unfriendly || signals.is_unprofessional || is_disturbing
}

// ============================================================================
// Typed construction
// ============================================================================

mod construction_tests {
    use super::*;

    proptest! {
        #[test]
        fn base_flag_is_or_of_signals(signals in arb_signals()) {
            let result = ModerationResult::new(signals.clone());
            prop_assert_eq!(result.is_flagged(), expected_flag(&signals, false));
            prop_assert_eq!(result.is_flagged(), !result.flag_reasons().is_empty());
        }

        #[test]
        fn text_flag_is_or_of_signals(signals in arb_signals()) {
            let result = TextModerationResult::new(signals.clone());
            prop_assert_eq!(result.is_flagged(), expected_flag(&signals, false));
            prop_assert_eq!(result.signals(), &signals);
        }

        #[test]
        fn image_flag_includes_disturbing(signals in arb_signals(), visual in arb_visual()) {
            let result = ImageModerationResult::new(signals.clone(), visual);
            prop_assert_eq!(result.is_flagged(), expected_flag(&signals, visual.is_disturbing));
            prop_assert_eq!(result.is_flagged(), !result.flag_reasons().is_empty());
        }

        #[test]
        fn video_flag_includes_disturbing(signals in arb_signals(), visual in arb_visual()) {
            let result = VideoModerationResult::new(signals.clone(), visual);
            prop_assert_eq!(result.is_flagged(), expected_flag(&signals, visual.is_disturbing));
        }

        #[test]
        fn low_quality_never_changes_flag(signals in arb_signals(), is_disturbing in any::<bool>()) {
            let base = VisualAssessment::default().with_disturbing(is_disturbing);
            let sharp = ImageModerationResult::new(signals.clone(), base.with_low_quality(false));
            let blurry = ImageModerationResult::new(signals, base.with_low_quality(true));
            prop_assert_eq!(sharp.is_flagged(), blurry.is_flagged());
        }

        #[test]
        fn transcription_never_changes_flag(signals in arb_signals(), transcription in ".{0,80}") {
            let with_text = AudioModerationResult::new(signals.clone(), transcription.clone());
            let without_text = AudioModerationResult::new(signals.clone(), "");
            prop_assert_eq!(with_text.is_flagged(), without_text.is_flagged());
            prop_assert_eq!(with_text.is_flagged(), expected_flag(&signals, false));
            prop_assert_eq!(with_text.transcription(), transcription.as_str());
        }
    }
}

// ============================================================================
// Untyped payloads
// ============================================================================

mod payload_tests {
    use super::*;

    fn payload(signals: &SafetySignals, supplied_flag: bool) -> Value {
        json!({
            "is_flagged": supplied_flag,
            "rationale": signals.rationale,
            "contains_pii": signals.contains_pii,
            "is_unfriendly": signals.is_unfriendly,
            "is_unprofessional": signals.is_unprofessional,
        })
    }

    proptest! {
        #[test]
        fn supplied_flag_is_always_discarded(signals in arb_signals(), supplied in any::<bool>()) {
            let result: ModerationResult =
                from_value(payload(&signals, supplied), &ParseOptions::strict()).unwrap();
            prop_assert_eq!(result.is_flagged(), expected_flag(&signals, false));
        }

        #[test]
        fn tampered_serialized_flag_is_recomputed(
            signals in arb_signals(),
            visual in arb_visual(),
        ) {
            let original = ImageModerationResult::new(signals, visual);
            let mut json = serde_json::to_value(&original).unwrap();
            json["is_flagged"] = Value::Bool(!original.is_flagged());

            let restored: ImageModerationResult = serde_json::from_value(json).unwrap();
            prop_assert_eq!(restored, original);
        }

        #[test]
        fn serialization_roundtrip(signals in arb_signals(), transcription in ".{0,40}") {
            let original = AudioModerationResult::new(signals, transcription);
            let json = serde_json::to_string(&original).unwrap();
            let restored: AudioModerationResult = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(restored, original);
        }

        #[test]
        fn omitted_fields_take_defaults(
            contains_pii in proptest::option::of(any::<bool>()),
            is_disturbing in proptest::option::of(any::<bool>()),
        ) {
            let mut object = serde_json::Map::new();
            if let Some(value) = contains_pii {
                object.insert("contains_pii".to_string(), Value::Bool(value));
            }
            if let Some(value) = is_disturbing {
                object.insert("is_disturbing".to_string(), Value::Bool(value));
            }

            let result: VideoModerationResult =
                from_value(Value::Object(object), &ParseOptions::strict()).unwrap();

            prop_assert_eq!(result.contains_pii(), contains_pii.unwrap_or(false));
            prop_assert_eq!(result.is_disturbing(), is_disturbing.unwrap_or(false));
            prop_assert!(!result.is_unfriendly());
            prop_assert!(!result.is_low_quality());
            prop_assert_eq!(result.rationale(), "");
            prop_assert_eq!(
                result.is_flagged(),
                contains_pii.unwrap_or(false) || is_disturbing.unwrap_or(false)
            );
        }

        #[test]
        fn numbers_are_never_accepted_as_booleans(value in any::<i64>()) {
            let result = from_value::<TextModerationResult>(
                json!({ "is_unprofessional": value }),
                &ParseOptions::permissive(),
            );
            prop_assert!(result.is_err());
        }

        #[test]
        fn unknown_fields_follow_policy(name in "[a-z]{3,12}_extra") {
            let body = json!({ name.clone(): true, "contains_pii": true });

            let strict = from_value::<TextModerationResult>(body.clone(), &ParseOptions::strict());
            prop_assert!(strict.is_err());

            let permissive =
                from_value::<TextModerationResult>(body, &ParseOptions::permissive()).unwrap();
            prop_assert!(permissive.is_flagged());
        }

        #[test]
        fn any_result_keeps_variant_flag(signals in arb_signals(), visual in arb_visual()) {
            let image = ImageModerationResult::new(signals, visual);
            let any: AnyModerationResult = image.clone().into();
            prop_assert_eq!(any.is_flagged(), image.is_flagged());
            prop_assert_eq!(any.flag_reasons(), image.flag_reasons());
        }
    }
}

// ============================================================================
// Concrete scenarios
// ============================================================================

#[test]
fn default_base_is_not_flagged() {
    assert!(!ModerationResult::default().is_flagged());
}

#[test]
fn pii_flags_base() {
    let result = ModerationResult::new(SafetySignals::new().with_pii(true));
    assert!(result.is_flagged());
}

#[test]
fn supplied_flag_without_signals_is_overridden() {
    let result: ModerationResult =
        from_value(json!({ "is_flagged": true }), &ParseOptions::strict()).unwrap();
    assert!(!result.is_flagged());
}

#[test]
fn disturbing_image_is_flagged() {
    let result = ImageModerationResult::new(
        SafetySignals::default(),
        VisualAssessment::default().with_disturbing(true),
    );
    assert!(result.is_flagged());
    assert!(!result.is_low_quality());
}

#[test]
fn low_quality_video_is_not_flagged() {
    let result = VideoModerationResult::new(
        SafetySignals::default(),
        VisualAssessment::default().with_low_quality(true),
    );
    assert!(!result.is_flagged());
}

#[test]
fn audio_with_pii_is_flagged() {
    let result = AudioModerationResult::new(SafetySignals::new().with_pii(true), "hello");
    assert!(result.is_flagged());
    assert_eq!(result.transcription(), "hello");
}

#[test]
fn every_default_is_clean() {
    let results: Vec<AnyModerationResult> = vec![
        TextModerationResult::default().into(),
        ImageModerationResult::default().into(),
        VideoModerationResult::default().into(),
        AudioModerationResult::default().into(),
    ];

    for result in results {
        assert!(!result.is_flagged(), "{} default", result.modality());
        assert_eq!(result.rationale(), "");
        assert!(!result.contains_pii());
        assert!(!result.is_unfriendly());
        assert!(!result.is_unprofessional());
    }
}
