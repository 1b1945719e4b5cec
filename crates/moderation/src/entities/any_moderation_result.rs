//! Moderation result of any modality
//!
//! # Examples
//!
//! ```
//! use moderation::{AnyModerationResult, Modality, ModerationOutcome};
//!
//! let json = r#"{"modality": "audio", "transcription": "hello", "contains_pii": true}"#;
//! let result: AnyModerationResult = serde_json::from_str(json).unwrap();
//!
//! assert_eq!(result.modality(), Modality::Audio);
//! assert!(result.is_flagged());
//! assert_eq!(result.as_audio().map(|a| a.transcription()), Some("hello"));
//! ```

use serde::{Deserialize, Serialize};

use super::{
    AudioModerationResult, ImageModerationResult, ModerationOutcome, TextModerationResult,
    VideoModerationResult,
};
use crate::value_objects::{FlagReason, Modality, SafetySignals};

/// A moderation result tagged with its modality
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "modality", rename_all = "snake_case")]
pub enum AnyModerationResult {
    /// Text result
    Text(TextModerationResult),
    /// Image result
    Image(ImageModerationResult),
    /// Video result
    Video(VideoModerationResult),
    /// Audio result
    Audio(AudioModerationResult),
}

impl AnyModerationResult {
    /// The modality of the wrapped result
    #[must_use]
    pub const fn modality(&self) -> Modality {
        match self {
            Self::Text(_) => Modality::Text,
            Self::Image(_) => Modality::Image,
            Self::Video(_) => Modality::Video,
            Self::Audio(_) => Modality::Audio,
        }
    }

    /// The text result, if this is one
    #[must_use]
    pub const fn as_text(&self) -> Option<&TextModerationResult> {
        match self {
            Self::Text(result) => Some(result),
            _ => None,
        }
    }

    /// The image result, if this is one
    #[must_use]
    pub const fn as_image(&self) -> Option<&ImageModerationResult> {
        match self {
            Self::Image(result) => Some(result),
            _ => None,
        }
    }

    /// The video result, if this is one
    #[must_use]
    pub const fn as_video(&self) -> Option<&VideoModerationResult> {
        match self {
            Self::Video(result) => Some(result),
            _ => None,
        }
    }

    /// The audio result, if this is one
    #[must_use]
    pub const fn as_audio(&self) -> Option<&AudioModerationResult> {
        match self {
            Self::Audio(result) => Some(result),
            _ => None,
        }
    }

    fn outcome(&self) -> &dyn ModerationOutcome {
        match self {
            Self::Text(result) => result,
            Self::Image(result) => result,
            Self::Video(result) => result,
            Self::Audio(result) => result,
        }
    }
}

impl ModerationOutcome for AnyModerationResult {
    fn signals(&self) -> &SafetySignals {
        self.outcome().signals()
    }

    fn is_flagged(&self) -> bool {
        self.outcome().is_flagged()
    }

    fn flag_reasons(&self) -> Vec<FlagReason> {
        self.outcome().flag_reasons()
    }
}

impl From<TextModerationResult> for AnyModerationResult {
    fn from(result: TextModerationResult) -> Self {
        Self::Text(result)
    }
}

impl From<ImageModerationResult> for AnyModerationResult {
    fn from(result: ImageModerationResult) -> Self {
        Self::Image(result)
    }
}

impl From<VideoModerationResult> for AnyModerationResult {
    fn from(result: VideoModerationResult) -> Self {
        Self::Video(result)
    }
}

impl From<AudioModerationResult> for AnyModerationResult {
    fn from(result: AudioModerationResult) -> Self {
        Self::Audio(result)
    }
}
