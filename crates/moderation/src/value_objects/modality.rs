//! Content modality - Identifies what kind of content was moderated

use serde::{Deserialize, Serialize};
use std::fmt;

/// Kind of content a moderation result describes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Modality {
    /// Written text (chat messages, posts, comments)
    Text,
    /// Still images
    Image,
    /// Video clips
    Video,
    /// Audio recordings
    Audio,
}

impl Modality {
    /// Get the wire name for this modality
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Image => "image",
            Self::Video => "video",
            Self::Audio => "audio",
        }
    }

    /// Whether results for this modality carry a visual assessment
    #[must_use]
    pub const fn is_visual(&self) -> bool {
        matches!(self, Self::Image | Self::Video)
    }

    /// All modalities in declaration order
    #[must_use]
    pub const fn all() -> [Self; 4] {
        [Self::Text, Self::Image, Self::Video, Self::Audio]
    }
}

impl fmt::Display for Modality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Modality {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "image" => Ok(Self::Image),
            "video" => Ok(Self::Video),
            "audio" => Ok(Self::Audio),
            _ => Err(format!(
                "Invalid modality: {s}. Use 'text', 'image', 'video' or 'audio'"
            )),
        }
    }
}
