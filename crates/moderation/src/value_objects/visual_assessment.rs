//! Visual assessment for image and video content

use serde::{Deserialize, Serialize};

use crate::parsing::FieldValues;
use crate::schema::field;

/// Checks that only apply to visual content
///
/// `is_low_quality` is informational and never flags a result.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct VisualAssessment {
    /// Whether the content is disturbing
    pub is_disturbing: bool,
    /// Whether the content is low quality
    pub is_low_quality: bool,
}

impl VisualAssessment {
    /// Set the disturbing flag
    #[must_use]
    pub const fn with_disturbing(mut self, is_disturbing: bool) -> Self {
        self.is_disturbing = is_disturbing;
        self
    }

    /// Set the low quality flag
    #[must_use]
    pub const fn with_low_quality(mut self, is_low_quality: bool) -> Self {
        self.is_low_quality = is_low_quality;
        self
    }

    pub(crate) fn take_from(fields: &FieldValues) -> Self {
        Self {
            is_disturbing: fields.flag(field::IS_DISTURBING),
            is_low_quality: fields.flag(field::IS_LOW_QUALITY),
        }
    }
}
