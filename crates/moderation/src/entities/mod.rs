//! Moderation records - One per content modality plus the shared base

mod any_moderation_result;
mod audio_moderation_result;
mod image_moderation_result;
mod moderation_result;
mod text_moderation_result;
mod video_moderation_result;

pub use any_moderation_result::AnyModerationResult;
pub use audio_moderation_result::AudioModerationResult;
pub use image_moderation_result::ImageModerationResult;
pub use moderation_result::{ModerationOutcome, ModerationResult};
pub use text_moderation_result::TextModerationResult;
pub use video_moderation_result::VideoModerationResult;
