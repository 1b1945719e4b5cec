//! Value Objects - Immutable, identity-less moderation primitives

mod flag_reason;
mod modality;
mod safety_signals;
mod visual_assessment;

pub use flag_reason::FlagReason;
pub use modality::Modality;
pub use safety_signals::SafetySignals;
pub use visual_assessment::VisualAssessment;
