//! Moderation records for multimodal content
//!
//! Typed outcomes of safety checks on text, image, video and audio content.
//! Every record derives its `is_flagged` field from its individual checks at
//! construction, so a record handed to a downstream consumer is always
//! internally consistent. Records built from untyped payloads (for example the
//! JSON answer of a content analysis model) go through [`parsing`], which
//! type-checks every field and recomputes the flag.

pub mod entities;
pub mod errors;
pub mod parsing;
pub mod schema;
pub mod settings;
pub mod value_objects;

pub use entities::*;
pub use errors::{ErrorKind, ModerationError, Result};
pub use parsing::{ParseOptions, UnknownFieldPolicy, from_json_str, from_value};
pub use schema::{FieldKind, FieldSpec, ModerationRecord, RecordSchema};
pub use settings::ModerationSettings;
pub use value_objects::*;
