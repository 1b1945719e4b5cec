//! Field tables describing each moderation record
//!
//! Every record type publishes a [`RecordSchema`] listing its fields, their
//! kinds and descriptions. The table drives dynamic construction in
//! [`crate::parsing`] and can be rendered as a JSON Schema document for
//! requesting structured output from a content analysis model.
//!
//! # Examples
//!
//! ```
//! use moderation::{ImageModerationResult, ModerationRecord};
//!
//! let schema = ImageModerationResult::schema();
//! assert!(schema.validate().is_ok());
//! assert_eq!(schema.flag_sources().count(), 4);
//!
//! let json = schema.json_schema();
//! assert_eq!(json["properties"]["is_disturbing"]["type"], "boolean");
//! ```

use std::collections::HashSet;

use serde_json::{Map, Value, json};

use crate::entities::ModerationOutcome;
use crate::errors::{ModerationError, Result};
use crate::parsing::FieldValues;
use crate::value_objects::Modality;

/// Field names used across record types
pub mod field {
    /// Derived aggregate flag
    pub const IS_FLAGGED: &str = "is_flagged";
    /// Free-text explanation
    pub const RATIONALE: &str = "rationale";
    /// PII check
    pub const CONTAINS_PII: &str = "contains_pii";
    /// Tone check
    pub const IS_UNFRIENDLY: &str = "is_unfriendly";
    /// Professionalism check
    pub const IS_UNPROFESSIONAL: &str = "is_unprofessional";
    /// Visual content check
    pub const IS_DISTURBING: &str = "is_disturbing";
    /// Visual quality (informational)
    pub const IS_LOW_QUALITY: &str = "is_low_quality";
    /// Audio transcription
    pub const TRANSCRIPTION: &str = "transcription";
}

/// Value type of a record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    /// Strict boolean, no coercion from numbers or strings
    Bool,
    /// UTF-8 text
    Text,
}

impl FieldKind {
    /// JSON Schema type name
    #[must_use]
    pub const fn json_type(&self) -> &'static str {
        match self {
            Self::Bool => "boolean",
            Self::Text => "string",
        }
    }

    /// Phrase used in validation errors
    #[must_use]
    pub const fn expected(&self) -> &'static str {
        match self {
            Self::Bool => "a boolean",
            Self::Text => "a string",
        }
    }

    /// Value a field of this kind takes when not supplied
    #[must_use]
    pub fn default_value(&self) -> Value {
        match self {
            Self::Bool => Value::Bool(false),
            Self::Text => Value::String(String::new()),
        }
    }
}

/// Description of a single record field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    /// Wire name of the field
    pub name: &'static str,
    /// Value type
    pub kind: FieldKind,
    /// Human-readable description
    pub description: &'static str,
    /// Whether a `true` value flags the record
    pub flag_source: bool,
}

impl FieldSpec {
    /// A boolean field that does not affect `is_flagged`
    #[must_use]
    pub const fn boolean(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Bool,
            description,
            flag_source: false,
        }
    }

    /// A boolean field that flags the record when `true`
    #[must_use]
    pub const fn flag_source(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Bool,
            description,
            flag_source: true,
        }
    }

    /// A text field
    #[must_use]
    pub const fn text(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: FieldKind::Text,
            description,
            flag_source: false,
        }
    }
}

pub(crate) const FLAGGED: FieldSpec = FieldSpec::boolean(
    field::IS_FLAGGED,
    "Whether the content was flagged by any of the safety checks",
);
pub(crate) const RATIONALE: FieldSpec = FieldSpec::text(
    field::RATIONALE,
    "Explanation of what was harmful and why",
);
pub(crate) const CONTAINS_PII: FieldSpec = FieldSpec::flag_source(
    field::CONTAINS_PII,
    "Whether the content contains any personally-identifiable information (PII)",
);
pub(crate) const UNFRIENDLY: FieldSpec = FieldSpec::flag_source(
    field::IS_UNFRIENDLY,
    "Whether unfriendly tone or content was detected",
);
pub(crate) const UNPROFESSIONAL: FieldSpec = FieldSpec::flag_source(
    field::IS_UNPROFESSIONAL,
    "Whether unprofessional tone or content was detected",
);

/// Fields every record must declare, exactly as given here
pub(crate) const BASE_FIELDS: [FieldSpec; 5] =
    [FLAGGED, RATIONALE, CONTAINS_PII, UNFRIENDLY, UNPROFESSIONAL];

/// Field table of a moderation record type
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordSchema {
    /// Type name used in errors and logs
    pub name: &'static str,
    /// Content modality, `None` for the modality-agnostic base record
    pub modality: Option<Modality>,
    /// Declared fields in wire order
    pub fields: &'static [FieldSpec],
}

impl RecordSchema {
    /// Look up a field by name
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that flag the record when `true`
    pub fn flag_sources(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields.iter().filter(|f| f.flag_source)
    }

    /// Names of all declared fields
    pub fn field_names(&self) -> impl Iterator<Item = &'static str> {
        self.fields.iter().map(|f| f.name)
    }

    /// Check that the table is internally consistent
    ///
    /// # Errors
    ///
    /// Returns [`ModerationError::InvalidSchema`] if a field is declared twice,
    /// a base field is missing or redefined, a flag source is not boolean, or
    /// visual fields appear on a record without a visual modality.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.fields.len());
        for spec in self.fields {
            if !seen.insert(spec.name) {
                return Err(ModerationError::invalid_schema(
                    self.name,
                    format!("field `{}` is declared more than once", spec.name),
                ));
            }
            if spec.flag_source && spec.kind != FieldKind::Bool {
                return Err(ModerationError::invalid_schema(
                    self.name,
                    format!("flag source `{}` must be a boolean", spec.name),
                ));
            }
        }

        if !self.modality.is_some_and(|m| m.is_visual()) {
            for name in [field::IS_DISTURBING, field::IS_LOW_QUALITY] {
                if self.field(name).is_some() {
                    return Err(ModerationError::invalid_schema(
                        self.name,
                        format!("visual field `{name}` requires an image or video modality"),
                    ));
                }
            }
        }

        for base in &BASE_FIELDS {
            match self.field(base.name) {
                None => {
                    return Err(ModerationError::invalid_schema(
                        self.name,
                        format!("missing base field `{}`", base.name),
                    ));
                },
                Some(spec) if spec.kind != base.kind || spec.flag_source != base.flag_source => {
                    return Err(ModerationError::invalid_schema(
                        self.name,
                        format!("base field `{}` is redefined", base.name),
                    ));
                },
                Some(_) => {},
            }
        }

        Ok(())
    }

    /// Render the table as a JSON Schema object
    ///
    /// `is_flagged` is marked `readOnly` since any supplied value is
    /// recomputed.
    #[must_use]
    pub fn json_schema(&self) -> Value {
        let mut properties = Map::new();
        for spec in self.fields {
            let mut property = json!({
                "type": spec.kind.json_type(),
                "description": spec.description,
                "default": spec.kind.default_value(),
            });
            if spec.name == field::IS_FLAGGED {
                property["readOnly"] = Value::Bool(true);
            }
            properties.insert(spec.name.to_string(), property);
        }

        json!({
            "title": self.name,
            "type": "object",
            "properties": properties,
            "additionalProperties": false,
        })
    }
}

/// A moderation record type with a published field table
///
/// Implemented by every record in this crate. [`crate::parsing::from_value`]
/// uses it to build records from untyped payloads.
pub trait ModerationRecord: ModerationOutcome + Sized {
    /// The record's field table
    fn schema() -> &'static RecordSchema;

    /// Build the record from type-checked field values
    ///
    /// Missing fields take their defaults and `is_flagged` is recomputed.
    fn from_fields(fields: FieldValues) -> Self;
}
