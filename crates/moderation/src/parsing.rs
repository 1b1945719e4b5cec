//! Building moderation records from untyped payloads
//!
//! Content analysis models usually hand back JSON. [`from_value`] checks such a
//! payload against the record's [`RecordSchema`](crate::schema::RecordSchema):
//! every value must have the declared type (no truthy coercion), unknown
//! fields follow the configured [`UnknownFieldPolicy`], and a supplied
//! `is_flagged` is discarded in favour of the derived value.
//!
//! # Examples
//!
//! ```
//! use moderation::parsing::{ParseOptions, from_value};
//! use moderation::{ImageModerationResult, ModerationOutcome};
//! use serde_json::json;
//!
//! let payload = json!({ "is_flagged": false, "is_disturbing": true });
//! let result: ImageModerationResult = from_value(payload, &ParseOptions::strict()).unwrap();
//! assert!(result.is_flagged());
//!
//! let payload = json!({ "contains_pii": "yes" });
//! assert!(from_value::<ImageModerationResult>(payload, &ParseOptions::strict()).is_err());
//! ```

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::{debug, trace};

use crate::errors::{ModerationError, Result};
use crate::schema::{FieldKind, FieldSpec, ModerationRecord, field};

/// What to do with fields a record does not declare
///
/// Deserializes through [`FromStr`](std::str::FromStr), so settings files and
/// environment variables accept the same case-insensitive names and aliases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum UnknownFieldPolicy {
    /// Fail with [`ModerationError::UnknownField`]
    #[default]
    Reject,
    /// Drop the field and continue
    Ignore,
}

impl fmt::Display for UnknownFieldPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::Ignore => write!(f, "ignore"),
        }
    }
}

impl std::str::FromStr for UnknownFieldPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "reject" | "strict" => Ok(Self::Reject),
            "ignore" | "permissive" => Ok(Self::Ignore),
            _ => Err(format!(
                "Invalid unknown field policy: {s}. Use 'reject' or 'ignore'"
            )),
        }
    }
}

impl TryFrom<String> for UnknownFieldPolicy {
    type Error = String;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

/// Options for [`from_value`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ParseOptions {
    /// Handling of undeclared fields
    pub unknown_fields: UnknownFieldPolicy,
}

impl ParseOptions {
    /// Reject undeclared fields (the default)
    #[must_use]
    pub const fn strict() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Reject,
        }
    }

    /// Drop undeclared fields
    #[must_use]
    pub const fn permissive() -> Self {
        Self {
            unknown_fields: UnknownFieldPolicy::Ignore,
        }
    }
}

/// A type-checked field value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// Boolean field
    Bool(bool),
    /// Text field
    Text(String),
}

impl FieldValue {
    fn from_json(spec: &FieldSpec, value: Value) -> Result<Self> {
        match (spec.kind, value) {
            (FieldKind::Bool, Value::Bool(b)) => Ok(Self::Bool(b)),
            (FieldKind::Text, Value::String(s)) => Ok(Self::Text(s)),
            (kind, other) => Err(ModerationError::invalid_type(
                spec.name,
                kind.expected(),
                describe(&other),
            )),
        }
    }
}

/// Field values that passed type checking, keyed by field name
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldValues {
    values: HashMap<&'static str, FieldValue>,
}

impl FieldValues {
    /// Boolean value of a field, `false` when not supplied
    #[must_use]
    pub fn flag(&self, name: &str) -> bool {
        matches!(self.values.get(name), Some(FieldValue::Bool(true)))
    }

    /// Remove and return a text field, empty when not supplied
    pub fn take_text(&mut self, name: &str) -> String {
        match self.values.remove(name) {
            Some(FieldValue::Text(text)) => text,
            _ => String::new(),
        }
    }

    fn insert(&mut self, name: &'static str, value: FieldValue) {
        self.values.insert(name, value);
    }
}

/// Build a record from a JSON value
///
/// # Errors
///
/// Returns a validation error if `value` is not an object, a field has the
/// wrong type, or an unknown field is present under
/// [`UnknownFieldPolicy::Reject`]. Returns a schema error if the record's own
/// field table is inconsistent.
pub fn from_value<T: ModerationRecord>(value: Value, options: &ParseOptions) -> Result<T> {
    let schema = T::schema();
    schema.validate()?;

    let map = match value {
        Value::Object(map) => map,
        other => {
            return Err(ModerationError::NotAnObject {
                record: schema.name,
                found: describe(&other),
            });
        },
    };

    let mut fields = FieldValues::default();
    let mut supplied_flag = None;

    for (key, value) in map {
        let Some(spec) = schema.field(&key) else {
            match options.unknown_fields {
                UnknownFieldPolicy::Reject => {
                    return Err(ModerationError::unknown_field(schema.name, key));
                },
                UnknownFieldPolicy::Ignore => {
                    debug!(record = schema.name, field = %key, "Ignoring unknown moderation field");
                    continue;
                },
            }
        };

        let parsed = FieldValue::from_json(spec, value)?;
        if spec.name == field::IS_FLAGGED {
            supplied_flag = Some(parsed == FieldValue::Bool(true));
        } else {
            fields.insert(spec.name, parsed);
        }
    }

    let record = T::from_fields(fields);

    if let Some(supplied) = supplied_flag.filter(|&s| s != record.is_flagged()) {
        debug!(
            record = schema.name,
            supplied,
            derived = record.is_flagged(),
            "Discarding supplied is_flagged"
        );
    }
    trace!(record = schema.name, is_flagged = record.is_flagged(), "Built moderation record");

    Ok(record)
}

/// Build a record from a JSON string
///
/// # Errors
///
/// Returns [`ModerationError::MalformedPayload`] if `input` is not valid JSON,
/// otherwise the same errors as [`from_value`].
pub fn from_json_str<T: ModerationRecord>(input: &str, options: &ParseOptions) -> Result<T> {
    let value: Value = serde_json::from_str(input).map_err(|e| ModerationError::MalformedPayload {
        record: T::schema().name,
        reason: e.to_string(),
    })?;
    from_value(value, options)
}

/// Strict `Deserialize` shared by every record type
pub(crate) fn deserialize_record<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: ModerationRecord,
{
    let value = Value::deserialize(deserializer)?;
    from_value(value, &ParseOptions::strict()).map_err(serde::de::Error::custom)
}

/// Longest string prefix quoted in validation errors
const MAX_QUOTED_CHARS: usize = 64;

fn describe(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => format!("boolean {b}"),
        Value::Number(n) => format!("number {n}"),
        Value::String(s) if s.chars().count() > MAX_QUOTED_CHARS => {
            let prefix: String = s.chars().take(MAX_QUOTED_CHARS).collect();
            format!("string {prefix:?}...")
        },
        Value::String(s) => format!("string {s:?}"),
        Value::Array(_) => "array".to_string(),
        Value::Object(_) => "object".to_string(),
    }
}
