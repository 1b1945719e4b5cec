//! Moderation settings
//!
//! Loaded from an optional `moderation.toml` in the working directory and
//! `MODERATION_*` environment variables, later sources winning:
//!
//! ```toml
//! # moderation.toml
//! unknown_fields = "ignore"
//! ```
//!
//! `MODERATION_UNKNOWN_FIELDS=reject` overrides the file.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::parsing::{ParseOptions, UnknownFieldPolicy};

/// Settings for building moderation records from external payloads
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ModerationSettings {
    /// Handling of fields a record does not declare
    pub unknown_fields: UnknownFieldPolicy,
}

impl ModerationSettings {
    /// Load settings from `moderation.toml` and the environment
    pub fn load() -> Result<Self, config::ConfigError> {
        Self::load_from(
            config::Environment::with_prefix("MODERATION")
                .prefix_separator("_")
                .separator("__"),
        )
    }

    /// Load settings from `moderation.toml` with `env` layered on top
    pub fn load_from(env: config::Environment) -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder()
            .set_default("unknown_fields", UnknownFieldPolicy::default().to_string())?
            // Load from file if exists
            .add_source(config::File::with_name("moderation").required(false))
            // Override with environment variables (e.g., MODERATION_UNKNOWN_FIELDS)
            .add_source(env);

        let settings: Self = builder.build()?.try_deserialize()?;
        info!(unknown_fields = %settings.unknown_fields, "Loaded moderation settings");
        Ok(settings)
    }

    /// Parse settings from a TOML document
    pub fn from_toml_str(toml: &str) -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize()
    }

    /// Parse options matching these settings
    #[must_use]
    pub const fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            unknown_fields: self.unknown_fields,
        }
    }
}
