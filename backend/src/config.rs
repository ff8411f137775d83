//! Server settings.
//!
//! Values come from built-in defaults, then an optional `timetable.toml` in
//! the working directory, then `TIMETABLE__*` environment variables (a `.env`
//! file is loaded first when present). Nested keys use `__` as separator, e.g.
//! `TIMETABLE__SERVER__PORT=8080`.

use anyhow::{bail, Context, Result};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, Environment, File};
use serde::Deserialize;

use crate::domain::models::entry::MAX_HORIZON;
use crate::domain::EntryPolicy;

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Settings {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub recurrence: RecurrenceConfig,
    pub validation: ValidationConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Origin allowed to call the API from a browser
    pub cors_origin: String,
}

impl ServerConfig {
    /// Address to bind, in the form "host:port"
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LoggingConfig {
    /// Default filter directive, overridden by `RUST_LOG`
    pub level: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecurrenceConfig {
    /// Total occurrences for entries submitted as "weekly" or "biweekly"
    pub recurrence_horizon: u32,
    /// Total occurrences for entries submitted with `recurring: true`
    pub legacy_weekly_horizon: u32,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ValidationConfig {
    /// Reject entries whose date or time does not parse
    pub strict_formats: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 3000,
                cors_origin: "http://localhost:8080".to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            recurrence: RecurrenceConfig {
                recurrence_horizon: 12,
                legacy_weekly_horizon: 5,
            },
            validation: ValidationConfig { strict_formats: true },
        }
    }
}

impl Settings {
    /// Load settings from the config file and environment on top of the defaults.
    ///
    /// ## Errors
    /// Returns an error if a source cannot be read, a value has the wrong type,
    /// or a horizon is out of range.
    pub fn load() -> Result<Self> {
        let builder = Self::with_defaults()?
            .add_source(File::with_name("timetable").required(false))
            .add_source(
                Environment::with_prefix("TIMETABLE")
                    .prefix_separator("__")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            );
        Self::from_builder(builder)
    }

    fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
        let defaults = Self::default();
        Ok(Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.cors_origin", defaults.server.cors_origin)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("recurrence.recurrence_horizon", i64::from(defaults.recurrence.recurrence_horizon))?
            .set_default(
                "recurrence.legacy_weekly_horizon",
                i64::from(defaults.recurrence.legacy_weekly_horizon),
            )?
            .set_default("validation.strict_formats", defaults.validation.strict_formats)?)
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self> {
        let settings = builder
            .build()
            .context("Failed to read configuration")?
            .try_deserialize::<Settings>()
            .context("Invalid configuration")?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<()> {
        for (name, horizon) in [
            ("recurrence.recurrence_horizon", self.recurrence.recurrence_horizon),
            ("recurrence.legacy_weekly_horizon", self.recurrence.legacy_weekly_horizon),
        ] {
            if !(1..=MAX_HORIZON).contains(&horizon) {
                bail!("{} must be between 1 and {}, got {}", name, MAX_HORIZON, horizon);
            }
        }
        Ok(())
    }

    /// Entry acceptance rules derived from these settings
    pub fn entry_policy(&self) -> EntryPolicy {
        EntryPolicy {
            recurrence_horizon: self.recurrence.recurrence_horizon,
            legacy_weekly_horizon: self.recurrence.legacy_weekly_horizon,
            strict_formats: self.validation.strict_formats,
        }
    }
}

/// Load `.env` if present, then the layered settings.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();
    Settings::load()
}

#[cfg(test)]
mod tests {
    use super::*;
    use config::FileFormat;

    fn from_toml(toml: &str) -> Result<Settings> {
        let builder = Settings::with_defaults()?.add_source(File::from_str(toml, FileFormat::Toml));
        Settings::from_builder(builder)
    }

    #[test]
    fn test_defaults_match_builder_defaults() {
        let settings = from_toml("").unwrap();
        assert_eq!(settings, Settings::default());
        assert_eq!(settings.server.bind_address(), "127.0.0.1:3000");
    }

    #[test]
    fn test_file_overrides() {
        let settings = from_toml(
            r#"
            [server]
            port = 8080

            [recurrence]
            legacy_weekly_horizon = 4

            [validation]
            strict_formats = false
            "#,
        )
        .unwrap();

        assert_eq!(settings.server.port, 8080);
        assert_eq!(settings.server.host, "127.0.0.1");
        assert_eq!(
            settings.entry_policy(),
            EntryPolicy {
                recurrence_horizon: 12,
                legacy_weekly_horizon: 4,
                strict_formats: false,
            }
        );
    }

    #[test]
    fn test_horizon_out_of_range_is_rejected() {
        assert!(from_toml("[recurrence]\nrecurrence_horizon = 0").is_err());
        assert!(from_toml("[recurrence]\nlegacy_weekly_horizon = 53").is_err());
        assert!(from_toml("[recurrence]\nrecurrence_horizon = 52").is_ok());
    }

    #[test]
    fn test_wrong_type_is_rejected() {
        assert!(from_toml("[server]\nport = \"not a port\"").is_err());
    }
}
