use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use nibbles_inventory::ShelfLifeRules;
use nibbles_matching::{LocationHints, SynonymTable};
use serde::Deserialize;
use std::env;

use crate::error::AppError;

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct Config {
    pub observability: ObservabilityConfig,
    /// Per-category ageing thresholds.
    pub shelf_life: ShelfLifeRules,
    /// Alternate spelling -> canonical term.
    pub synonyms: SynonymTable,
    /// Canonical term -> storage location.
    pub location_hints: LocationHints,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (NIBBLES__OBSERVABILITY__LOG_LEVEL, etc.)
    /// 2. Config file specified by path
    /// 3. Seed tables and default thresholds
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Config file is optional; the serde defaults carry the seed tables
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NIBBLES")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    /// Validate invariants that serde cannot express.
    pub fn validate(&self) -> Result<(), AppError> {
        self.shelf_life.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_carry_seed_tables() {
        let config = Config::default();
        assert!(!config.synonyms.is_empty());
        assert!(!config.location_hints.is_empty());
        assert_eq!(config.shelf_life.meat_fish.old_days, Some(2));
        assert_eq!(config.observability.log_level, "info");
        assert!(config.validate().is_ok());
    }
}
