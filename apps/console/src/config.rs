//! # Console Configuration
//!
//! Display settings for the console, loaded once at startup.
//!
//! ## Configuration Sources (later overrides earlier)
//! 1. Defaults (this file)
//! 2. Config file (`stockroom.toml`)
//! 3. Environment variables (`STOCKROOM_*`)
//!
//! ## Example Config File
//! ```toml
//! store_name = "Hardware Depot"
//! subtitle = "Back room stock"
//! currency_symbol = "€"
//! currency_decimals = 2
//! log_filter = "info"
//! ```
//!
//! Configuration is read-only after loading; the console never writes it.

use std::path::PathBuf;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Environment variable naming an explicit config file.
pub const CONFIG_PATH_ENV: &str = "STOCKROOM_CONFIG";

/// Largest number of decimals the currency formatter will print.
pub const MAX_CURRENCY_DECIMALS: u8 = 6;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the configuration was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Parsed from this file.
    File(PathBuf),
    /// This path was checked but no file exists there.
    Missing(PathBuf),
    /// No config path could be determined.
    Defaults,
}

/// A loaded configuration plus what happened while loading it.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedConfig {
    pub config: ConsoleConfig,
    pub source: ConfigSource,
    /// Non-fatal problems, e.g. an unparsable environment override.
    pub warnings: Vec<String>,
}

impl LoadedConfig {
    /// Falls back to defaults after a failed load.
    pub fn defaults() -> Self {
        LoadedConfig {
            config: ConsoleConfig::default(),
            source: ConfigSource::Defaults,
            warnings: Vec::new(),
        }
    }

    /// Emits the load outcome. Call once tracing is initialized.
    pub fn log(&self) {
        match &self.source {
            ConfigSource::File(path) => info!(?path, "Loaded console config from file"),
            ConfigSource::Missing(path) => debug!(?path, "Config file not found, using defaults"),
            ConfigSource::Defaults => debug!("No config path available, using defaults"),
        }
        for warning in &self.warnings {
            warn!("{}", warning);
        }
    }
}

/// Console configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    /// Shown in the welcome banner and the menu header.
    pub store_name: String,

    /// Optional second banner line.
    pub subtitle: Option<String>,

    /// Currency symbol (for display)
    pub currency_symbol: String,

    /// Number of decimal places for prices and totals
    pub currency_decimals: u8,

    /// Default `tracing` filter when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        ConsoleConfig {
            store_name: "Stockroom Inventory".to_string(),
            subtitle: None,
            currency_symbol: "$".to_string(),
            currency_decimals: 2,
            log_filter: "warn".to_string(),
        }
    }
}

impl ConsoleConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// `env` looks up environment variables (`std::env::var` in production).
    /// A missing config file is not an error; defaults are used instead.
    ///
    /// Nothing is logged here: tracing is usually not initialized yet, so
    /// the outcome is carried in [`LoadedConfig`] and logged by the caller.
    pub fn load_with_env<F>(config_path: Option<PathBuf>, env: F) -> ConfigResult<LoadedConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut warnings = Vec::new();

        let path = config_path
            .or_else(|| env(CONFIG_PATH_ENV).map(PathBuf::from))
            .or_else(Self::default_config_path);

        let source = match path {
            Some(path) if path.exists() => {
                let contents = std::fs::read_to_string(&path).map_err(|source| {
                    ConfigError::Read {
                        path: path.clone(),
                        source,
                    }
                })?;
                config = Self::from_toml(&contents)?;
                ConfigSource::File(path)
            }
            Some(path) => ConfigSource::Missing(path),
            None => ConfigSource::Defaults,
        };

        config.apply_env_overrides(&env, &mut warnings);
        config.validate()?;

        Ok(LoadedConfig {
            config,
            source,
            warnings,
        })
    }

    /// Parses a TOML document. Missing keys fall back to defaults.
    pub fn from_toml(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name cannot be empty".into()));
        }

        if self.currency_decimals > MAX_CURRENCY_DECIMALS {
            return Err(ConfigError::Invalid(format!(
                "currency_decimals must be at most {}, got {}",
                MAX_CURRENCY_DECIMALS, self.currency_decimals
            )));
        }

        Ok(())
    }

    /// Applies environment variable overrides.
    ///
    /// ## Environment Variables
    /// - `STOCKROOM_STORE_NAME`: Override store name
    /// - `STOCKROOM_CURRENCY_SYMBOL`: Override currency symbol
    /// - `STOCKROOM_CURRENCY_DECIMALS`: Override decimal places
    ///
    /// Unparsable values are skipped and recorded in `warnings`.
    fn apply_env_overrides<F>(&mut self, env: &F, warnings: &mut Vec<String>)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = env("STOCKROOM_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(symbol) = env("STOCKROOM_CURRENCY_SYMBOL") {
            self.currency_symbol = symbol;
        }

        if let Some(decimals) = env("STOCKROOM_CURRENCY_DECIMALS") {
            match decimals.parse::<u8>() {
                Ok(d) => self.currency_decimals = d,
                Err(_) => warnings.push(format!(
                    "Ignoring unparsable STOCKROOM_CURRENCY_DECIMALS '{}'",
                    decimals
                )),
            }
        }
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "stockroom", "stockroom")
            .map(|dirs| dirs.config_dir().join("stockroom.toml"))
    }

    /// Formats an amount as a currency string.
    ///
    /// ## Example
    /// ```rust
    /// use stockroom_console::config::ConsoleConfig;
    ///
    /// let config = ConsoleConfig::default();
    /// assert_eq!(config.format_currency(12.5), "$12.50");
    /// ```
    pub fn format_currency(&self, amount: f64) -> String {
        let decimals = usize::from(self.currency_decimals);
        let sign = if amount < 0.0 { "-" } else { "" };
        format!(
            "{}{}{:.*}",
            sign,
            self.currency_symbol,
            decimals,
            amount.abs()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ConsoleConfig::default();
        assert_eq!(config.store_name, "Stockroom Inventory");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.currency_decimals, 2);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_toml_partial() {
        let config = ConsoleConfig::from_toml("store_name = \"Hardware Depot\"\n").unwrap();
        assert_eq!(config.store_name, "Hardware Depot");
        assert_eq!(config.currency_symbol, "$");
        assert_eq!(config.subtitle, None);
    }

    #[test]
    fn test_from_toml_full() {
        let toml_str = r#"
            store_name = "Hardware Depot"
            subtitle = "Back room"
            currency_symbol = "€"
            currency_decimals = 3
            log_filter = "debug"
        "#;
        let config = ConsoleConfig::from_toml(toml_str).unwrap();
        assert_eq!(config.subtitle.as_deref(), Some("Back room"));
        assert_eq!(config.currency_decimals, 3);
        assert_eq!(config.log_filter, "debug");
    }

    #[test]
    fn test_from_toml_rejects_bad_types() {
        let err = ConsoleConfig::from_toml("currency_decimals = \"two\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_validation() {
        let mut config = ConsoleConfig::default();

        config.store_name = "   ".to_string();
        assert!(config.validate().is_err());

        config.store_name = "Depot".to_string();
        config.currency_decimals = MAX_CURRENCY_DECIMALS + 1;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn test_format_currency() {
        let config = ConsoleConfig::default();
        assert_eq!(config.format_currency(0.0), "$0.00");
        assert_eq!(config.format_currency(41.0), "$41.00");
        assert_eq!(config.format_currency(5.5), "$5.50");
        assert_eq!(config.format_currency(-3.25), "-$3.25");
    }

    #[test]
    fn test_format_currency_custom() {
        let config = ConsoleConfig {
            currency_symbol: "€".to_string(),
            currency_decimals: 0,
            ..ConsoleConfig::default()
        };
        assert_eq!(config.format_currency(1234.0), "€1234");
    }

    // =========================================================================
    // Loading
    // =========================================================================

    fn no_env(_: &str) -> Option<String> {
        None
    }

    /// Writes `contents` to a per-test file under the system temp dir.
    fn write_temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "stockroom-{}-{}.toml",
            name,
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_reads_toml_file() {
        let path = write_temp_config(
            "load-file",
            "store_name = \"Hardware Depot\"\ncurrency_symbol = \"€\"\n",
        );
        let loaded = ConsoleConfig::load_with_env(Some(path.clone()), no_env).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.config.store_name, "Hardware Depot");
        assert_eq!(loaded.config.currency_symbol, "€");
        assert_eq!(loaded.config.currency_decimals, 2);
        assert_eq!(loaded.source, ConfigSource::File(path));
        assert!(loaded.warnings.is_empty());
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = std::env::temp_dir().join("stockroom-does-not-exist.toml");
        let loaded = ConsoleConfig::load_with_env(Some(path.clone()), no_env).unwrap();

        assert_eq!(loaded.config, ConsoleConfig::default());
        assert_eq!(loaded.source, ConfigSource::Missing(path));
    }

    #[test]
    fn test_load_path_from_env() {
        let path = write_temp_config("load-env-path", "store_name = \"From Env Path\"\n");
        let env_path = path.to_string_lossy().into_owned();
        let loaded = ConsoleConfig::load_with_env(None, |key| {
            (key == CONFIG_PATH_ENV).then(|| env_path.clone())
        })
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.config.store_name, "From Env Path");
    }

    #[test]
    fn test_load_env_overrides_file() {
        let path = write_temp_config(
            "load-env-override",
            "store_name = \"File Name\"\ncurrency_decimals = 3\n",
        );
        let loaded = ConsoleConfig::load_with_env(Some(path.clone()), |key| match key {
            "STOCKROOM_STORE_NAME" => Some("Env Name".to_string()),
            "STOCKROOM_CURRENCY_SYMBOL" => Some("£".to_string()),
            "STOCKROOM_CURRENCY_DECIMALS" => Some("1".to_string()),
            _ => None,
        })
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(loaded.config.store_name, "Env Name");
        assert_eq!(loaded.config.currency_symbol, "£");
        assert_eq!(loaded.config.currency_decimals, 1);
    }

    #[test]
    fn test_load_unparsable_decimals_is_warned_and_ignored() {
        let path = std::env::temp_dir().join("stockroom-no-file-decimals.toml");
        let loaded = ConsoleConfig::load_with_env(Some(path), |key| {
            (key == "STOCKROOM_CURRENCY_DECIMALS").then(|| "two".to_string())
        })
        .unwrap();

        assert_eq!(loaded.config.currency_decimals, 2);
        assert_eq!(loaded.warnings.len(), 1);
        assert!(loaded.warnings[0].contains("STOCKROOM_CURRENCY_DECIMALS 'two'"));
    }

    #[test]
    fn test_load_validates_after_env_override() {
        let path = std::env::temp_dir().join("stockroom-no-file-validate.toml");
        let err = ConsoleConfig::load_with_env(Some(path.clone()), |key| {
            (key == "STOCKROOM_STORE_NAME").then(|| "   ".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));

        let err = ConsoleConfig::load_with_env(Some(path), |key| {
            (key == "STOCKROOM_CURRENCY_DECIMALS").then(|| "9".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_load_rejects_malformed_file() {
        let path = write_temp_config("load-malformed", "store_name = [\n");
        let err = ConsoleConfig::load_with_env(Some(path.clone()), no_env).unwrap_err();
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
