//! # Configuration State
//!
//! Stores storefront configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`FURNIRO_*`)
//! 2. Config file (`storefront.toml`)
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use furniro_content::{FEATURED_LIMIT, RELATED_LIMIT};
use furniro_core::DEFAULT_CURRENCY;

use crate::error::{ConfigError, ConfigResult};

const CONFIG_FILE_NAME: &str = "storefront.toml";
const DISCOUNT_FILE_NAME: &str = "applied-discount.json";

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case")]
pub struct ConfigState {
    /// Store name shown in the header.
    pub store_name: String,

    /// Lowercase ISO 4217 code handed to the payment widget.
    pub currency: String,

    /// Products on the home page.
    pub featured_limit: usize,

    /// Products under "Related Products".
    pub related_limit: usize,

    /// JSON catalog for the in-memory backend. `None` uses the bundled one.
    pub catalog_path: Option<PathBuf>,

    /// Where the applied-discount marker lives. `None` uses the data dir.
    pub discount_path: Option<PathBuf>,

    /// `tracing` filter used when `RUST_LOG` is unset.
    pub log_filter: String,
}

impl Default for ConfigState {
    /// Returns default configuration suitable for development.
    fn default() -> Self {
        ConfigState {
            store_name: "Furniro".to_string(),
            currency: DEFAULT_CURRENCY.to_string(),
            featured_limit: FEATURED_LIMIT,
            related_limit: RELATED_LIMIT,
            catalog_path: None,
            discount_path: None,
            log_filter: "info,furniro=debug".to_string(),
        }
    }
}

impl ConfigState {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (`storefront.toml`)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> ConfigResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading storefront config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = Self::from_toml_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_overrides(|key| std::env::var(key).ok());
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns defaults if loading fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load storefront config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a TOML document; missing keys keep their defaults.
    pub fn from_toml_str(contents: &str) -> ConfigResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Saves configuration to file.
    pub fn save(&self, config_path: Option<PathBuf>) -> ConfigResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| ConfigError::Invalid("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Storefront config saved");
        Ok(())
    }

    /// Validates the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if self.store_name.trim().is_empty() {
            return Err(ConfigError::Invalid("store_name must not be empty".into()));
        }

        if self.currency.len() != 3 || !self.currency.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(ConfigError::Invalid(format!(
                "currency must be a lowercase three-letter code, got: {}",
                self.currency
            )));
        }

        if self.featured_limit == 0 || self.related_limit == 0 {
            return Err(ConfigError::Invalid(
                "featured_limit and related_limit must be greater than 0".into(),
            ));
        }

        Ok(())
    }

    /// Applies `FURNIRO_*` overrides read through `lookup`.
    fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(name) = lookup("FURNIRO_STORE_NAME") {
            self.store_name = name;
        }

        if let Some(currency) = lookup("FURNIRO_CURRENCY") {
            debug!(currency = %currency, "Overriding currency from environment");
            self.currency = currency.trim().to_lowercase();
        }

        if let Some(limit) = lookup("FURNIRO_FEATURED_LIMIT") {
            match limit.parse::<usize>() {
                Ok(n) => self.featured_limit = n,
                Err(_) => warn!(value = %limit, "Ignoring non-numeric FURNIRO_FEATURED_LIMIT"),
            }
        }

        if let Some(limit) = lookup("FURNIRO_RELATED_LIMIT") {
            match limit.parse::<usize>() {
                Ok(n) => self.related_limit = n,
                Err(_) => warn!(value = %limit, "Ignoring non-numeric FURNIRO_RELATED_LIMIT"),
            }
        }

        if let Some(path) = lookup("FURNIRO_CATALOG_PATH") {
            self.catalog_path = Some(PathBuf::from(path));
        }

        if let Some(path) = lookup("FURNIRO_DISCOUNT_PATH") {
            self.discount_path = Some(PathBuf::from(path));
        }

        if let Some(filter) = lookup("FURNIRO_LOG") {
            self.log_filter = filter;
        }
    }

    /// Resolved location of the applied-discount marker.
    pub fn discount_flag_path(&self) -> Option<PathBuf> {
        self.discount_path.clone().or_else(|| {
            directories::ProjectDirs::from("com", "furniro", "storefront")
                .map(|dirs| dirs.data_dir().join(DISCOUNT_FILE_NAME))
        })
    }

    /// Returns the default config file path.
    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "furniro", "storefront")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
    }
}
