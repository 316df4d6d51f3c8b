//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the engine
//! configuration from YAML files.

use rust_decimal::Decimal;
use std::fs;
use std::path::Path;

use crate::billing::TaxApplication;
use crate::error::{EngineError, EngineResult};

use super::types::{BillingConfig, BillingMetadata, TaxDefaults};

/// Loads and provides access to the engine configuration.
///
/// # Directory Structure
///
/// ```text
/// config/billing/
/// ├── billing.yaml   # engine metadata: name, currency, locale
/// └── tax.yaml       # default tax rate and application mode
/// ```
///
/// # Example
///
/// ```no_run
/// use billing_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/billing").unwrap();
/// println!("Default tax rate: {}%", loader.default_tax_rate());
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: BillingConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the configuration directory (e.g. "./config/billing")
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if any
    /// required file is missing or contains invalid YAML.
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let billing_path = path.join("billing.yaml");
        let billing = Self::load_yaml::<BillingMetadata>(&billing_path)?;

        let tax_path = path.join("tax.yaml");
        let tax = Self::load_yaml::<TaxDefaults>(&tax_path)?;

        Ok(Self {
            config: BillingConfig::new(billing, tax),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &BillingConfig {
        &self.config
    }

    /// Returns the engine metadata.
    pub fn billing(&self) -> &BillingMetadata {
        self.config.billing()
    }

    /// Returns the default tax rate as a percentage value.
    pub fn default_tax_rate(&self) -> Decimal {
        self.config.tax().default_rate
    }

    /// Returns the default tax application mode.
    pub fn default_tax_application(&self) -> TaxApplication {
        self.config.tax().application
    }
}
