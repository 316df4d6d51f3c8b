//! Configuration loading and management for the billing engine.
//!
//! This module provides functionality to load engine configuration from
//! YAML files: engine metadata (currency, locale) and the tax defaults
//! applied when an invoice request does not specify its own.
//!
//! # Example
//!
//! ```no_run
//! use billing_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/billing").unwrap();
//! println!("Billing in {}", config.billing().currency);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{BillingConfig, BillingMetadata, TaxDefaults};
