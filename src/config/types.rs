//! Configuration type definitions.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::billing::TaxApplication;

/// Engine metadata loaded from `billing.yaml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingMetadata {
    /// Display name of the billing entity.
    pub name: String,
    /// ISO 4217 currency code stamped on invoices.
    pub currency: String,
    /// BCP 47 locale tag used by display layers for currency formatting.
    pub locale: String,
}

/// Tax defaults loaded from `tax.yaml`, applied when an invoice request
/// omits its own rate or application mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaxDefaults {
    /// Default tax rate as a percentage value (e.g. `10` for 10%).
    pub default_rate: Decimal,
    /// Default tax application mode.
    pub application: TaxApplication,
}

/// The complete engine configuration.
#[derive(Debug, Clone)]
pub struct BillingConfig {
    billing: BillingMetadata,
    tax: TaxDefaults,
}

impl BillingConfig {
    /// Creates a new configuration from its parts.
    pub fn new(billing: BillingMetadata, tax: TaxDefaults) -> Self {
        Self { billing, tax }
    }

    /// Returns the engine metadata.
    pub fn billing(&self) -> &BillingMetadata {
        &self.billing
    }

    /// Returns the tax defaults.
    pub fn tax(&self) -> &TaxDefaults {
        &self.tax
    }
}
