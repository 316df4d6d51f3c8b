//! Transfer model and related types.
//!
//! This module defines the [`ChargeableTransfer`] struct — the read-only
//! projection of a booked service that the pricing engine consumes — along
//! with the enums describing service, discount and commission semantics.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::NumericInput;

/// The kind of service that was booked.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ServiceType {
    /// Point-to-point transfer; the price is a flat amount.
    Transfer,
    /// Hourly disposition; the price is per hour and multiplied by `hours`.
    Dispo,
}

/// How a discount value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiscountType {
    /// The discount value is a percentage of the base price.
    Percentage,
    /// The discount value is a flat amount, independent of the base price.
    Fixed,
}

/// How a commission value is interpreted.
///
/// Read paths default a missing commission type to `Percentage`. The
/// pricing engine does not apply this default: a commission without an
/// explicit type yields zero commission (see
/// [`commission_amount`](crate::calculation::commission_amount)).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CommissionType {
    /// The commission is a percentage of the discounted, extras-included subtotal.
    #[default]
    Percentage,
    /// The commission is a flat amount, independent of the subtotal.
    Fixed,
}

/// An additional flat charge attached to a transfer.
///
/// Charges are added after the discount and are never discounted
/// themselves. Prices may arrive as strings from the data store; an
/// unparsable price contributes zero to the total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtraCharge {
    /// Display name of the charge (e.g. "Silla de bebé").
    #[serde(default)]
    pub name: String,
    /// The charge amount, possibly string-typed.
    pub price: NumericInput,
}

/// The minimal projection of a transfer that the pricing engine reads.
///
/// The engine never owns or mutates this data; it is read per invocation
/// and every computation is stateless and idempotent.
///
/// # Example
///
/// ```
/// use billing_engine::models::{ChargeableTransfer, ServiceType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let transfer = ChargeableTransfer {
///     id: "tr_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
///     origin: "Aeropuerto".to_string(),
///     destination: "Hotel Playa".to_string(),
///     service_type: ServiceType::Transfer,
///     price: Decimal::new(10000, 2),
///     hours: None,
///     discount_type: None,
///     discount_value: None,
///     extra_charges: vec![],
///     commission: None,
///     commission_type: None,
/// };
/// assert_eq!(transfer.price, Decimal::new(10000, 2));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChargeableTransfer {
    /// Unique identifier for the transfer.
    pub id: String,
    /// The service date (used for line-item descriptions).
    pub date: NaiveDate,
    /// Pickup location.
    #[serde(default)]
    pub origin: String,
    /// Drop-off location.
    #[serde(default)]
    pub destination: String,
    /// The kind of service booked.
    pub service_type: ServiceType,
    /// Unit price; for dispo services this is the price per hour.
    pub price: Decimal,
    /// Hour multiplier for dispo services, possibly string-typed.
    /// Ignored for point-to-point transfers.
    #[serde(default)]
    pub hours: Option<NumericInput>,
    /// How `discount_value` is interpreted, when a discount applies.
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    /// Magnitude of the discount.
    #[serde(default)]
    pub discount_value: Option<Decimal>,
    /// Flat charges added after the discount.
    #[serde(default)]
    pub extra_charges: Vec<ExtraCharge>,
    /// Magnitude of the collaborator commission.
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// How `commission` is interpreted.
    #[serde(default)]
    pub commission_type: Option<CommissionType>,
}

impl ChargeableTransfer {
    /// Returns true if this is an hourly disposition service.
    pub fn is_dispo(&self) -> bool {
        self.service_type == ServiceType::Dispo
    }
}
