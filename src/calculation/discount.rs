//! Discount calculation.
//!
//! This module computes the discount amount for a transfer. Discounts are
//! applied to the base price only — extra charges are never discounted.

use rust_decimal::Decimal;

use crate::models::{ChargeableTransfer, DiscountType};

use super::base_price;

/// Computes the discount amount for a transfer.
///
/// A discount applies only when both `discount_type` and `discount_value`
/// are present:
///
/// * `Percentage`: `base_price × value / 100`
/// * `Fixed`: the value itself, independent of the base price
///
/// A present type with a value of 0 yields a zero discount, and any
/// missing half disables the discount entirely.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::discount_amount;
/// use billing_engine::models::{ChargeableTransfer, DiscountType, ServiceType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let transfer = ChargeableTransfer {
///     id: "tr_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
///     origin: String::new(),
///     destination: String::new(),
///     service_type: ServiceType::Transfer,
///     price: Decimal::new(10000, 2),
///     hours: None,
///     discount_type: Some(DiscountType::Percentage),
///     discount_value: Some(Decimal::TEN),
///     extra_charges: vec![],
///     commission: None,
///     commission_type: None,
/// };
/// assert_eq!(discount_amount(&transfer), Decimal::new(1000, 2)); // 10.00
/// ```
pub fn discount_amount(transfer: &ChargeableTransfer) -> Decimal {
    match (transfer.discount_type, transfer.discount_value) {
        (Some(DiscountType::Percentage), Some(value)) => {
            base_price(transfer) * value / Decimal::ONE_HUNDRED
        }
        (Some(DiscountType::Fixed), Some(value)) => value,
        _ => Decimal::ZERO,
    }
}
