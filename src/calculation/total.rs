//! Total price calculation and the full price breakdown.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::ChargeableTransfer;

use super::{base_price, commission_amount, discount_amount, extra_charges_total};

/// The full decomposition of a transfer's price.
///
/// Each component is computed independently with a fixed evaluation order:
/// base, then discount, then extras, then commission. The identity
/// `total = base − discount + extras − commission` holds by construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceBreakdown {
    /// The base price (price × hours for dispositions).
    pub base_price: Decimal,
    /// The discount taken off the base price.
    pub discount_amount: Decimal,
    /// The sum of extra charges, added after the discount.
    pub extra_charges_total: Decimal,
    /// The collaborator commission, deducted last.
    pub commission_amount: Decimal,
    /// The final amount: base − discount + extras − commission.
    pub total_price: Decimal,
}

/// Computes the final price of a transfer.
///
/// `base − discount + extras − commission`, where the discount is derived
/// from the base price alone (extras are never discounted) and the
/// commission is derived from the discounted, extras-included subtotal.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::total_price;
/// use billing_engine::models::{ChargeableTransfer, CommissionType, DiscountType, ServiceType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let transfer = ChargeableTransfer {
///     id: "tr_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
///     origin: String::new(),
///     destination: String::new(),
///     service_type: ServiceType::Transfer,
///     price: Decimal::from(100),
///     hours: None,
///     discount_type: Some(DiscountType::Percentage),
///     discount_value: Some(Decimal::TEN),
///     extra_charges: vec![],
///     commission: Some(Decimal::from(20)),
///     commission_type: Some(CommissionType::Percentage),
/// };
/// // base 100, discount 10, commission 20% of 90 = 18
/// assert_eq!(total_price(&transfer), Decimal::from(72));
/// ```
pub fn total_price(transfer: &ChargeableTransfer) -> Decimal {
    base_price(transfer) - discount_amount(transfer)
        + extra_charges_total(&transfer.extra_charges)
        - commission_amount(transfer)
}

/// Computes all price components of a transfer in one pass.
///
/// This is the engine's main entry point for display and reporting: every
/// component the UI shows (base, discount, extras, commission, total) in a
/// single serializable struct.
pub fn price_breakdown(transfer: &ChargeableTransfer) -> PriceBreakdown {
    let base = base_price(transfer);
    let discount = discount_amount(transfer);
    let extras = extra_charges_total(&transfer.extra_charges);
    let commission = commission_amount(transfer);

    PriceBreakdown {
        base_price: base,
        discount_amount: discount,
        extra_charges_total: extras,
        commission_amount: commission,
        total_price: base - discount + extras - commission,
    }
}
