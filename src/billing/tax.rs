//! Tax calculation for invoice totals.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// How tax relates to an invoice subtotal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaxApplication {
    /// Tax is already contained in the subtotal and is backed out of it.
    Included,
    /// Tax is added on top of the subtotal.
    Excluded,
}

/// The tax amount and resulting invoice total for a subtotal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxTotals {
    /// The tax portion of the invoice.
    pub tax_amount: Decimal,
    /// The invoice total after applying the tax mode.
    pub total: Decimal,
}

/// Computes the tax amount and total for an invoice subtotal.
///
/// `tax_rate` is a percentage value (`10` means 10%), not a fraction.
///
/// * `Included`: `tax = subtotal × rate / (100 + rate)`; the total is the
///   subtotal unchanged, since tax was already inside it.
/// * `Excluded`: `tax = subtotal × rate / 100`; the total is
///   `subtotal + tax`.
///
/// A rate of −100 would make the inclusive divisor zero; the function
/// degrades to a zero tax amount instead of panicking.
///
/// # Examples
///
/// ```
/// use billing_engine::billing::{TaxApplication, compute_tax_totals};
/// use rust_decimal::Decimal;
///
/// let included = compute_tax_totals(
///     Decimal::from(1100),
///     Decimal::TEN,
///     TaxApplication::Included,
/// );
/// assert_eq!(included.tax_amount, Decimal::from(100));
/// assert_eq!(included.total, Decimal::from(1100));
///
/// let excluded = compute_tax_totals(
///     Decimal::from(1000),
///     Decimal::TEN,
///     TaxApplication::Excluded,
/// );
/// assert_eq!(excluded.tax_amount, Decimal::from(100));
/// assert_eq!(excluded.total, Decimal::from(1100));
/// ```
pub fn compute_tax_totals(
    sub_total: Decimal,
    tax_rate: Decimal,
    application: TaxApplication,
) -> TaxTotals {
    match application {
        TaxApplication::Included => {
            let divisor = Decimal::ONE_HUNDRED + tax_rate;
            let tax_amount = if divisor.is_zero() {
                Decimal::ZERO
            } else {
                sub_total * tax_rate / divisor
            };
            TaxTotals {
                tax_amount,
                total: sub_total,
            }
        }
        TaxApplication::Excluded => {
            let tax_amount = sub_total * tax_rate / Decimal::ONE_HUNDRED;
            TaxTotals {
                tax_amount,
                total: sub_total + tax_amount,
            }
        }
    }
}
