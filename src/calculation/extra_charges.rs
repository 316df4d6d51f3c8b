//! Extra-charge totals.
//!
//! This module sums the flat charges attached to a transfer, coercing
//! string-typed prices at the boundary.

use rust_decimal::Decimal;

use crate::models::ExtraCharge;

/// Sums the prices of a list of extra charges.
///
/// String-typed prices are parsed; any charge whose price does not parse
/// contributes zero to the sum rather than being skipped or raising an
/// error. An empty list yields zero.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::extra_charges_total;
/// use billing_engine::models::{ExtraCharge, NumericInput};
/// use rust_decimal::Decimal;
///
/// let charges = vec![
///     ExtraCharge { name: "Espera".to_string(), price: NumericInput::from("10") },
///     ExtraCharge { name: String::new(), price: NumericInput::from("bad") },
///     ExtraCharge { name: String::new(), price: NumericInput::from(5i64) },
/// ];
/// assert_eq!(extra_charges_total(&charges), Decimal::from(15));
/// ```
pub fn extra_charges_total(charges: &[ExtraCharge]) -> Decimal {
    charges
        .iter()
        .map(|charge| charge.price.as_decimal().unwrap_or(Decimal::ZERO))
        .sum()
}
