//! Commission calculation.
//!
//! This module computes the collaborator commission for a transfer.
//! Percentage commissions are taken on the discounted, extras-included
//! subtotal — not on the base price and not on the final total.

use rust_decimal::Decimal;

use crate::models::{ChargeableTransfer, CommissionType};

use super::{base_price, discount_amount, extra_charges_total};

/// Computes the commission amount for a transfer.
///
/// Returns zero when either `commission` or `commission_type` is absent.
/// No read-path default is applied here: a commission without an explicit
/// type yields zero commission.
///
/// Otherwise, with `subtotal = base − discount + extras`:
///
/// * `Percentage`: `subtotal × commission / 100`
/// * `Fixed`: the commission value itself
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::commission_amount;
/// use billing_engine::models::{ChargeableTransfer, CommissionType, ServiceType};
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
///     discount_type: None,
///     discount_value: None,
///     extra_charges: vec![],
///     commission: Some(Decimal::from(20)),
///     commission_type: Some(CommissionType::Percentage),
/// };
/// assert_eq!(commission_amount(&transfer), Decimal::new(2000, 2)); // 20.00
/// ```
pub fn commission_amount(transfer: &ChargeableTransfer) -> Decimal {
    let (Some(commission), Some(commission_type)) =
        (transfer.commission, transfer.commission_type)
    else {
        return Decimal::ZERO;
    };

    match commission_type {
        CommissionType::Percentage => {
            let subtotal = base_price(transfer) - discount_amount(transfer)
                + extra_charges_total(&transfer.extra_charges);
            subtotal * commission / Decimal::ONE_HUNDRED
        }
        CommissionType::Fixed => commission,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DiscountType, ExtraCharge, NumericInput, ServiceType};
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_transfer() -> ChargeableTransfer {
        ChargeableTransfer {
            id: "tr_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            origin: String::new(),
            destination: String::new(),
            service_type: ServiceType::Transfer,
            price: dec("100.00"),
            hours: None,
            discount_type: None,
            discount_value: None,
            extra_charges: vec![],
            commission: None,
            commission_type: None,
        }
    }

    /// CM-001: absent commission yields zero
    #[test]
    fn test_absent_commission_is_zero() {
        let mut transfer = make_transfer();
        transfer.commission_type = Some(CommissionType::Percentage);
        assert_eq!(commission_amount(&transfer), Decimal::ZERO);
    }

    /// CM-002: commission without an explicit type yields zero
    #[test]
    fn test_commission_without_type_is_zero() {
        let mut transfer = make_transfer();
        transfer.commission = Some(dec("20"));
        assert_eq!(commission_amount(&transfer), Decimal::ZERO);
    }

    /// CM-003: percentage commission on the discounted subtotal
    #[test]
    fn test_percentage_commission_on_discounted_subtotal() {
        let mut transfer = make_transfer();
        transfer.discount_type = Some(DiscountType::Percentage);
        transfer.discount_value = Some(dec("10"));
        transfer.commission = Some(dec("20"));
        transfer.commission_type = Some(CommissionType::Percentage);
        // subtotal = 100 - 10 = 90, 20% = 18
        assert_eq!(commission_amount(&transfer), dec("18.0000"));
    }

    /// CM-004: percentage commission includes extras in its subtotal
    #[test]
    fn test_percentage_commission_includes_extras() {
        let mut transfer = make_transfer();
        transfer.extra_charges = vec![ExtraCharge {
            name: "Espera".to_string(),
            price: NumericInput::from("50"),
        }];
        transfer.commission = Some(dec("10"));
        transfer.commission_type = Some(CommissionType::Percentage);
        // subtotal = 100 + 50 = 150, 10% = 15
        assert_eq!(commission_amount(&transfer), dec("15.00"));
    }

    /// CM-005: fixed commission ignores the subtotal
    #[test]
    fn test_fixed_commission_ignores_subtotal() {
        let mut transfer = make_transfer();
        transfer.price = dec("10000.00");
        transfer.commission = Some(dec("10"));
        transfer.commission_type = Some(CommissionType::Fixed);
        assert_eq!(commission_amount(&transfer), dec("10"));
    }

    #[test]
    fn test_zero_percentage_commission() {
        let mut transfer = make_transfer();
        transfer.commission = Some(Decimal::ZERO);
        transfer.commission_type = Some(CommissionType::Percentage);
        assert_eq!(commission_amount(&transfer), Decimal::ZERO);
    }

    #[test]
    fn test_commission_on_dispo_subtotal() {
        let mut transfer = make_transfer();
        transfer.service_type = ServiceType::Dispo;
        transfer.price = dec("50.00");
        transfer.hours = Some(NumericInput::from("4"));
        transfer.commission = Some(dec("25"));
        transfer.commission_type = Some(CommissionType::Percentage);
        // base = 200, 25% = 50
        assert_eq!(commission_amount(&transfer), dec("50.0000"));
    }
}
