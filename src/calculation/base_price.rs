//! Base price calculation.
//!
//! This module determines the raw service price before any discount,
//! extra charge, or commission is considered.

use rust_decimal::Decimal;

use crate::models::{ChargeableTransfer, NumericInput, ServiceType};

/// Computes the base price of a transfer.
///
/// For hourly dispositions the unit price is multiplied by the parsed hour
/// count; an absent or unparsable `hours` field falls back to a multiplier
/// of 1. For point-to-point transfers the price is returned unchanged,
/// regardless of `hours`.
///
/// The result is the raw arithmetic value — no negative guard is applied;
/// validating prices is the caller's responsibility.
///
/// # Examples
///
/// ```
/// use billing_engine::calculation::base_price;
/// use billing_engine::models::{ChargeableTransfer, NumericInput, ServiceType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let dispo = ChargeableTransfer {
///     id: "tr_001".to_string(),
///     date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
///     origin: String::new(),
///     destination: String::new(),
///     service_type: ServiceType::Dispo,
///     price: Decimal::new(5000, 2),
///     hours: Some(NumericInput::from("4")),
///     discount_type: None,
///     discount_value: None,
///     extra_charges: vec![],
///     commission: None,
///     commission_type: None,
/// };
/// assert_eq!(base_price(&dispo), Decimal::new(20000, 2)); // 50.00 x 4
/// ```
pub fn base_price(transfer: &ChargeableTransfer) -> Decimal {
    match transfer.service_type {
        ServiceType::Dispo => {
            let multiplier = transfer
                .hours
                .as_ref()
                .and_then(NumericInput::as_decimal)
                .unwrap_or(Decimal::ONE);
            transfer.price * multiplier
        }
        ServiceType::Transfer => transfer.price,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_transfer(service_type: ServiceType, price: &str) -> ChargeableTransfer {
        ChargeableTransfer {
            id: "tr_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            origin: String::new(),
            destination: String::new(),
            service_type,
            price: dec(price),
            hours: None,
            discount_type: None,
            discount_value: None,
            extra_charges: vec![],
            commission: None,
            commission_type: None,
        }
    }

    /// BP-001: point-to-point transfer returns the price unchanged
    #[test]
    fn test_transfer_returns_price_unchanged() {
        let transfer = make_transfer(ServiceType::Transfer, "100.00");
        assert_eq!(base_price(&transfer), dec("100.00"));
    }

    /// BP-002: transfer ignores hours even when present
    #[test]
    fn test_transfer_ignores_hours() {
        let mut transfer = make_transfer(ServiceType::Transfer, "100.00");
        transfer.hours = Some(NumericInput::from("4"));
        assert_eq!(base_price(&transfer), dec("100.00"));
    }

    /// BP-003: dispo multiplies price by numeric hours
    #[test]
    fn test_dispo_multiplies_by_hours() {
        let mut transfer = make_transfer(ServiceType::Dispo, "50.00");
        transfer.hours = Some(NumericInput::from(4i64));
        assert_eq!(base_price(&transfer), dec("200.00"));
    }

    /// BP-004: dispo parses string-typed hours
    #[test]
    fn test_dispo_parses_string_hours() {
        let mut transfer = make_transfer(ServiceType::Dispo, "50.00");
        transfer.hours = Some(NumericInput::from("4"));
        assert_eq!(base_price(&transfer), dec("200.00"));
    }

    /// BP-005: unparsable hours falls back to multiplier 1
    #[test]
    fn test_dispo_unparsable_hours_uses_one() {
        let mut transfer = make_transfer(ServiceType::Dispo, "50.00");
        transfer.hours = Some(NumericInput::from("abc"));
        assert_eq!(base_price(&transfer), dec("50.00"));
    }

    /// BP-006: absent hours falls back to multiplier 1
    #[test]
    fn test_dispo_absent_hours_uses_one() {
        let transfer = make_transfer(ServiceType::Dispo, "50.00");
        assert_eq!(base_price(&transfer), dec("50.00"));
    }

    #[test]
    fn test_dispo_fractional_hours() {
        let mut transfer = make_transfer(ServiceType::Dispo, "60.00");
        transfer.hours = Some(NumericInput::from("2.5"));
        assert_eq!(base_price(&transfer), dec("150.00"));
    }

    #[test]
    fn test_negative_price_is_not_guarded() {
        let transfer = make_transfer(ServiceType::Transfer, "-10.00");
        assert_eq!(base_price(&transfer), dec("-10.00"));
    }

    #[test]
    fn test_zero_price() {
        let transfer = make_transfer(ServiceType::Dispo, "0");
        assert_eq!(base_price(&transfer), Decimal::ZERO);
    }
}
