//! Invoice assembly.
//!
//! This module combines the line-item builder and the tax calculation into
//! a complete, serializable invoice for one client.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::ChargeableTransfer;

use super::line_items::{LineItem, build_line_items};
use super::tax::{TaxApplication, compute_tax_totals};

/// A complete invoice for a set of transfers billed to one client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Invoice {
    /// Unique identifier for this invoice.
    pub invoice_id: Uuid,
    /// When the invoice was generated.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that generated the invoice.
    pub engine_version: String,
    /// The billed client, when known.
    pub client_name: Option<String>,
    /// ISO 4217 currency code (display only; amounts are plain decimals).
    pub currency: String,
    /// One line per transfer, with extras as child items.
    pub line_items: Vec<LineItem>,
    /// Sum of all line totals (unit prices plus extras).
    pub sub_total: Decimal,
    /// The applied tax rate as a percentage value.
    pub tax_rate: Decimal,
    /// Whether tax was included in or excluded from the subtotal.
    pub tax_application: TaxApplication,
    /// The tax portion of the invoice.
    pub tax_amount: Decimal,
    /// The final invoice total.
    pub total: Decimal,
}

/// Builds an invoice for a set of selected transfers.
///
/// Line items are generated in input order; the subtotal is the sum of
/// each line's total (discounted base price plus extras), and tax is then
/// applied across the whole subtotal per `tax_application`.
///
/// # Examples
///
/// ```
/// use billing_engine::billing::{TaxApplication, build_invoice};
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
///     price: Decimal::from(1000),
///     hours: None,
///     discount_type: None,
///     discount_value: None,
///     extra_charges: vec![],
///     commission: None,
///     commission_type: None,
/// };
///
/// let invoice = build_invoice(
///     &[transfer],
///     Some("Hotel Playa SL".to_string()),
///     "EUR".to_string(),
///     Decimal::TEN,
///     TaxApplication::Excluded,
/// );
/// assert_eq!(invoice.sub_total, Decimal::from(1000));
/// assert_eq!(invoice.tax_amount, Decimal::from(100));
/// assert_eq!(invoice.total, Decimal::from(1100));
/// ```
pub fn build_invoice(
    transfers: &[ChargeableTransfer],
    client_name: Option<String>,
    currency: String,
    tax_rate: Decimal,
    tax_application: TaxApplication,
) -> Invoice {
    let line_items = build_line_items(transfers);
    let sub_total: Decimal = line_items.iter().map(LineItem::line_total).sum();
    let tax = compute_tax_totals(sub_total, tax_rate, tax_application);

    Invoice {
        invoice_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        client_name,
        currency,
        line_items,
        sub_total,
        tax_rate,
        tax_application,
        tax_amount: tax.tax_amount,
        total: tax.total,
    }
}
