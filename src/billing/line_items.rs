//! Invoice line items and their deterministic descriptions.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::{base_price, discount_amount};
use crate::models::{ChargeableTransfer, ServiceType};

/// A child line item for an extra charge, displayed under its parent
/// transfer but taxed identically to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtraLineItem {
    /// Display text, e.g. `"Cargo extra: Silla de bebé"`.
    pub description: String,
    /// The charge amount (zero when the stored price was unparsable).
    pub amount: Decimal,
}

/// A single invoice line for one transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    /// The ID of the transfer this line originated from.
    pub transfer_id: String,
    /// The service date.
    pub date: NaiveDate,
    /// Deterministic description generated from service type and date.
    pub description: String,
    /// The discounted base price. Extra charges are carried as separate
    /// child items, not folded into this amount.
    pub unit_price: Decimal,
    /// Extra charges attached to this transfer.
    pub extras: Vec<ExtraLineItem>,
}

impl LineItem {
    /// The full billable amount of this line: unit price plus extras.
    pub fn line_total(&self) -> Decimal {
        self.unit_price + self.extras.iter().map(|e| e.amount).sum::<Decimal>()
    }
}

/// Builds one invoice line item per transfer, in input order.
///
/// `unit_price` is `base_price − discount_amount`; commission is an
/// internal cost and never appears on a client invoice. Descriptions are
/// generated deterministically:
///
/// * dispo: `"{DD/MM/YYYY}, Servicio de disposición por horas"`
/// * transfer: `"{DD/MM/YYYY}, Traslado: {origin} → {destination}"`
///
/// Extra charges become child items described as
/// `"Cargo extra: {name}"`.
pub fn build_line_items(transfers: &[ChargeableTransfer]) -> Vec<LineItem> {
    transfers
        .iter()
        .map(|transfer| LineItem {
            transfer_id: transfer.id.clone(),
            date: transfer.date,
            description: describe(transfer),
            unit_price: base_price(transfer) - discount_amount(transfer),
            extras: transfer
                .extra_charges
                .iter()
                .map(|charge| ExtraLineItem {
                    description: format!("Cargo extra: {}", charge.name),
                    amount: charge.price.as_decimal().unwrap_or(Decimal::ZERO),
                })
                .collect(),
        })
        .collect()
}

fn describe(transfer: &ChargeableTransfer) -> String {
    let date = transfer.date.format("%d/%m/%Y");
    match transfer.service_type {
        ServiceType::Dispo => format!("{date}, Servicio de disposición por horas"),
        ServiceType::Transfer => format!(
            "{date}, Traslado: {} → {}",
            transfer.origin, transfer.destination
        ),
    }
}
