//! Request types for the billing engine API.
//!
//! This module defines the JSON request structures for the `/price` and
//! `/invoice` endpoints.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::billing::TaxApplication;
use crate::models::{
    ChargeableTransfer, CommissionType, DiscountType, ExtraCharge, NumericInput, ServiceType,
};

/// Request body for the `/price` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceRequest {
    /// The transfer to price.
    pub transfer: TransferRequest,
}

/// Request body for the `/invoice` endpoint.
///
/// Tax rate and application fall back to the configured defaults when
/// omitted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InvoiceRequest {
    /// The billed client, when known.
    #[serde(default)]
    pub client_name: Option<String>,
    /// Tax rate as a percentage value; defaults from configuration.
    #[serde(default)]
    pub tax_rate: Option<Decimal>,
    /// Tax application mode; defaults from configuration.
    #[serde(default)]
    pub tax_application: Option<TaxApplication>,
    /// The transfers selected for this invoice.
    pub transfers: Vec<TransferRequest>,
}

/// Transfer information in a pricing or invoicing request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferRequest {
    /// Unique identifier for the transfer.
    pub id: String,
    /// The service date.
    pub date: NaiveDate,
    /// Pickup location.
    #[serde(default)]
    pub origin: String,
    /// Drop-off location.
    #[serde(default)]
    pub destination: String,
    /// The kind of service booked.
    pub service_type: ServiceType,
    /// Unit price; per hour for dispo services.
    pub price: Decimal,
    /// Hour multiplier for dispo services, possibly string-typed.
    #[serde(default)]
    pub hours: Option<NumericInput>,
    /// How `discount_value` is interpreted.
    #[serde(default)]
    pub discount_type: Option<DiscountType>,
    /// Magnitude of the discount.
    #[serde(default)]
    pub discount_value: Option<Decimal>,
    /// Flat charges added after the discount.
    #[serde(default)]
    pub extra_charges: Vec<ExtraChargeRequest>,
    /// Magnitude of the collaborator commission.
    #[serde(default)]
    pub commission: Option<Decimal>,
    /// How `commission` is interpreted.
    #[serde(default)]
    pub commission_type: Option<CommissionType>,
}

/// Extra-charge information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtraChargeRequest {
    /// Display name of the charge.
    #[serde(default)]
    pub name: String,
    /// The charge amount, possibly string-typed.
    pub price: NumericInput,
}

impl From<TransferRequest> for ChargeableTransfer {
    fn from(req: TransferRequest) -> Self {
        ChargeableTransfer {
            id: req.id,
            date: req.date,
            origin: req.origin,
            destination: req.destination,
            service_type: req.service_type,
            price: req.price,
            hours: req.hours,
            discount_type: req.discount_type,
            discount_value: req.discount_value,
            extra_charges: req.extra_charges.into_iter().map(Into::into).collect(),
            commission: req.commission,
            commission_type: req.commission_type,
        }
    }
}

impl From<ExtraChargeRequest> for ExtraCharge {
    fn from(req: ExtraChargeRequest) -> Self {
        ExtraCharge {
            name: req.name,
            price: req.price,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_deserialize_price_request() {
        let json = r#"{
            "transfer": {
                "id": "tr_001",
                "date": "2026-03-14",
                "service_type": "dispo",
                "price": "50.00",
                "hours": "4"
            }
        }"#;

        let request: PriceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.transfer.id, "tr_001");
        assert_eq!(request.transfer.service_type, ServiceType::Dispo);
    }

    #[test]
    fn test_deserialize_invoice_request_with_defaults() {
        let json = r#"{
            "transfers": [
                {
                    "id": "tr_001",
                    "date": "2026-03-14",
                    "service_type": "transfer",
                    "price": "100.00"
                }
            ]
        }"#;

        let request: InvoiceRequest = serde_json::from_str(json).unwrap();
        assert!(request.client_name.is_none());
        assert!(request.tax_rate.is_none());
        assert!(request.tax_application.is_none());
        assert_eq!(request.transfers.len(), 1);
    }

    #[test]
    fn test_deserialize_invoice_request_with_explicit_tax() {
        let json = r#"{
            "client_name": "Hotel Playa SL",
            "tax_rate": "21",
            "tax_application": "excluded",
            "transfers": []
        }"#;

        let request: InvoiceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.client_name.as_deref(), Some("Hotel Playa SL"));
        assert_eq!(request.tax_rate, Some(Decimal::from_str("21").unwrap()));
        assert_eq!(request.tax_application, Some(TaxApplication::Excluded));
    }

    #[test]
    fn test_transfer_conversion() {
        let req = TransferRequest {
            id: "tr_001".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 3, 14).unwrap(),
            origin: "Aeropuerto".to_string(),
            destination: "Hotel".to_string(),
            service_type: ServiceType::Transfer,
            price: Decimal::from(100),
            hours: None,
            discount_type: None,
            discount_value: None,
            extra_charges: vec![ExtraChargeRequest {
                name: "Espera".to_string(),
                price: NumericInput::from("15"),
            }],
            commission: None,
            commission_type: None,
        };

        let transfer: ChargeableTransfer = req.into();
        assert_eq!(transfer.id, "tr_001");
        assert_eq!(transfer.extra_charges.len(), 1);
        assert_eq!(transfer.extra_charges[0].name, "Espera");
    }
}
