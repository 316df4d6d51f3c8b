//! Core data models for the pricing and invoicing engine.
//!
//! This module contains the domain models consumed by the calculation
//! and billing layers.

mod numeric;
mod transfer;

pub use numeric::NumericInput;
pub use transfer::{
    ChargeableTransfer, CommissionType, DiscountType, ExtraCharge, ServiceType,
};
