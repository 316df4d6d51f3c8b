//! Pricing and invoicing engine for vehicle transfer services.
//!
//! This crate provides deterministic price decomposition for transfer
//! bookings (base price, discount, extra charges, commission) and invoice
//! aggregation with inclusive or exclusive tax.

#![warn(missing_docs)]

pub mod api;
pub mod billing;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
