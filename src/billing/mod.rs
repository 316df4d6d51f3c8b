//! Billing aggregation for client invoices.
//!
//! This module turns a set of selected transfers into invoice line items,
//! sums them into a subtotal, and applies tax either inclusively (backed
//! out of the subtotal) or exclusively (added on top).

mod invoice;
mod line_items;
mod tax;

pub use invoice::{Invoice, build_invoice};
pub use line_items::{ExtraLineItem, LineItem, build_line_items};
pub use tax::{TaxApplication, TaxTotals, compute_tax_totals};
