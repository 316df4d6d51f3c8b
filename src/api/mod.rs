//! HTTP API module for the billing engine.
//!
//! This module provides the REST endpoints for pricing a single transfer
//! and building an invoice for a set of transfers.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{InvoiceRequest, PriceRequest, TransferRequest};
pub use response::{ApiError, PriceResponse};
pub use state::AppState;
