//! Calculation logic for the pricing engine.
//!
//! This module contains the pure price-decomposition functions: base price
//! (with the dispo hour multiplier), discount amount, extra-charge totals,
//! commission amount, and the final total. All functions are stateless,
//! side-effect free, and never fail under numeric input — malformed
//! optional fields degrade to zero contributions.

mod base_price;
mod commission;
mod discount;
mod extra_charges;
mod total;

pub use base_price::base_price;
pub use commission::commission_amount;
pub use discount::discount_amount;
pub use extra_charges::extra_charges_total;
pub use total::{PriceBreakdown, price_breakdown, total_price};
