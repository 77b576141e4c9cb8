//! Purchasing domain module: the purchase-entry line-item ledger.
//!
//! This crate contains the business rules for one purchase order being
//! entered: an ordered list of line items whose derived totals are kept
//! consistent through every edit, plus the subtotal/tax/grand-total
//! aggregation the summary panel renders. Pure deterministic logic; no IO,
//! no HTTP, no storage.

pub mod ledger;
pub mod line_item;

pub use ledger::{Ledger, LineItemUpdate, OrderTotals};
pub use line_item::{LineItem, LineItemId, DEFAULT_TAX_RATE_PERCENT};
