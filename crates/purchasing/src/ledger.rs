use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tillbook_catalog::{ProductCatalog, ProductId};
use tillbook_core::money;

use crate::line_item::{LineItem, LineItemId};

/// One field edit on a line item, as the row's form controls produce them.
///
/// The mutable fields form a closed set, so edits are a tagged variant
/// dispatched through a single reducer rather than an open field name.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LineItemUpdate {
    Quantity(u32),
    UnitCost(Decimal),
    TaxRatePercent(Decimal),
    ProductRef(ProductId),
}

/// Aggregated summary across all line items.
///
/// `subtotal` and `total_tax` are accumulated at full precision and rounded
/// to 2 fractional digits once at the end; `grand_total` is the sum of the
/// two rounded figures, so `grand_total == subtotal + total_tax` holds
/// exactly.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderTotals {
    pub subtotal: Decimal,
    pub total_tax: Decimal,
    pub grand_total: Decimal,
}

/// The ordered collection of line items for one purchase order.
///
/// Owned by the purchase-entry view and passed by reference to the
/// presentation layer; there is no ambient shared state. The ledger always
/// contains at least one item: it starts with a default row and
/// [`Ledger::remove_item`] refuses to delete the last one.
///
/// Every operation is total. Unknown ids are silent no-ops and invalid
/// numeric input is coerced to zero at the input boundary
/// (`tillbook_core::money`), so nothing here returns an error.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ledger {
    items: Vec<LineItem>,
}

impl Ledger {
    /// A new ledger with one default line item, matching the entry form's
    /// initial state.
    pub fn new() -> Self {
        Self {
            items: vec![LineItem::new()],
        }
    }

    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn get(&self, id: LineItemId) -> Option<&LineItem> {
        self.items.iter().find(|item| item.id_typed() == id)
    }

    /// Append a new line item with default field values and a fresh id.
    ///
    /// Returns the new item's id so the row can be focused.
    pub fn add_item(&mut self) -> LineItemId {
        let item = LineItem::new();
        let id = item.id_typed();
        self.items.push(item);
        id
    }

    /// Remove the matching item if more than one remains.
    ///
    /// The ledger is never emptied through this path: deleting the sole
    /// remaining item is a silent no-op, as is an unknown id.
    pub fn remove_item(&mut self, id: LineItemId) {
        if self.items.len() <= 1 {
            return;
        }
        self.items.retain(|item| item.id_typed() != id);
    }

    /// Apply one field edit to the matching item, re-establishing the
    /// derived-total invariant exhaustively per variant.
    ///
    /// `ProductRef` resolves against the catalog: when the product is known
    /// and carries a default cost, the row's unit cost is set to that default
    /// before the total is recomputed. An unresolvable product still sets the
    /// reference and leaves the cost alone. Unknown item id: silent no-op.
    pub fn update_item(&mut self, id: LineItemId, update: LineItemUpdate, catalog: &ProductCatalog) {
        let Some(item) = self.items.iter_mut().find(|item| item.id_typed() == id) else {
            return;
        };

        match update {
            LineItemUpdate::Quantity(quantity) => item.set_quantity(quantity),
            LineItemUpdate::UnitCost(unit_cost) => item.set_unit_cost(unit_cost),
            LineItemUpdate::TaxRatePercent(rate) => item.set_tax_rate_percent(rate),
            LineItemUpdate::ProductRef(product_id) => {
                let default_cost = catalog.resolve(product_id).and_then(|p| p.default_cost);
                item.set_product(product_id, default_cost);
            }
        }
    }

    /// Aggregate subtotal, tax, and grand total across all current items.
    ///
    /// Pure function of current state; per-item amounts are summed at full
    /// precision before the final display rounding.
    pub fn totals(&self) -> OrderTotals {
        let mut subtotal = Decimal::ZERO;
        let mut total_tax = Decimal::ZERO;
        for item in &self.items {
            subtotal += item.base_amount();
            total_tax += item.tax_amount();
        }

        let subtotal = money::round_display(subtotal);
        let total_tax = money::round_display(total_tax);
        OrderTotals {
            subtotal,
            total_tax,
            grand_total: subtotal + total_tax,
        }
    }
}

impl Default for Ledger {
    fn default() -> Self {
        Self::new()
    }
}
