use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use tillbook_catalog::ProductId;
use tillbook_core::{money, Entity, EntityId};

/// Line item identifier, assigned at creation and stable for the item's
/// lifetime.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LineItemId(pub EntityId);

impl LineItemId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for LineItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Tax rate a fresh line item starts with (GST standard rate).
pub const DEFAULT_TAX_RATE_PERCENT: Decimal = dec!(18);

/// One row of a purchase order.
///
/// `total` is derived and never edited directly. Invariant, re-established
/// after every mutation of cost, quantity, or tax rate:
///
/// `total == unit_cost × quantity × (1 + tax_rate_percent / 100)`
///
/// Fields are private so the only mutation path is the ledger's reducer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    id: LineItemId,
    product: Option<ProductId>,
    quantity: u32,
    unit_cost: Decimal,
    tax_rate_percent: Decimal,
    total: Decimal,
}

impl LineItem {
    /// A fresh row as the purchase-entry form creates it: quantity 1, cost 0,
    /// standard tax rate, zero total.
    pub(crate) fn new() -> Self {
        Self {
            id: LineItemId::new(EntityId::new()),
            product: None,
            quantity: 1,
            unit_cost: Decimal::ZERO,
            tax_rate_percent: DEFAULT_TAX_RATE_PERCENT,
            total: Decimal::ZERO,
        }
    }

    pub fn id_typed(&self) -> LineItemId {
        self.id
    }

    pub fn product(&self) -> Option<ProductId> {
        self.product
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn unit_cost(&self) -> Decimal {
        self.unit_cost
    }

    pub fn tax_rate_percent(&self) -> Decimal {
        self.tax_rate_percent
    }

    /// Derived total at full precision.
    pub fn total(&self) -> Decimal {
        self.total
    }

    /// Derived total rounded to 2 fractional digits for display.
    pub fn total_display(&self) -> Decimal {
        money::round_display(self.total)
    }

    /// Net amount before tax, at full precision.
    pub fn base_amount(&self) -> Decimal {
        self.unit_cost * Decimal::from(self.quantity)
    }

    /// Tax amount on this row, at full precision.
    pub fn tax_amount(&self) -> Decimal {
        self.base_amount() * self.tax_rate_percent / dec!(100)
    }

    pub(crate) fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity;
        self.recompute_total();
    }

    pub(crate) fn set_unit_cost(&mut self, unit_cost: Decimal) {
        // Negative amounts never reach the row; the input boundary coerces
        // them to zero, and the reducer clamps as a second line of the same
        // policy.
        self.unit_cost = unit_cost.max(Decimal::ZERO);
        self.recompute_total();
    }

    pub(crate) fn set_tax_rate_percent(&mut self, rate: Decimal) {
        self.tax_rate_percent = rate.max(Decimal::ZERO);
        self.recompute_total();
    }

    pub(crate) fn set_product(&mut self, product: ProductId, default_cost: Option<Decimal>) {
        self.product = Some(product);
        if let Some(cost) = default_cost {
            self.unit_cost = cost.max(Decimal::ZERO);
        }
        self.recompute_total();
    }

    fn recompute_total(&mut self) {
        self.total = self.base_amount() + self.tax_amount();
    }
}

impl Entity for LineItem {
    type Id = LineItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_item_has_reference_defaults() {
        let item = LineItem::new();
        assert_eq!(item.quantity(), 1);
        assert_eq!(item.unit_cost(), Decimal::ZERO);
        assert_eq!(item.tax_rate_percent(), dec!(18));
        assert_eq!(item.total(), Decimal::ZERO);
        assert!(item.product().is_none());
    }

    #[test]
    fn total_tracks_cost_quantity_and_tax() {
        let mut item = LineItem::new();
        item.set_unit_cost(dec!(300));
        item.set_quantity(2);
        // 300 × 2 × 1.18
        assert_eq!(item.total(), dec!(708));
        assert_eq!(item.base_amount(), dec!(600));
        assert_eq!(item.tax_amount(), dec!(108));
    }

    #[test]
    fn zero_quantity_zeroes_the_total() {
        let mut item = LineItem::new();
        item.set_unit_cost(dec!(450));
        item.set_quantity(0);
        assert_eq!(item.total(), Decimal::ZERO);
    }

    #[test]
    fn negative_cost_clamps_to_zero() {
        let mut item = LineItem::new();
        item.set_unit_cost(dec!(-10));
        assert_eq!(item.unit_cost(), Decimal::ZERO);
        assert_eq!(item.total(), Decimal::ZERO);
    }

    #[test]
    fn selecting_product_with_cost_overwrites_unit_cost() {
        let mut item = LineItem::new();
        item.set_unit_cost(dec!(99));
        let product = ProductId::new(EntityId::new());
        item.set_product(product, Some(dec!(450)));
        assert_eq!(item.product(), Some(product));
        assert_eq!(item.unit_cost(), dec!(450));
        assert_eq!(item.total(), dec!(531)); // 450 × 1 × 1.18
    }

    #[test]
    fn selecting_product_without_cost_keeps_unit_cost() {
        let mut item = LineItem::new();
        item.set_unit_cost(dec!(99));
        let product = ProductId::new(EntityId::new());
        item.set_product(product, None);
        assert_eq!(item.product(), Some(product));
        assert_eq!(item.unit_cost(), dec!(99));
    }
}
