//! Walks one purchase-entry session the way the page would drive it:
//! seed the lookup tables, edit a couple of rows, render the summary panel.
//!
//! Run with: `cargo run -p tillbook-purchasing --example purchase_entry`

use anyhow::Result;
use rust_decimal_macros::dec;

use tillbook_catalog::{Product, ProductCatalog, ProductId};
use tillbook_core::{money, EntityId};
use tillbook_purchasing::{Ledger, LineItemUpdate};

fn main() -> Result<()> {
    tillbook_observability::init();

    let scanner = ProductId::new(EntityId::new());
    let paper = ProductId::new(EntityId::new());
    let catalog = ProductCatalog::new(vec![
        Product {
            id: scanner,
            sku: "SKU-001".to_string(),
            name: "Barcode Scanner".to_string(),
            default_cost: Some(dec!(450)),
        },
        Product {
            id: paper,
            sku: "SKU-002".to_string(),
            name: "Thermal Paper Roll".to_string(),
            default_cost: Some(dec!(120)),
        },
    ])?;

    let mut ledger = Ledger::new();

    // First row: pick the scanner, bump the quantity. The quantity arrives
    // as form text and is coerced at the boundary.
    let first = ledger.items()[0].id_typed();
    ledger.update_item(first, LineItemUpdate::ProductRef(scanner), &catalog);
    let quantity = money::quantity_from_input("2");
    ledger.update_item(first, LineItemUpdate::Quantity(quantity), &catalog);

    // Second row: paper rolls at a negotiated price below the default.
    let second = ledger.add_item();
    ledger.update_item(second, LineItemUpdate::ProductRef(paper), &catalog);
    ledger.update_item(second, LineItemUpdate::UnitCost(dec!(110)), &catalog);
    ledger.update_item(second, LineItemUpdate::Quantity(10), &catalog);

    for item in ledger.items() {
        tracing::info!(
            item = %item.id_typed(),
            quantity = item.quantity(),
            unit_cost = %item.unit_cost(),
            total = %item.total_display(),
            "line item"
        );
    }

    let totals = ledger.totals();
    println!("{}", serde_json::to_string_pretty(&totals)?);
    Ok(())
}
