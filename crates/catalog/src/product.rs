use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use tillbook_core::{DomainError, Entity, EntityId, paginate, Page};

/// Product identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// One catalog row: what the purchase-entry picker shows.
///
/// `default_cost` seeds a line item's unit cost when the product is selected;
/// products without a known cost leave the line's cost untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub sku: String,
    pub name: String,
    pub default_cost: Option<Decimal>,
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only product lookup table.
///
/// Constructed once from seed data; lookups are by id, searches are
/// case-insensitive substring matches over name and SKU.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build the catalog, validating the seed rows.
    ///
    /// Every product needs a non-empty name and SKU, and SKUs must be unique
    /// within the catalog.
    pub fn new(products: Vec<Product>) -> Result<Self, DomainError> {
        for product in &products {
            if product.name.trim().is_empty() {
                return Err(DomainError::validation("product name cannot be empty"));
            }
            if product.sku.trim().is_empty() {
                return Err(DomainError::validation("product SKU cannot be empty"));
            }
        }

        for (i, product) in products.iter().enumerate() {
            if products[..i].iter().any(|p| p.sku == product.sku) {
                return Err(DomainError::conflict(format!(
                    "duplicate SKU: {}",
                    product.sku
                )));
            }
        }

        tracing::debug!(count = products.len(), "product catalog loaded");
        Ok(Self { products })
    }

    pub fn resolve(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id == id)
    }

    pub fn all(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Case-insensitive substring search over name and SKU.
    ///
    /// An empty (or whitespace) query matches everything, which is how the
    /// inventory screen behaves before anything is typed.
    pub fn search(&self, query: &str) -> Vec<&Product> {
        let needle = query.trim().to_lowercase();
        self.products
            .iter()
            .filter(|p| {
                needle.is_empty()
                    || p.name.to_lowercase().contains(&needle)
                    || p.sku.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Search plus pagination, for table rendering.
    pub fn search_page(&self, query: &str, page: usize, per_page: usize) -> Page<&Product> {
        let matches = self.search(query);
        let paged = paginate(&matches, page, per_page);
        Page {
            items: paged.items.into_iter().copied().collect(),
            total: paged.total,
            page: paged.page,
            per_page: paged.per_page,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn product(sku: &str, name: &str, cost: Option<Decimal>) -> Product {
        Product {
            id: ProductId::new(EntityId::new()),
            sku: sku.to_string(),
            name: name.to_string(),
            default_cost: cost,
        }
    }

    fn sample_catalog() -> ProductCatalog {
        ProductCatalog::new(vec![
            product("SKU-001", "Thermal Paper Roll", Some(dec!(120))),
            product("SKU-002", "Barcode Scanner", Some(dec!(450))),
            product("SKU-003", "Cash Drawer", None),
            product("SKU-004", "Receipt Printer", Some(dec!(300))),
        ])
        .unwrap()
    }

    #[test]
    fn resolve_finds_product_by_id() {
        let catalog = sample_catalog();
        let id = catalog.all()[1].id;
        let found = catalog.resolve(id).unwrap();
        assert_eq!(found.sku, "SKU-002");
        assert_eq!(found.default_cost, Some(dec!(450)));
    }

    #[test]
    fn resolve_unknown_id_is_none() {
        let catalog = sample_catalog();
        assert!(catalog.resolve(ProductId::new(EntityId::new())).is_none());
    }

    #[test]
    fn rejects_empty_name() {
        let err = ProductCatalog::new(vec![product("SKU-001", "   ", None)]).unwrap_err();
        match err {
            DomainError::Validation(_) => {}
            _ => panic!("Expected Validation error for empty name"),
        }
    }

    #[test]
    fn rejects_duplicate_sku() {
        let err = ProductCatalog::new(vec![
            product("SKU-001", "Thermal Paper Roll", None),
            product("SKU-001", "Barcode Scanner", None),
        ])
        .unwrap_err();
        match err {
            DomainError::Conflict(msg) if msg.contains("SKU-001") => {}
            _ => panic!("Expected Conflict error for duplicate SKU"),
        }
    }

    #[test]
    fn search_matches_name_and_sku_case_insensitively() {
        let catalog = sample_catalog();
        let by_name = catalog.search("printer");
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].sku, "SKU-004");

        let by_sku = catalog.search("sku-00");
        assert_eq!(by_sku.len(), 4);
    }

    #[test]
    fn empty_query_matches_all() {
        let catalog = sample_catalog();
        assert_eq!(catalog.search("  ").len(), catalog.len());
    }

    #[test]
    fn search_page_slices_matches() {
        let catalog = sample_catalog();
        let page = catalog.search_page("", 2, 3);
        assert_eq!(page.total, 4);
        assert_eq!(page.items.len(), 1);
        assert_eq!(page.items[0].sku, "SKU-004");
    }
}
