//! Catalog module: read-only product and supplier lookup tables.
//!
//! Both tables are supplied in full at page load and never mutated afterward.
//! The purchasing ledger resolves product references against the catalog to
//! pick up default costs; the inventory screen searches and pages over it.

pub mod product;
pub mod supplier;

pub use product::{Product, ProductCatalog, ProductId};
pub use supplier::{ContactInfo, Supplier, SupplierDirectory, SupplierId};
