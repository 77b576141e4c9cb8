//! `tillbook-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives (no infrastructure concerns):
//! the error model, strongly-typed identifiers, decimal display/coercion
//! helpers, and pagination over in-memory lists.

pub mod entity;
pub mod error;
pub mod id;
pub mod money;
pub mod page;

pub use entity::Entity;
pub use error::{DomainError, DomainResult};
pub use id::EntityId;
pub use page::{paginate, Page};
