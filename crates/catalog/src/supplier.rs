use serde::{Deserialize, Serialize};

use tillbook_core::{DomainError, Entity, EntityId};

/// Supplier identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SupplierId(pub EntityId);

impl SupplierId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for SupplierId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Contact information for a supplier.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

/// One supplier row from the purchase-entry dropdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Supplier {
    pub id: SupplierId,
    pub name: String,
    #[serde(default)]
    pub contact: ContactInfo,
}

impl Entity for Supplier {
    type Id = SupplierId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Read-only supplier list, supplied at page load.
#[derive(Debug, Clone, PartialEq)]
pub struct SupplierDirectory {
    suppliers: Vec<Supplier>,
}

impl SupplierDirectory {
    pub fn new(suppliers: Vec<Supplier>) -> Result<Self, DomainError> {
        for supplier in &suppliers {
            if supplier.name.trim().is_empty() {
                return Err(DomainError::validation("supplier name cannot be empty"));
            }
        }
        Ok(Self { suppliers })
    }

    pub fn get(&self, id: SupplierId) -> Option<&Supplier> {
        self.suppliers.iter().find(|s| s.id == id)
    }

    pub fn all(&self) -> &[Supplier] {
        &self.suppliers
    }

    pub fn len(&self) -> usize {
        self.suppliers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.suppliers.is_empty()
    }
}
