use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tillbook_core::{Entity, EntityId};

/// Audit entry identifier.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuditEntryId(pub EntityId);

impl AuditEntryId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }
}

impl core::fmt::Display for AuditEntryId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// What kind of action an entry records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Create,
    Update,
    Delete,
    Login,
    Export,
}

impl core::fmt::Display for AuditAction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let s = match self {
            AuditAction::Create => "create",
            AuditAction::Update => "update",
            AuditAction::Delete => "delete",
            AuditAction::Login => "login",
            AuditAction::Export => "export",
        };
        f.write_str(s)
    }
}

/// One row of the audit trail (immutable once recorded).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub id: AuditEntryId,
    pub occurred_at: DateTime<Utc>,
    pub actor: String,
    pub action: AuditAction,
    /// The record acted on, e.g. "product SKU-001" or "purchase order".
    pub entity: String,
    pub details: String,
}

impl AuditEntry {
    pub fn new(
        occurred_at: DateTime<Utc>,
        actor: impl Into<String>,
        action: AuditAction,
        entity: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            id: AuditEntryId::new(EntityId::new()),
            occurred_at,
            actor: actor.into(),
            action,
            entity: entity.into(),
            details: details.into(),
        }
    }
}

impl Entity for AuditEntry {
    type Id = AuditEntryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
