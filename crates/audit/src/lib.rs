//! Audit module: the in-memory activity trail behind the audit-log screen.
//!
//! Entries are seeded at page load and appended as the user acts. The screen
//! filters and pages over them client-side and can export the filtered view
//! as CSV.

pub mod entry;
pub mod log;

pub use entry::{AuditAction, AuditEntry, AuditEntryId};
pub use log::{AuditFilter, AuditLog, ExportError};
