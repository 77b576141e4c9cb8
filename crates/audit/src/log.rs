use std::io;

use chrono::{DateTime, SecondsFormat, Utc};
use thiserror::Error;

use tillbook_core::{paginate, Page};

use crate::entry::{AuditAction, AuditEntry};

/// CSV export failure.
///
/// The only fallible part of this module; everything else is in-memory.
#[derive(Debug, Error)]
pub enum ExportError {
    #[error("csv write failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("flush failed: {0}")]
    Io(#[from] io::Error),
}

/// Conjunctive filter over the audit trail. All criteria are optional.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuditFilter {
    /// Exact actor match, case-insensitive.
    pub actor: Option<String>,
    pub action: Option<AuditAction>,
    /// Case-insensitive substring over entity and details.
    pub text: Option<String>,
    /// Inclusive lower bound on `occurred_at`.
    pub from: Option<DateTime<Utc>>,
    /// Inclusive upper bound on `occurred_at`.
    pub to: Option<DateTime<Utc>>,
}

impl AuditFilter {
    fn matches(&self, entry: &AuditEntry) -> bool {
        if let Some(actor) = &self.actor {
            if !entry.actor.eq_ignore_ascii_case(actor) {
                return false;
            }
        }
        if let Some(action) = self.action {
            if entry.action != action {
                return false;
            }
        }
        if let Some(text) = &self.text {
            let needle = text.trim().to_lowercase();
            if !needle.is_empty()
                && !entry.entity.to_lowercase().contains(&needle)
                && !entry.details.to_lowercase().contains(&needle)
            {
                return false;
            }
        }
        if let Some(from) = self.from {
            if entry.occurred_at < from {
                return false;
            }
        }
        if let Some(to) = self.to {
            if entry.occurred_at > to {
                return false;
            }
        }
        true
    }
}

/// The audit trail: an append-only, insertion-ordered list of entries.
#[derive(Debug, Clone, PartialEq)]
pub struct AuditLog {
    entries: Vec<AuditEntry>,
}

impl AuditLog {
    /// Build the log from seed data (the mock rows the screen loads with).
    pub fn new(entries: Vec<AuditEntry>) -> Self {
        Self { entries }
    }

    pub fn record(&mut self, entry: AuditEntry) {
        tracing::debug!(actor = %entry.actor, action = %entry.action, entity = %entry.entity,
            "audit entry recorded");
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[AuditEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries matching the filter, in insertion order.
    pub fn query(&self, filter: &AuditFilter) -> Vec<&AuditEntry> {
        self.entries.iter().filter(|e| filter.matches(e)).collect()
    }

    /// Filtered view sliced for table rendering.
    pub fn query_page(&self, filter: &AuditFilter, page: usize, per_page: usize) -> Page<&AuditEntry> {
        let matches = self.query(filter);
        let paged = paginate(&matches, page, per_page);
        Page {
            items: paged.items.into_iter().copied().collect(),
            total: paged.total,
            page: paged.page,
            per_page: paged.per_page,
        }
    }

    /// Export the filtered view as CSV: header row plus one row per entry,
    /// timestamps in RFC 3339. Returns the number of data rows written.
    pub fn export_csv<W: io::Write>(
        &self,
        filter: &AuditFilter,
        writer: W,
    ) -> Result<usize, ExportError> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        csv_writer.write_record(["timestamp", "actor", "action", "entity", "details"])?;

        let rows = self.query(filter);
        for entry in &rows {
            csv_writer.write_record([
                entry
                    .occurred_at
                    .to_rfc3339_opts(SecondsFormat::Secs, true)
                    .as_str(),
                entry.actor.as_str(),
                entry.action.to_string().as_str(),
                entry.entity.as_str(),
                entry.details.as_str(),
            ])?;
        }
        csv_writer.flush()?;

        tracing::info!(rows = rows.len(), "audit log exported");
        Ok(rows.len())
    }
}
