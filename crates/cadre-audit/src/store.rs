//! Audit store port
//!
//! This module provides the storage abstraction the activity log writes to,
//! and an in-memory implementation for single-process deployments and tests.

use crate::types::{AuditEntry, AuditFilter};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::RwLock;
use uuid::Uuid;

/// Audit store error types.
#[derive(Debug, Error)]
pub enum AuditError {
    /// Failed to write an entry
    #[error("Failed to write audit entry: {0}")]
    WriteError(String),

    /// Failed to read entries
    #[error("Failed to query audit entries: {0}")]
    QueryError(String),

    /// Backing store is unreachable
    #[error("Audit store unavailable: {0}")]
    Unavailable(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(String),
}

/// Result type for audit store operations.
pub type AuditResult<T> = Result<T, AuditError>;

/// Append-only audit storage.
///
/// Implementations own the schema. They must never update or delete entries
/// on behalf of this crate.
#[async_trait]
pub trait AuditStore: Send + Sync {
    /// Append an entry.
    async fn insert(&self, entry: AuditEntry) -> AuditResult<()>;

    /// Read one page of an affiliation's entries, newest first.
    ///
    /// # Arguments
    ///
    /// * `affiliation_id` - Affiliation whose entries to read
    /// * `filter` - Optional actor and action filters, combined with AND
    /// * `limit` - Maximum number of entries to return
    /// * `offset` - Number of matching entries to skip
    async fn query(
        &self,
        affiliation_id: Uuid,
        filter: &AuditFilter,
        limit: usize,
        offset: usize,
    ) -> AuditResult<Vec<AuditEntry>>;

    /// Count an affiliation's entries passing `filter`.
    async fn count(&self, affiliation_id: Uuid, filter: &AuditFilter) -> AuditResult<usize>;
}

/// In-memory audit store.
///
/// Suitable for single-process applications and testing. Entries live as long
/// as the store does.
#[derive(Clone, Default)]
pub struct MemoryAuditStore {
    /// Appended entries, in insertion order
    entries: Arc<RwLock<Vec<AuditEntry>>>,
}

impl std::fmt::Debug for MemoryAuditStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MemoryAuditStore").finish_non_exhaustive()
    }
}

impl MemoryAuditStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total number of stored entries across all affiliations.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Check if the store holds no entries.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl AuditStore for MemoryAuditStore {
    async fn insert(&self, entry: AuditEntry) -> AuditResult<()> {
        self.entries.write().await.push(entry);
        Ok(())
    }

    async fn query(
        &self,
        affiliation_id: Uuid,
        filter: &AuditFilter,
        limit: usize,
        offset: usize,
    ) -> AuditResult<Vec<AuditEntry>> {
        let entries = self.entries.read().await;

        let mut matching: Vec<&AuditEntry> = entries
            .iter()
            .filter(|e| e.affiliation_id == affiliation_id && filter.matches(e))
            .collect();

        // Newest first; v7 ids break timestamp ties in creation order
        matching.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        Ok(matching
            .into_iter()
            .skip(offset)
            .take(limit)
            .cloned()
            .collect())
    }

    async fn count(&self, affiliation_id: Uuid, filter: &AuditFilter) -> AuditResult<usize> {
        let entries = self.entries.read().await;
        Ok(entries
            .iter()
            .filter(|e| e.affiliation_id == affiliation_id && filter.matches(e))
            .count())
    }
}
