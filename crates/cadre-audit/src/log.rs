//! Activity log
//!
//! Best-effort front end over an [`AuditStore`]. Writes never fail from the
//! caller's point of view: store errors are reported through `tracing` and
//! counted, then dropped, so an audit outage cannot undo the action it was
//! describing.

use crate::config::{ActivityLogConfig, ConfigError};
use crate::store::{AuditResult, AuditStore, MemoryAuditStore};
use crate::types::{AuditEntry, AuditFilter};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Write counters for an activity log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ActivityLogStats {
    /// Entries the store accepted
    pub recorded: u64,
    /// Entries the store rejected
    pub failed: u64,
}

#[derive(Debug, Default)]
struct Counters {
    recorded: AtomicU64,
    failed: AtomicU64,
}

/// Append-only activity log.
///
/// Cloning is cheap and clones share the store and counters.
///
/// # Example
///
/// ```rust,no_run
/// use cadre_audit::{ActionType, ActivityLog, AuditEntry, AuditFilter};
/// use uuid::Uuid;
///
/// async fn example() {
///     let log = ActivityLog::in_memory();
///     let party = Uuid::now_v7();
///
///     log.record(AuditEntry::new(party, Uuid::now_v7(), ActionType::PollVoted)).await;
///
///     let page = log.query(party, &AuditFilter::new(), 20, 0).await.unwrap();
///     assert_eq!(page.len(), 1);
/// }
/// ```
#[derive(Clone)]
pub struct ActivityLog {
    store: Arc<dyn AuditStore>,
    config: ActivityLogConfig,
    counters: Arc<Counters>,
}

impl std::fmt::Debug for ActivityLog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActivityLog")
            .field("config", &self.config)
            .field("stats", &self.stats())
            .finish()
    }
}

impl ActivityLog {
    /// Create a log over `store` with default configuration.
    pub fn new(store: Arc<dyn AuditStore>) -> Self {
        Self {
            store,
            config: ActivityLogConfig::default(),
            counters: Arc::new(Counters::default()),
        }
    }

    /// Create a log over `store` with explicit configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when either page size is zero or
    /// the default page exceeds the maximum.
    pub fn with_config(
        store: Arc<dyn AuditStore>,
        config: ActivityLogConfig,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            ..Self::new(store)
        })
    }

    /// Create a log backed by a fresh [`MemoryAuditStore`].
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryAuditStore::new()))
    }

    /// Configuration in use.
    pub fn config(&self) -> &ActivityLogConfig {
        &self.config
    }

    /// Append an entry, swallowing any store failure.
    pub async fn record(&self, entry: AuditEntry) {
        let entry_id = entry.id;
        let action = entry.action_type;
        let affiliation_id = entry.affiliation_id;
        let actor_id = entry.actor_id;

        match self.store.insert(entry).await {
            Ok(()) => {
                self.counters.recorded.fetch_add(1, Ordering::Relaxed);
                tracing::trace!(
                    entry_id = %entry_id,
                    action = %action,
                    "Audit entry recorded"
                );
            }
            Err(e) => {
                self.counters.failed.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    error = %e,
                    action = %action,
                    affiliation_id = %affiliation_id,
                    actor_id = %actor_id,
                    "Failed to record audit entry"
                );
            }
        }
    }

    /// Append an entry on a background task.
    ///
    /// The returned handle only needs to be awaited by callers that want to
    /// observe completion. Outside a Tokio runtime the entry is dropped,
    /// counted as failed, and `None` is returned.
    pub fn record_detached(&self, entry: AuditEntry) -> Option<JoinHandle<()>> {
        match Handle::try_current() {
            Ok(handle) => {
                let log = self.clone();
                Some(handle.spawn(async move { log.record(entry).await }))
            }
            Err(e) => {
                self.counters.failed.fetch_add(1, Ordering::Relaxed);
                tracing::warn!(
                    error = %e,
                    action = %entry.action_type,
                    affiliation_id = %entry.affiliation_id,
                    actor_id = %entry.actor_id,
                    "No runtime for detached audit entry"
                );
                None
            }
        }
    }

    /// Read one page of an affiliation's entries, newest first.
    ///
    /// `limit` is clamped by [`ActivityLogConfig::page_size`].
    pub async fn query(
        &self,
        affiliation_id: Uuid,
        filter: &AuditFilter,
        limit: usize,
        offset: usize,
    ) -> AuditResult<Vec<AuditEntry>> {
        let limit = self.config.page_size(limit);
        self.store.query(affiliation_id, filter, limit, offset).await
    }

    /// Count an affiliation's entries passing `filter`.
    pub async fn count(&self, affiliation_id: Uuid, filter: &AuditFilter) -> AuditResult<usize> {
        self.store.count(affiliation_id, filter).await
    }

    /// Write counters since the log was created.
    pub fn stats(&self) -> ActivityLogStats {
        ActivityLogStats {
            recorded: self.counters.recorded.load(Ordering::Relaxed),
            failed: self.counters.failed.load(Ordering::Relaxed),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::AuditError;
    use crate::types::ActionType;
    use async_trait::async_trait;

    struct UnavailableStore;

    #[async_trait]
    impl AuditStore for UnavailableStore {
        async fn insert(&self, _entry: AuditEntry) -> AuditResult<()> {
            Err(AuditError::Unavailable("connection refused".to_string()))
        }

        async fn query(
            &self,
            _affiliation_id: Uuid,
            _filter: &AuditFilter,
            _limit: usize,
            _offset: usize,
        ) -> AuditResult<Vec<AuditEntry>> {
            Err(AuditError::Unavailable("connection refused".to_string()))
        }

        async fn count(&self, _affiliation_id: Uuid, _filter: &AuditFilter) -> AuditResult<usize> {
            Err(AuditError::Unavailable("connection refused".to_string()))
        }
    }

    #[tokio::test]
    async fn test_record_and_query() {
        let log = ActivityLog::in_memory();
        let party = Uuid::now_v7();
        let actor = Uuid::now_v7();

        log.record(AuditEntry::new(party, actor, ActionType::AnnouncementCreated))
            .await;
        log.record(AuditEntry::new(party, actor, ActionType::AnnouncementRead))
            .await;

        let page = log.query(party, &AuditFilter::new(), 0, 0).await.unwrap();
        assert_eq!(page.len(), 2);
        assert_eq!(log.count(party, &AuditFilter::new()).await.unwrap(), 2);
        assert_eq!(
            log.stats(),
            ActivityLogStats {
                recorded: 2,
                failed: 0
            }
        );
    }

    #[tokio::test]
    async fn test_store_failure_is_swallowed() {
        let log = ActivityLog::new(Arc::new(UnavailableStore));

        log.record(AuditEntry::new(
            Uuid::now_v7(),
            Uuid::now_v7(),
            ActionType::MessageSent,
        ))
        .await;

        let stats = log.stats();
        assert_eq!(stats.recorded, 0);
        assert_eq!(stats.failed, 1);
    }

    #[tokio::test]
    async fn test_query_failure_is_reported() {
        let log = ActivityLog::new(Arc::new(UnavailableStore));
        let result = log.query(Uuid::now_v7(), &AuditFilter::new(), 10, 0).await;
        assert!(matches!(result, Err(AuditError::Unavailable(_))));
    }

    #[tokio::test]
    async fn test_record_detached() {
        let log = ActivityLog::in_memory();
        let party = Uuid::now_v7();

        let handle = log.record_detached(AuditEntry::new(
            party,
            Uuid::now_v7(),
            ActionType::TaskCompleted,
        ));
        handle.unwrap().await.unwrap();

        assert_eq!(log.count(party, &AuditFilter::new()).await.unwrap(), 1);
        assert_eq!(log.stats().recorded, 1);
    }

    #[tokio::test]
    async fn test_detached_failure_stays_isolated() {
        let log = ActivityLog::new(Arc::new(UnavailableStore));
        let handle = log.record_detached(AuditEntry::new(
            Uuid::now_v7(),
            Uuid::now_v7(),
            ActionType::EventDeleted,
        ));

        assert!(handle.unwrap().await.is_ok());
        assert_eq!(log.stats().failed, 1);
    }

    #[tokio::test]
    async fn test_page_size_is_capped() {
        let config = ActivityLogConfig {
            default_page_size: 2,
            max_page_size: 3,
        };
        let log = ActivityLog::with_config(Arc::new(MemoryAuditStore::new()), config).unwrap();
        let party = Uuid::now_v7();

        for _ in 0..5 {
            log.record(AuditEntry::new(party, Uuid::now_v7(), ActionType::PollVoted))
                .await;
        }

        assert_eq!(log.query(party, &AuditFilter::new(), 0, 0).await.unwrap().len(), 2);
        assert_eq!(log.query(party, &AuditFilter::new(), 100, 0).await.unwrap().len(), 3);
    }

    #[test]
    fn test_unusable_config_is_rejected() {
        let zero_max = ActivityLogConfig {
            default_page_size: 50,
            max_page_size: 0,
        };
        let err =
            ActivityLog::with_config(Arc::new(MemoryAuditStore::new()), zero_max).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref key, .. } if key == "CADRE_AUDIT_MAX_PAGE_SIZE"
        ));

        let inverted = ActivityLogConfig {
            default_page_size: 300,
            max_page_size: 200,
        };
        assert!(ActivityLog::with_config(Arc::new(MemoryAuditStore::new()), inverted).is_err());
    }

    #[tokio::test]
    async fn test_valid_config_returns_every_entry() {
        let config = ActivityLogConfig {
            default_page_size: 1,
            max_page_size: 10,
        };
        let log = ActivityLog::with_config(Arc::new(MemoryAuditStore::new()), config).unwrap();
        let party = Uuid::now_v7();

        log.record(AuditEntry::new(party, Uuid::now_v7(), ActionType::PollCreated))
            .await;

        let count = log.count(party, &AuditFilter::new()).await.unwrap();
        let page = log.query(party, &AuditFilter::new(), 10, 0).await.unwrap();
        assert_eq!(page.len(), count);
    }

    #[test]
    fn test_detached_outside_runtime_is_dropped() {
        let log = ActivityLog::in_memory();
        let handle = log.record_detached(AuditEntry::new(
            Uuid::now_v7(),
            Uuid::now_v7(),
            ActionType::MessageSent,
        ));

        assert!(handle.is_none());
        assert_eq!(log.stats().failed, 1);
        assert_eq!(log.stats().recorded, 0);
    }
}
