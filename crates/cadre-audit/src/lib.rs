//! # Cadre Audit
//!
//! This crate provides the append-only activity log that every Cadre policy
//! decision feeds, whether the action was allowed or denied.
//!
//! ## Overview
//!
//! The cadre-audit crate handles:
//! - **Entries**: Immutable audit records with action, target, details and origin
//! - **Store Port**: Async storage abstraction with an in-memory implementation
//! - **Activity Log**: Best-effort recording and paginated, filtered queries
//! - **Configuration**: Page-size limits loaded from the environment
//!
//! ## Features
//!
//! - `memory` (default): In-memory audit store for single-process apps
//!
//! ## Failure Model
//!
//! Recording never returns an error. A failed write is reported with
//! `tracing::warn!`, counted in [`ActivityLogStats`], and dropped; the action
//! it described stands. Queries return store errors to the caller.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use cadre_audit::{ActionType, ActivityLog, AuditEntry, TargetType};
//! use cadre_org::{InteractionContext, MemberView};
//! use cadre_policy::MessagingPolicy;
//! use uuid::Uuid;
//!
//! async fn send_message(log: &ActivityLog, sender: &MemberView, recipient: &MemberView) -> bool {
//!     let decision =
//!         MessagingPolicy::can_send_first_message(sender, recipient, &InteractionContext::new());
//!
//!     // Forward the decision regardless of outcome
//!     log.record_detached(
//!         AuditEntry::by_member(sender, ActionType::MessageSent)
//!             .with_target(TargetType::Message, Uuid::now_v7())
//!             .with_decision(&decision),
//!     );
//!
//!     decision.is_allowed()
//! }
//! ```

pub mod config;
pub mod log;
pub mod store;
pub mod types;

// Re-export main types for convenience
pub use config::{ActivityLogConfig, ConfigError};
pub use log::{ActivityLog, ActivityLogStats};
pub use store::{AuditError, AuditResult, AuditStore, MemoryAuditStore};
pub use types::{ActionType, AuditEntry, AuditFilter, AuditTarget, RequestOrigin, TargetType};
