//! # Cadre Policies
//!
//! This crate decides, for every attempted cross-member interaction, whether
//! the acting member is permitted to perform it.
//!
//! ## Overview
//!
//! The cadre-policy crate handles:
//! - **Decisions**: `PermissionDecision` with a closed set of reason codes
//! - **Messaging**: First messages along the chain of command
//! - **Tasks**: Delegation to equal or lower ranks
//! - **Events**: Event creation by managing ranks
//! - **Announcements**: Broadcast targeting at or below the creator's rank
//! - **Module Access**: Entry gate for the organization module
//!
//! ## Architecture
//!
//! ```text
//! MemberView + InteractionContext ─→ Policy
//!                                      │
//!                                      ▼
//!              PermissionDecision { allowed, reason, message }
//!
//! Reason codes:
//!   cross_affiliation, thread_reply, followed_exception,
//!   superior_to_subordinate, subordinate_to_direct_superior,
//!   skip_level_forbidden, peer_to_peer, no_rule_matched,
//!   insufficient_authority, targets_outrank_creator
//! ```
//!
//! Policies are stateless unit structs with associated functions. They never
//! block, never fail, and return identical decisions for identical inputs.
//!
//! ## Usage
//!
//! ```rust
//! use cadre_org::{InteractionContext, MemberView, Rank};
//! use cadre_policy::{MessagingPolicy, ReasonCode, TaskAssignmentPolicy};
//! use uuid::Uuid;
//!
//! let party = Uuid::now_v7();
//! let member = MemberView::new(Uuid::now_v7(), party, Rank::Member);
//! let staff = MemberView::new(Uuid::now_v7(), party, Rank::Staff);
//!
//! let ctx = InteractionContext::new();
//! let decision = MessagingPolicy::can_send_first_message(&member, &staff, &ctx);
//! assert_eq!(decision.reason, ReasonCode::SubordinateToDirectSuperior);
//!
//! assert!(TaskAssignmentPolicy::can_assign_task(&member, &staff).is_denied());
//! ```
//!
//! ## Integration with cadre-audit
//!
//! Every decision, allowed or denied, is meant to be forwarded to the
//! `cadre-audit` activity log by the caller.

pub mod access;
pub mod announcements;
pub mod decision;
pub mod events;
pub mod messaging;
pub mod tasks;

// Re-export main types for convenience
pub use access::{AccessDenial, ModuleAccessGuard};
pub use announcements::{AnnouncementTargetingPolicy, TargetingDecision};
pub use decision::{PermissionDecision, ReasonCode};
pub use events::EventCreationPolicy;
pub use messaging::MessagingPolicy;
pub use tasks::TaskAssignmentPolicy;
