//! # Cadre Organization Hierarchy
//!
//! This crate models the chain of command of a ranked political organization,
//! shared by the Cadre policy and audit crates.
//!
//! ## Overview
//!
//! The cadre-org crate handles:
//! - **Ranks**: Six totally ordered authority tiers with level arithmetic
//! - **Resolution**: Deriving a rank from raw role attributes, failing closed
//! - **Members**: Raw member records and the per-call views policies consume
//! - **Context**: Call-scoped relationship flags (thread replies, follows)
//!
//! ## Architecture
//!
//! ```text
//! MemberRecord (raw attributes, affiliation, active flag)
//!   └─ HierarchyResolver ─→ Rank
//!         └─ MemberView (member, affiliation, rank, active)
//!
//! Rank levels:
//!   1 TopExecutive   (metropolitan mayor)
//!   2 RegionalChair  (provincial chair)
//!   3 LocalExecutive (district mayor)
//!   4 LocalChair     (district chair)
//!   5 Staff
//!   6 Member
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use cadre_org::{MemberRecord, MemberView, Rank, RoleAttributes};
//! use uuid::Uuid;
//!
//! let party = Uuid::now_v7();
//! let record = MemberRecord::new(Uuid::now_v7())
//!     .with_affiliation(party)
//!     .with_attributes(RoleAttributes::new().with_specific_role("district_chair"));
//!
//! let view = MemberView::from_record(&record).unwrap();
//! assert_eq!(view.rank, Rank::LocalChair);
//! assert_eq!(view.rank.direct_superior(), Some(Rank::LocalExecutive));
//! ```
//!
//! ## Cross-Crate Integration
//!
//! This crate is designed to work with:
//! - `cadre-policy`: Interaction policies evaluated over member views
//! - `cadre-audit`: Activity log fed by every policy decision
//!
//! ## Feature Flags
//!
//! - `serde`: Serialization support (enabled by default)

pub mod context;
pub mod hierarchy;
pub mod membership;
pub mod roles;

// Re-export main types for convenience
pub use context::InteractionContext;
pub use hierarchy::{HierarchyResolver, RankResolution, RankSource, RoleAttributes};
pub use membership::{MemberRecord, MemberView};
pub use roles::{MemberCategory, Rank};
