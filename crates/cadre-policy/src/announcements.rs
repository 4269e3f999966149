//! # Announcement Targeting
//!
//! A creator may broadcast to its own rank and to every rank below it, never
//! upward.

use cadre_org::{MemberView, Rank};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::decision::{PermissionDecision, ReasonCode};

/// Targeting decision together with the ranks that caused a denial.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TargetingDecision {
    /// The decision itself.
    pub decision: PermissionDecision,
    /// Requested ranks the creator may not address. Empty when allowed.
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    pub invalid_targets: BTreeSet<Rank>,
}

impl TargetingDecision {
    /// Check if the targeting is allowed.
    pub fn is_allowed(&self) -> bool {
        self.decision.is_allowed()
    }
}

/// Announcement targeting policy.
///
/// # Example
///
/// ```
/// use cadre_org::{MemberView, Rank};
/// use cadre_policy::AnnouncementTargetingPolicy;
/// use std::collections::BTreeSet;
/// use uuid::Uuid;
///
/// let chair = MemberView::new(Uuid::now_v7(), Uuid::now_v7(), Rank::LocalChair);
///
/// let down = BTreeSet::from([Rank::Staff, Rank::Member]);
/// assert!(AnnouncementTargetingPolicy::can_target_ranks(&chair, &down).is_allowed());
///
/// let up = BTreeSet::from([Rank::RegionalChair]);
/// let result = AnnouncementTargetingPolicy::can_target_ranks(&chair, &up);
/// assert_eq!(result.invalid_targets, up);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct AnnouncementTargetingPolicy;

impl AnnouncementTargetingPolicy {
    /// Ranks a creator of `rank` may address.
    pub fn allowed_targets(rank: Rank) -> BTreeSet<Rank> {
        let mut targets = rank.subordinates();
        targets.insert(rank);
        targets
    }

    /// Decide whether `creator` may target every rank in `target_ranks`.
    ///
    /// An empty target set is allowed.
    pub fn can_target_ranks(
        creator: &MemberView,
        target_ranks: &BTreeSet<Rank>,
    ) -> TargetingDecision {
        let allowed = Self::allowed_targets(creator.rank);
        let invalid_targets: BTreeSet<Rank> =
            target_ranks.difference(&allowed).copied().collect();

        if invalid_targets.is_empty() {
            TargetingDecision {
                decision: PermissionDecision::allow(ReasonCode::SuperiorToSubordinate),
                invalid_targets,
            }
        } else {
            TargetingDecision {
                decision: PermissionDecision::deny(ReasonCode::TargetsOutrankCreator),
                invalid_targets,
            }
        }
    }
}
