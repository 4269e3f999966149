//! # Task Assignment
//!
//! Work flows downward or sideways, never upward. No relationship exception
//! applies to delegation.

use cadre_org::{MemberView, Rank};
use std::collections::BTreeSet;

use crate::decision::{PermissionDecision, ReasonCode};

/// Task delegation policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaskAssignmentPolicy;

impl TaskAssignmentPolicy {
    /// Decide whether `assigner` may assign a task to `assignee`.
    ///
    /// Allowed when the assigner ranks equal to or above the assignee, within
    /// the same affiliation.
    ///
    /// # Example
    ///
    /// ```
    /// use cadre_org::{MemberView, Rank};
    /// use cadre_policy::{ReasonCode, TaskAssignmentPolicy};
    /// use uuid::Uuid;
    ///
    /// let party = Uuid::now_v7();
    /// let staff = MemberView::new(Uuid::now_v7(), party, Rank::Staff);
    /// let chair = MemberView::new(Uuid::now_v7(), party, Rank::LocalChair);
    ///
    /// assert!(TaskAssignmentPolicy::can_assign_task(&chair, &staff).is_allowed());
    /// assert_eq!(
    ///     TaskAssignmentPolicy::can_assign_task(&staff, &chair).reason,
    ///     ReasonCode::InsufficientAuthority
    /// );
    /// ```
    pub fn can_assign_task(assigner: &MemberView, assignee: &MemberView) -> PermissionDecision {
        if !assigner.same_affiliation(assignee) {
            return PermissionDecision::deny(ReasonCode::CrossAffiliation);
        }

        if assigner.rank.is_higher_than(assignee.rank) {
            PermissionDecision::allow(ReasonCode::SuperiorToSubordinate)
        } else if assigner.rank.is_same_level(assignee.rank) {
            PermissionDecision::allow(ReasonCode::PeerToPeer)
        } else {
            PermissionDecision::deny(ReasonCode::InsufficientAuthority)
        }
    }

    /// Ranks a member of `rank` may assign work to: its own and every lower rank.
    pub fn assignable_ranks(rank: Rank) -> BTreeSet<Rank> {
        let mut ranks = rank.subordinates();
        ranks.insert(rank);
        ranks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    #[test]
    fn test_cross_affiliation_denied() {
        let top = MemberView::new(Uuid::now_v7(), Uuid::now_v7(), Rank::TopExecutive);
        let member = MemberView::new(Uuid::now_v7(), Uuid::now_v7(), Rank::Member);

        let decision = TaskAssignmentPolicy::can_assign_task(&top, &member);
        assert!(decision.is_denied());
        assert_eq!(decision.reason, ReasonCode::CrossAffiliation);
    }

    #[test]
    fn test_rank_matrix() {
        let party = Uuid::now_v7();
        for from in Rank::ALL {
            for to in Rank::ALL {
                let assigner = MemberView::new(Uuid::now_v7(), party, from);
                let assignee = MemberView::new(Uuid::now_v7(), party, to);
                let decision = TaskAssignmentPolicy::can_assign_task(&assigner, &assignee);

                assert_eq!(decision.is_allowed(), from.level() <= to.level());
                assert_eq!(
                    decision.is_allowed(),
                    TaskAssignmentPolicy::assignable_ranks(from).contains(&to)
                );
                if to.is_higher_than(from) {
                    assert_eq!(decision.reason, ReasonCode::InsufficientAuthority);
                }
            }
        }
    }

    #[test]
    fn test_peer_assignment_reason() {
        let party = Uuid::now_v7();
        let a = MemberView::new(Uuid::now_v7(), party, Rank::Staff);
        let b = MemberView::new(Uuid::now_v7(), party, Rank::Staff);
        assert_eq!(
            TaskAssignmentPolicy::can_assign_task(&a, &b).reason,
            ReasonCode::PeerToPeer
        );
    }

    #[test]
    fn test_assignable_ranks() {
        let ranks = TaskAssignmentPolicy::assignable_ranks(Rank::LocalChair);
        assert_eq!(
            ranks.into_iter().collect::<Vec<_>>(),
            vec![Rank::LocalChair, Rank::Staff, Rank::Member]
        );
        assert_eq!(TaskAssignmentPolicy::assignable_ranks(Rank::TopExecutive).len(), 6);
    }

    #[test]
    fn test_repeated_calls_are_identical() {
        let party = Uuid::now_v7();
        for from in Rank::ALL {
            for to in Rank::ALL {
                let assigner = MemberView::new(Uuid::now_v7(), party, from);
                let assignee = MemberView::new(Uuid::now_v7(), party, to);

                let first = TaskAssignmentPolicy::can_assign_task(&assigner, &assignee);
                for _ in 0..3 {
                    assert_eq!(TaskAssignmentPolicy::can_assign_task(&assigner, &assignee), first);
                }
            }
        }
    }
}
