//! # Event Creation
//!
//! Only the four managing tiers may create organization-wide events.

use cadre_org::MemberView;

use crate::decision::{PermissionDecision, ReasonCode};

/// Event creation policy.
#[derive(Debug, Clone, Copy, Default)]
pub struct EventCreationPolicy;

impl EventCreationPolicy {
    /// Check if `member` may create an event.
    ///
    /// `true` for TopExecutive, RegionalChair, LocalExecutive and LocalChair;
    /// Staff and Member are always refused.
    pub fn can_create_event(member: &MemberView) -> bool {
        member.rank.is_manager()
    }

    /// Same check as [`can_create_event`](Self::can_create_event), as a decision
    /// suitable for auditing.
    pub fn decide(member: &MemberView) -> PermissionDecision {
        if Self::can_create_event(member) {
            PermissionDecision::allow(ReasonCode::SuperiorToSubordinate)
        } else {
            PermissionDecision::deny(ReasonCode::InsufficientAuthority)
        }
    }
}
