//! # Decisions
//!
//! The single output type of every policy: whether an action is allowed and
//! which rule decided it. A denial is a normal outcome, not an error.

use serde::{Deserialize, Serialize};

/// Rule that produced a decision.
///
/// The set is closed. Each code serializes to its snake_case name and carries
/// a fixed, locale-independent message template.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ReasonCode {
    /// Actor and target belong to different affiliations.
    CrossAffiliation,

    /// The action continues an existing, permitted thread.
    ThreadReply,

    /// The recipient already follows the sender.
    FollowedException,

    /// The actor outranks the target.
    SuperiorToSubordinate,

    /// The target is the actor's direct superior.
    SubordinateToDirectSuperior,

    /// The target outranks the actor by more than one level.
    SkipLevelForbidden,

    /// Actor and target share a rank.
    PeerToPeer,

    /// No rule applied; denied as a fallback.
    NoRuleMatched,

    /// The actor's rank is too low for the action.
    InsufficientAuthority,

    /// Some announcement targets rank above the creator.
    TargetsOutrankCreator,
}

impl ReasonCode {
    /// Every reason code.
    pub const ALL: [ReasonCode; 10] = [
        ReasonCode::CrossAffiliation,
        ReasonCode::ThreadReply,
        ReasonCode::FollowedException,
        ReasonCode::SuperiorToSubordinate,
        ReasonCode::SubordinateToDirectSuperior,
        ReasonCode::SkipLevelForbidden,
        ReasonCode::PeerToPeer,
        ReasonCode::NoRuleMatched,
        ReasonCode::InsufficientAuthority,
        ReasonCode::TargetsOutrankCreator,
    ];

    /// Get the string representation of the reason code.
    pub fn as_str(&self) -> &'static str {
        match self {
            ReasonCode::CrossAffiliation => "cross_affiliation",
            ReasonCode::ThreadReply => "thread_reply",
            ReasonCode::FollowedException => "followed_exception",
            ReasonCode::SuperiorToSubordinate => "superior_to_subordinate",
            ReasonCode::SubordinateToDirectSuperior => "subordinate_to_direct_superior",
            ReasonCode::SkipLevelForbidden => "skip_level_forbidden",
            ReasonCode::PeerToPeer => "peer_to_peer",
            ReasonCode::NoRuleMatched => "no_rule_matched",
            ReasonCode::InsufficientAuthority => "insufficient_authority",
            ReasonCode::TargetsOutrankCreator => "targets_outrank_creator",
        }
    }

    /// Parse a reason code from its string representation.
    pub fn parse(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|code| code.as_str() == s)
    }

    /// Human-readable message template for this code.
    pub fn message(&self) -> &'static str {
        match self {
            ReasonCode::CrossAffiliation => {
                "Members of different affiliations cannot interact"
            }
            ReasonCode::ThreadReply => "Reply continues an existing conversation",
            ReasonCode::FollowedException => "Recipient already follows the sender",
            ReasonCode::SuperiorToSubordinate => "Superiors may address lower ranks",
            ReasonCode::SubordinateToDirectSuperior => {
                "Members may contact their direct superior"
            }
            ReasonCode::SkipLevelForbidden => {
                "Members may not bypass their direct superior to reach higher ranks"
            }
            ReasonCode::PeerToPeer => "Members of the same rank may contact each other",
            ReasonCode::NoRuleMatched => "No permission rule matched",
            ReasonCode::InsufficientAuthority => "Rank is too low for this action",
            ReasonCode::TargetsOutrankCreator => {
                "Announcements may only target the creator's rank and below"
            }
        }
    }

    /// Check if this code is the reason for an allow decision.
    pub fn is_allowing(&self) -> bool {
        matches!(
            self,
            ReasonCode::ThreadReply
                | ReasonCode::FollowedException
                | ReasonCode::SuperiorToSubordinate
                | ReasonCode::SubordinateToDirectSuperior
                | ReasonCode::PeerToPeer
        )
    }
}

impl std::fmt::Display for ReasonCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single policy evaluation.
///
/// # Example
///
/// ```
/// use cadre_policy::{PermissionDecision, ReasonCode};
///
/// let decision = PermissionDecision::deny(ReasonCode::SkipLevelForbidden);
/// assert!(decision.is_denied());
/// assert_eq!(decision.reason.as_str(), "skip_level_forbidden");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PermissionDecision {
    /// Whether the action may proceed.
    pub allowed: bool,
    /// The rule that decided.
    pub reason: ReasonCode,
    /// Message template for the reason.
    pub message: String,
}

impl PermissionDecision {
    /// Create an allow decision.
    pub fn allow(reason: ReasonCode) -> Self {
        Self::new(true, reason)
    }

    /// Create a deny decision.
    pub fn deny(reason: ReasonCode) -> Self {
        Self::new(false, reason)
    }

    fn new(allowed: bool, reason: ReasonCode) -> Self {
        Self {
            allowed,
            reason,
            message: reason.message().to_string(),
        }
    }

    /// Check if the action is allowed.
    pub fn is_allowed(&self) -> bool {
        self.allowed
    }

    /// Check if the action is denied.
    pub fn is_denied(&self) -> bool {
        !self.allowed
    }
}
