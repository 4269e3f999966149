//! # Messaging
//!
//! Decides whether a member may open a conversation with another member.
//! Replies inside an existing thread always pass; first messages follow the
//! chain of command.

use cadre_org::{InteractionContext, MemberView};

use crate::decision::{PermissionDecision, ReasonCode};

/// First-message policy.
///
/// Rules are evaluated in order and the first match wins:
///
/// 1. Different affiliation: denied (`cross_affiliation`)
/// 2. Reply in an existing thread: allowed (`thread_reply`)
/// 3. Recipient follows sender: allowed (`followed_exception`)
/// 4. Sender outranks recipient: allowed (`superior_to_subordinate`)
/// 5. Recipient is sender's direct superior: allowed (`subordinate_to_direct_superior`)
/// 6. Recipient outranks sender by more than one level: denied (`skip_level_forbidden`)
/// 7. Same rank: allowed (`peer_to_peer`)
/// 8. Otherwise: denied (`no_rule_matched`)
///
/// # Example
///
/// ```
/// use cadre_org::{InteractionContext, MemberView, Rank};
/// use cadre_policy::{MessagingPolicy, ReasonCode};
/// use uuid::Uuid;
///
/// let party = Uuid::now_v7();
/// let member = MemberView::new(Uuid::now_v7(), party, Rank::Member);
/// let chair = MemberView::new(Uuid::now_v7(), party, Rank::RegionalChair);
///
/// let ctx = InteractionContext::new();
/// let decision = MessagingPolicy::can_send_first_message(&member, &chair, &ctx);
/// assert_eq!(decision.reason, ReasonCode::SkipLevelForbidden);
///
/// let reply = InteractionContext::new().reply_in_thread();
/// assert!(MessagingPolicy::can_send_first_message(&member, &chair, &reply).is_allowed());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct MessagingPolicy;

impl MessagingPolicy {
    /// Decide whether `sender` may message `recipient`.
    pub fn can_send_first_message(
        sender: &MemberView,
        recipient: &MemberView,
        ctx: &InteractionContext,
    ) -> PermissionDecision {
        if !sender.same_affiliation(recipient) {
            return PermissionDecision::deny(ReasonCode::CrossAffiliation);
        }

        if ctx.is_reply_in_thread {
            return PermissionDecision::allow(ReasonCode::ThreadReply);
        }

        if ctx.is_followed_by_target {
            return PermissionDecision::allow(ReasonCode::FollowedException);
        }

        let (from, to) = (sender.rank, recipient.rank);

        if from.is_higher_than(to) {
            return PermissionDecision::allow(ReasonCode::SuperiorToSubordinate);
        }

        if to.is_direct_superior_of(from) {
            return PermissionDecision::allow(ReasonCode::SubordinateToDirectSuperior);
        }

        if to.is_higher_than(from) {
            return PermissionDecision::deny(ReasonCode::SkipLevelForbidden);
        }

        if from.is_same_level(to) {
            return PermissionDecision::allow(ReasonCode::PeerToPeer);
        }

        PermissionDecision::deny(ReasonCode::NoRuleMatched)
    }
}
