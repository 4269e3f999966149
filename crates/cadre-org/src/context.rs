//! Interaction context
//!
//! Call-scoped relationship flags computed by the caller that can override
//! pure hierarchy rules.

use serde::{Deserialize, Serialize};

/// Relationship facts about a single prospective interaction.
///
/// Both flags default to `false`; a default context lets hierarchy rules decide
/// alone.
///
/// # Examples
///
/// ```
/// use cadre_org::InteractionContext;
///
/// let ctx = InteractionContext::new().reply_in_thread();
/// assert!(ctx.is_reply_in_thread);
/// assert!(!ctx.is_followed_by_target);
/// ```
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct InteractionContext {
    /// The action continues an existing, previously permitted thread
    #[serde(default)]
    pub is_reply_in_thread: bool,

    /// The recipient already follows the sender
    #[serde(default)]
    pub is_followed_by_target: bool,
}

impl InteractionContext {
    /// Creates a context with no relationship overrides.
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark the action as a reply in an existing thread.
    pub fn reply_in_thread(mut self) -> Self {
        self.is_reply_in_thread = true;
        self
    }

    /// Mark the recipient as already following the sender.
    pub fn followed_by_target(mut self) -> Self {
        self.is_followed_by_target = true;
        self
    }
}
