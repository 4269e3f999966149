//! Audit entry types
//!
//! This module defines the audit record written for every decision-bearing
//! action, together with the closed set of action and target kinds.

use cadre_org::MemberView;
use cadre_policy::PermissionDecision;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use uuid::Uuid;

/// Audited action kinds.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ActionType {
    /// A message was sent
    MessageSent,
    /// A message was read
    MessageRead,
    /// An event was created
    EventCreated,
    /// An event was updated
    EventUpdated,
    /// An event was deleted
    EventDeleted,
    /// A task was assigned
    TaskAssigned,
    /// A task was accepted by its assignee
    TaskAccepted,
    /// A task was excused
    TaskExcused,
    /// A task was rejected by its assignee
    TaskRejected,
    /// A task was completed
    TaskCompleted,
    /// An excuse was submitted for a task
    ExcuseSubmitted,
    /// An excuse was accepted
    ExcuseAccepted,
    /// An excuse was rejected
    ExcuseRejected,
    /// An announcement was created
    AnnouncementCreated,
    /// An announcement was read
    AnnouncementRead,
    /// A poll was created
    PollCreated,
    /// A vote was cast in a poll
    PollVoted,
}

impl ActionType {
    /// Every action type.
    pub const ALL: [ActionType; 17] = [
        ActionType::MessageSent,
        ActionType::MessageRead,
        ActionType::EventCreated,
        ActionType::EventUpdated,
        ActionType::EventDeleted,
        ActionType::TaskAssigned,
        ActionType::TaskAccepted,
        ActionType::TaskExcused,
        ActionType::TaskRejected,
        ActionType::TaskCompleted,
        ActionType::ExcuseSubmitted,
        ActionType::ExcuseAccepted,
        ActionType::ExcuseRejected,
        ActionType::AnnouncementCreated,
        ActionType::AnnouncementRead,
        ActionType::PollCreated,
        ActionType::PollVoted,
    ];

    /// Get the string representation of the action.
    pub fn as_str(&self) -> &'static str {
        match self {
            ActionType::MessageSent => "message_sent",
            ActionType::MessageRead => "message_read",
            ActionType::EventCreated => "event_created",
            ActionType::EventUpdated => "event_updated",
            ActionType::EventDeleted => "event_deleted",
            ActionType::TaskAssigned => "task_assigned",
            ActionType::TaskAccepted => "task_accepted",
            ActionType::TaskExcused => "task_excused",
            ActionType::TaskRejected => "task_rejected",
            ActionType::TaskCompleted => "task_completed",
            ActionType::ExcuseSubmitted => "excuse_submitted",
            ActionType::ExcuseAccepted => "excuse_accepted",
            ActionType::ExcuseRejected => "excuse_rejected",
            ActionType::AnnouncementCreated => "announcement_created",
            ActionType::AnnouncementRead => "announcement_read",
            ActionType::PollCreated => "poll_created",
            ActionType::PollVoted => "poll_voted",
        }
    }

    /// Parse an action type, accepting `.` or `-` as separators.
    pub fn parse(s: &str) -> Option<Self> {
        let normalized = s.trim().to_lowercase().replace(['.', '-'], "_");
        Self::ALL
            .into_iter()
            .find(|action| action.as_str() == normalized)
    }

    /// The kind of object this action naturally targets.
    pub fn target_type(&self) -> TargetType {
        match self {
            ActionType::MessageSent | ActionType::MessageRead => TargetType::Message,
            ActionType::EventCreated | ActionType::EventUpdated | ActionType::EventDeleted => {
                TargetType::Event
            }
            ActionType::TaskAssigned
            | ActionType::TaskAccepted
            | ActionType::TaskExcused
            | ActionType::TaskRejected
            | ActionType::TaskCompleted => TargetType::Task,
            ActionType::ExcuseSubmitted
            | ActionType::ExcuseAccepted
            | ActionType::ExcuseRejected => TargetType::Excuse,
            ActionType::AnnouncementCreated | ActionType::AnnouncementRead => {
                TargetType::Announcement
            }
            ActionType::PollCreated | ActionType::PollVoted => TargetType::Poll,
        }
    }
}

impl std::fmt::Display for ActionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kinds of object an audited action can point at.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum TargetType {
    /// Direct message
    Message,
    /// Organization event
    Event,
    /// Assigned task
    Task,
    /// Excuse for a task
    Excuse,
    /// Broadcast announcement
    Announcement,
    /// Poll
    Poll,
}

/// Object an audited action refers to.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditTarget {
    /// Target kind
    pub target_type: TargetType,
    /// Target ID
    pub target_id: Uuid,
}

/// Caller origin, stored opaquely.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RequestOrigin {
    /// Client IP address
    pub ip_address: Option<String>,
    /// Client user agent
    pub user_agent: Option<String>,
}

impl RequestOrigin {
    /// Create an origin from IP address and user agent.
    pub fn new(ip_address: impl Into<String>, user_agent: impl Into<String>) -> Self {
        Self {
            ip_address: Some(ip_address.into()),
            user_agent: Some(user_agent.into()),
        }
    }
}

/// A single audit trail record.
///
/// Entries are immutable once written; the log never updates or deletes them.
///
/// # Examples
///
/// ```
/// use cadre_audit::{ActionType, AuditEntry, TargetType};
/// use uuid::Uuid;
///
/// let task_id = Uuid::now_v7();
/// let entry = AuditEntry::new(Uuid::now_v7(), Uuid::now_v7(), ActionType::TaskAssigned)
///     .with_target(TargetType::Task, task_id)
///     .with_detail("priority", serde_json::json!("high"));
///
/// assert_eq!(entry.target.unwrap().target_id, task_id);
/// assert_eq!(entry.details["priority"], "high");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique entry ID (time-ordered)
    pub id: Uuid,

    /// Affiliation the action happened in
    pub affiliation_id: Uuid,

    /// Member who performed the action
    pub actor_id: Uuid,

    /// What was done
    pub action_type: ActionType,

    /// What it was done to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<AuditTarget>,

    /// Free-form structured details
    #[serde(default)]
    pub details: Map<String, Value>,

    /// Where the request came from
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_origin: Option<RequestOrigin>,

    /// When the entry was created
    pub created_at: DateTime<Utc>,
}

impl AuditEntry {
    /// Create a new entry.
    ///
    /// # Arguments
    ///
    /// * `affiliation_id` - The affiliation the action happened in
    /// * `actor_id` - The acting member
    /// * `action_type` - The audited action
    pub fn new(affiliation_id: Uuid, actor_id: Uuid, action_type: ActionType) -> Self {
        Self {
            id: Uuid::now_v7(),
            affiliation_id,
            actor_id,
            action_type,
            target: None,
            details: Map::new(),
            request_origin: None,
            created_at: Utc::now(),
        }
    }

    /// Create an entry for an action performed by `actor`.
    pub fn by_member(actor: &MemberView, action_type: ActionType) -> Self {
        Self::new(actor.affiliation_id, actor.member_id, action_type)
            .with_detail("actor_rank", Value::from(actor.rank.as_str()))
    }

    /// Set the target.
    pub fn with_target(mut self, target_type: TargetType, target_id: Uuid) -> Self {
        self.target = Some(AuditTarget {
            target_type,
            target_id,
        });
        self
    }

    /// Add a detail value.
    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }

    /// Set the request origin.
    pub fn with_origin(mut self, origin: RequestOrigin) -> Self {
        self.request_origin = Some(origin);
        self
    }

    /// Record the outcome of the policy decision behind this action.
    ///
    /// Adds `allowed` and `reason` to the details.
    pub fn with_decision(self, decision: &PermissionDecision) -> Self {
        self.with_detail("allowed", Value::Bool(decision.allowed))
            .with_detail("reason", Value::from(decision.reason.as_str()))
    }
}

/// Optional, AND-composed filters for audit queries.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditFilter {
    /// Only entries by this actor
    pub actor_id: Option<Uuid>,
    /// Only entries of this action type
    pub action_type: Option<ActionType>,
}

impl AuditFilter {
    /// Create a filter matching everything.
    pub fn new() -> Self {
        Self::default()
    }

    /// Restrict to one actor.
    pub fn for_actor(mut self, actor_id: Uuid) -> Self {
        self.actor_id = Some(actor_id);
        self
    }

    /// Restrict to one action type.
    pub fn with_action(mut self, action_type: ActionType) -> Self {
        self.action_type = Some(action_type);
        self
    }

    /// Check if an entry passes every set filter.
    pub fn matches(&self, entry: &AuditEntry) -> bool {
        self.actor_id.map_or(true, |id| entry.actor_id == id)
            && self.action_type.map_or(true, |action| entry.action_type == action)
    }
}
