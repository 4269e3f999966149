//! Rank resolution
//!
//! Derives a member's [`Rank`] from the raw role attributes carried on its
//! record. Resolution is total: every input produces a rank, and input that
//! cannot be interpreted resolves to the lowest tier.

use serde::{Deserialize, Serialize};

use crate::roles::{MemberCategory, Rank};

/// Raw role attributes as supplied by the member source.
///
/// `specific_role` names an exact office (e.g. `"district_chair"`);
/// `category` is the broad classification (`"member"`, `"staff"`,
/// `"elected_official"`). Either may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoleAttributes {
    /// Exact office held, if known
    pub specific_role: Option<String>,

    /// Broad member category, if known
    pub category: Option<String>,
}

impl RoleAttributes {
    /// Creates an empty attribute set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the specific role.
    pub fn with_specific_role(mut self, role: impl Into<String>) -> Self {
        self.specific_role = Some(role.into());
        self
    }

    /// Set the broad category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Parsed broad category, ignoring blank or unknown values.
    pub fn member_category(&self) -> Option<MemberCategory> {
        non_blank(&self.category).and_then(MemberCategory::parse)
    }
}

/// Which attribute a resolved rank was derived from.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RankSource {
    /// Matched the specific role attribute
    SpecificRole,

    /// Fell back to the broad category
    Category,

    /// Neither attribute was recognized; lowest rank assumed
    Default,
}

/// Outcome of resolving a set of role attributes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct RankResolution {
    /// The resolved rank
    pub rank: Rank,

    /// Where the rank came from
    pub source: RankSource,
}

impl RankResolution {
    /// Check if the rank was assumed rather than derived from the record.
    pub fn is_fallback(&self) -> bool {
        self.source == RankSource::Default
    }
}

/// Stateless resolver from raw attributes to ranks.
///
/// # Examples
///
/// ```
/// use cadre_org::{HierarchyResolver, Rank, RankSource, RoleAttributes};
///
/// let attrs = RoleAttributes::new().with_specific_role("provincial_chair");
/// assert_eq!(HierarchyResolver::resolve_rank(&attrs), Rank::RegionalChair);
///
/// let attrs = RoleAttributes::new().with_category("staff");
/// assert_eq!(HierarchyResolver::resolve_rank(&attrs), Rank::Staff);
///
/// let unknown = HierarchyResolver::resolve(&RoleAttributes::new());
/// assert_eq!(unknown.rank, Rank::Member);
/// assert_eq!(unknown.source, RankSource::Default);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct HierarchyResolver;

impl HierarchyResolver {
    /// Resolve attributes to a rank.
    ///
    /// The specific role wins when it names one of the six ranks. Otherwise a
    /// `staff` or `member` category decides. Anything else yields
    /// [`Rank::Member`].
    pub fn resolve_rank(attributes: &RoleAttributes) -> Rank {
        Self::resolve(attributes).rank
    }

    /// Resolve attributes and report which attribute decided the rank.
    pub fn resolve(attributes: &RoleAttributes) -> RankResolution {
        if let Some(rank) = non_blank(&attributes.specific_role).and_then(Rank::parse) {
            return RankResolution {
                rank,
                source: RankSource::SpecificRole,
            };
        }

        if let Some(rank) = attributes
            .member_category()
            .and_then(|category| category.fallback_rank())
        {
            return RankResolution {
                rank,
                source: RankSource::Category,
            };
        }

        tracing::debug!(
            specific_role = ?attributes.specific_role,
            category = ?attributes.category,
            "Unrecognized role attributes, assuming lowest rank"
        );

        RankResolution {
            rank: Rank::Member,
            source: RankSource::Default,
        }
    }

    /// Numeric level of a rank (1 is the top).
    pub fn level_of(rank: Rank) -> u8 {
        rank.level()
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}
