//! Rank hierarchy
//!
//! This module defines the six ranked tiers of an affiliation together with the
//! broad member categories used for fallback resolution and module access.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Authority tier of a member within an affiliation.
///
/// Ranks are totally ordered. The discriminant is the rank's level: level 1 is
/// the top of the chain of command and level 6 the bottom, so a *lower* level
/// means *higher* authority. The derived `Ord` follows the level, so sorted
/// collections of ranks list the top of the hierarchy first.
///
/// The hierarchy is: TopExecutive > RegionalChair > LocalExecutive > LocalChair > Staff > Member
///
/// # Examples
///
/// ```
/// use cadre_org::Rank;
///
/// assert_eq!(Rank::LocalChair.level(), 4);
/// assert!(Rank::RegionalChair.is_higher_than(Rank::Member));
/// assert!(Rank::LocalChair.is_direct_superior_of(Rank::Staff));
/// assert_eq!(Rank::TopExecutive.direct_superior(), None);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
#[repr(u8)]
pub enum Rank {
    /// Metropolitan-level elected mayor
    TopExecutive = 1,

    /// Provincial chair
    RegionalChair = 2,

    /// District-level elected mayor
    LocalExecutive = 3,

    /// District chair
    LocalChair = 4,

    /// Paid or appointed organization officer
    Staff = 5,

    /// Baseline affiliate
    Member = 6,
}

impl Rank {
    /// Every rank, ordered from the top of the hierarchy to the bottom.
    ///
    /// Index `i` holds the rank at level `i + 1`.
    pub const ALL: [Rank; 6] = [
        Rank::TopExecutive,
        Rank::RegionalChair,
        Rank::LocalExecutive,
        Rank::LocalChair,
        Rank::Staff,
        Rank::Member,
    ];

    /// Numeric level of this rank, from 1 (top) to 6 (bottom).
    pub const fn level(self) -> u8 {
        self as u8
    }

    /// Look up the rank at a given level.
    ///
    /// # Returns
    ///
    /// `None` when `level` is outside `1..=6`
    pub fn from_level(level: u8) -> Option<Self> {
        level
            .checked_sub(1)
            .and_then(|idx| Self::ALL.get(usize::from(idx)))
            .copied()
    }

    /// Check if this rank carries strictly more authority than `other`.
    pub fn is_higher_than(self, other: Rank) -> bool {
        self.level() < other.level()
    }

    /// Check if both ranks sit on the same level.
    pub fn is_same_level(self, other: Rank) -> bool {
        self.level() == other.level()
    }

    /// Check if this rank sits exactly one level above `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// use cadre_org::Rank;
    ///
    /// assert!(Rank::LocalChair.is_direct_superior_of(Rank::Staff));
    /// assert!(!Rank::RegionalChair.is_direct_superior_of(Rank::Member));
    /// ```
    pub fn is_direct_superior_of(self, other: Rank) -> bool {
        other.level().checked_sub(self.level()) == Some(1)
    }

    /// All ranks strictly below this one.
    pub fn subordinates(self) -> BTreeSet<Rank> {
        Self::ALL
            .into_iter()
            .filter(|other| self.is_higher_than(*other))
            .collect()
    }

    /// All ranks strictly above this one.
    pub fn superiors(self) -> BTreeSet<Rank> {
        Self::ALL
            .into_iter()
            .filter(|other| other.is_higher_than(self))
            .collect()
    }

    /// The unique rank one level above this one, if any.
    ///
    /// # Returns
    ///
    /// `None` for [`Rank::TopExecutive`]
    pub fn direct_superior(self) -> Option<Rank> {
        Self::from_level(self.level() - 1)
    }

    /// Check if this rank manages part of the organization.
    ///
    /// Managers are the four elected and chair tiers; Staff and Member are not.
    pub fn is_manager(self) -> bool {
        self.level() <= Rank::LocalChair.level()
    }

    /// Parse a specific-role string into a rank.
    ///
    /// Accepts the canonical snake_case names as well as the titles used by
    /// member records (`metropolitan_mayor`, `provincial_chair`, ...).
    ///
    /// # Examples
    ///
    /// ```
    /// use cadre_org::Rank;
    ///
    /// assert_eq!(Rank::parse("district_chair"), Some(Rank::LocalChair));
    /// assert_eq!(Rank::parse("Local-Chair"), Some(Rank::LocalChair));
    /// assert_eq!(Rank::parse("treasurer"), None);
    /// ```
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "top_executive" | "metropolitan_mayor" => Some(Self::TopExecutive),
            "regional_chair" | "provincial_chair" => Some(Self::RegionalChair),
            "local_executive" | "district_mayor" => Some(Self::LocalExecutive),
            "local_chair" | "district_chair" => Some(Self::LocalChair),
            "staff" | "officer" => Some(Self::Staff),
            "member" => Some(Self::Member),
            _ => None,
        }
    }

    /// Get string representation of the rank.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TopExecutive => "top_executive",
            Self::RegionalChair => "regional_chair",
            Self::LocalExecutive => "local_executive",
            Self::LocalChair => "local_chair",
            Self::Staff => "staff",
            Self::Member => "member",
        }
    }

    /// Get a human-readable display name for the rank.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::TopExecutive => "Metropolitan Mayor",
            Self::RegionalChair => "Provincial Chair",
            Self::LocalExecutive => "District Mayor",
            Self::LocalChair => "District Chair",
            Self::Staff => "Staff",
            Self::Member => "Member",
        }
    }
}

impl Default for Rank {
    fn default() -> Self {
        Self::Member
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Broad category a member record is filed under.
///
/// Categories are coarser than ranks. They decide module eligibility and act
/// as the fallback when a record carries no specific role.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MemberCategory {
    /// Rank-and-file affiliate
    Member,

    /// Organization officer
    Staff,

    /// Holder of an elected office
    ElectedOfficial,
}

impl MemberCategory {
    /// Rank implied by the category alone.
    ///
    /// Only the two lowest tiers can be derived from a category; an elected
    /// official's tier depends on the specific office held.
    pub fn fallback_rank(&self) -> Option<Rank> {
        match self {
            Self::Member => Some(Rank::Member),
            Self::Staff => Some(Rank::Staff),
            Self::ElectedOfficial => None,
        }
    }

    /// Parse a category from string representation (case-insensitive).
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().replace(['-', ' '], "_").as_str() {
            "member" => Some(Self::Member),
            "staff" => Some(Self::Staff),
            "elected_official" | "elected" => Some(Self::ElectedOfficial),
            _ => None,
        }
    }

    /// Get string representation of the category.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Member => "member",
            Self::Staff => "staff",
            Self::ElectedOfficial => "elected_official",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_levels_are_distinct_and_ordered() {
        for (idx, rank) in Rank::ALL.iter().enumerate() {
            assert_eq!(usize::from(rank.level()), idx + 1);
            assert_eq!(Rank::from_level(rank.level()), Some(*rank));
        }
        assert_eq!(Rank::from_level(0), None);
        assert_eq!(Rank::from_level(7), None);
    }

    #[test]
    fn test_total_order() {
        for a in Rank::ALL {
            for b in Rank::ALL {
                let holds = [a.is_higher_than(b), b.is_higher_than(a), a.is_same_level(b)];
                assert_eq!(holds.iter().filter(|h| **h).count(), 1, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn test_partition() {
        for rank in Rank::ALL {
            let subs = rank.subordinates();
            let sups = rank.superiors();
            assert!(subs.is_disjoint(&sups));
            assert!(!subs.contains(&rank));
            assert!(!sups.contains(&rank));

            let mut union: BTreeSet<Rank> = subs.union(&sups).copied().collect();
            union.insert(rank);
            assert_eq!(union, Rank::ALL.into_iter().collect::<BTreeSet<_>>());
        }
    }

    #[test]
    fn test_direct_superior() {
        assert_eq!(Rank::TopExecutive.direct_superior(), None);
        assert_eq!(Rank::RegionalChair.direct_superior(), Some(Rank::TopExecutive));
        assert_eq!(Rank::Member.direct_superior(), Some(Rank::Staff));

        for rank in Rank::ALL {
            if let Some(sup) = rank.direct_superior() {
                assert!(sup.is_direct_superior_of(rank));
            }
        }
        assert!(!Rank::Member.is_direct_superior_of(Rank::Staff));
        assert!(!Rank::Staff.is_direct_superior_of(Rank::Staff));
    }

    #[test]
    fn test_managers() {
        assert!(Rank::TopExecutive.is_manager());
        assert!(Rank::LocalChair.is_manager());
        assert!(!Rank::Staff.is_manager());
        assert!(!Rank::Member.is_manager());
    }

    #[test]
    fn test_rank_parse() {
        assert_eq!(Rank::parse("metropolitan_mayor"), Some(Rank::TopExecutive));
        assert_eq!(Rank::parse("PROVINCIAL_CHAIR"), Some(Rank::RegionalChair));
        assert_eq!(Rank::parse("district mayor"), Some(Rank::LocalExecutive));
        assert_eq!(Rank::parse("officer"), Some(Rank::Staff));
        assert_eq!(Rank::parse(""), None);
        assert_eq!(Rank::parse("chairman"), None);

        for rank in Rank::ALL {
            assert_eq!(Rank::parse(rank.as_str()), Some(rank));
        }
    }

    #[test]
    fn test_category_fallback() {
        assert_eq!(MemberCategory::Member.fallback_rank(), Some(Rank::Member));
        assert_eq!(MemberCategory::Staff.fallback_rank(), Some(Rank::Staff));
        assert_eq!(MemberCategory::ElectedOfficial.fallback_rank(), None);
        assert_eq!(
            MemberCategory::parse("Elected-Official"),
            Some(MemberCategory::ElectedOfficial)
        );
        assert_eq!(MemberCategory::parse("citizen"), None);
    }

    #[test]
    fn test_rank_serde_names() {
        let json = serde_json::to_string(&Rank::LocalExecutive).unwrap();
        assert_eq!(json, "\"local_executive\"");
        let rank: Rank = serde_json::from_str("\"regional_chair\"").unwrap();
        assert_eq!(rank, Rank::RegionalChair);
    }
}
