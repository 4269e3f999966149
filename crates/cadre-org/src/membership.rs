//! Member records and views
//!
//! A [`MemberRecord`] is what the member source hands over: raw role attributes
//! plus affiliation and activity flags. A [`MemberView`] is the projection the
//! policies work with, carrying a derived rank instead of raw attributes.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::hierarchy::{HierarchyResolver, RoleAttributes};
use crate::roles::{MemberCategory, Rank};

/// Raw member record supplied by the caller.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use cadre_org::{MemberRecord, RoleAttributes};
///
/// let record = MemberRecord::new(Uuid::now_v7())
///     .with_affiliation(Uuid::now_v7())
///     .with_attributes(RoleAttributes::new().with_category("member"));
/// assert!(record.is_active);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Member ID
    pub id: Uuid,

    /// Affiliation (party) the member belongs to
    pub affiliation_id: Option<Uuid>,

    /// Rank-determining attributes
    #[serde(default)]
    pub attributes: RoleAttributes,

    /// Whether the member may use the organization module
    pub is_active: bool,
}

impl MemberRecord {
    /// Creates an active record with no affiliation and no role attributes.
    pub fn new(id: Uuid) -> Self {
        Self {
            id,
            affiliation_id: None,
            attributes: RoleAttributes::default(),
            is_active: true,
        }
    }

    /// Set the affiliation.
    pub fn with_affiliation(mut self, affiliation_id: Uuid) -> Self {
        self.affiliation_id = Some(affiliation_id);
        self
    }

    /// Set the role attributes.
    pub fn with_attributes(mut self, attributes: RoleAttributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Set the active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Parsed broad category of this record.
    pub fn category(&self) -> Option<MemberCategory> {
        self.attributes.member_category()
    }
}

/// Minimal projection of a member used by policy evaluation.
///
/// Views are built per call and never cached, so the rank always reflects the
/// attributes the caller supplied for that call.
///
/// # Examples
///
/// ```
/// use uuid::Uuid;
/// use cadre_org::{MemberView, Rank};
///
/// let party = Uuid::now_v7();
/// let chair = MemberView::new(Uuid::now_v7(), party, Rank::LocalChair);
/// let member = MemberView::new(Uuid::now_v7(), party, Rank::Member);
/// assert!(chair.same_affiliation(&member));
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct MemberView {
    /// Member ID
    pub member_id: Uuid,

    /// Affiliation the member belongs to
    pub affiliation_id: Uuid,

    /// Derived rank
    pub rank: Rank,

    /// Module-access eligibility flag
    pub is_active: bool,
}

impl MemberView {
    /// Creates an active view with an explicit rank.
    pub fn new(member_id: Uuid, affiliation_id: Uuid, rank: Rank) -> Self {
        Self {
            member_id,
            affiliation_id,
            rank,
            is_active: true,
        }
    }

    /// Project a raw record, resolving its rank.
    ///
    /// # Returns
    ///
    /// `None` when the record has no affiliation, since rank comparisons are
    /// only meaningful inside one.
    pub fn from_record(record: &MemberRecord) -> Option<Self> {
        let affiliation_id = record.affiliation_id?;
        Some(Self {
            member_id: record.id,
            affiliation_id,
            rank: HierarchyResolver::resolve_rank(&record.attributes),
            is_active: record.is_active,
        })
    }

    /// Set the active flag.
    pub fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Check if both members belong to the same affiliation.
    pub fn same_affiliation(&self, other: &MemberView) -> bool {
        self.affiliation_id == other.affiliation_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_from_record() {
        let party = Uuid::now_v7();
        let record = MemberRecord::new(Uuid::now_v7())
            .with_affiliation(party)
            .with_attributes(RoleAttributes::new().with_specific_role("provincial_chair"))
            .with_active(false);

        let view = MemberView::from_record(&record).unwrap();
        assert_eq!(view.member_id, record.id);
        assert_eq!(view.affiliation_id, party);
        assert_eq!(view.rank, Rank::RegionalChair);
        assert!(!view.is_active);
    }

    #[test]
    fn test_view_requires_affiliation() {
        let record = MemberRecord::new(Uuid::now_v7());
        assert!(MemberView::from_record(&record).is_none());
    }

    #[test]
    fn test_unrecognized_record_views_as_member() {
        let record = MemberRecord::new(Uuid::now_v7())
            .with_affiliation(Uuid::now_v7())
            .with_attributes(RoleAttributes::new().with_specific_role("honorary_president"));

        let view = MemberView::from_record(&record).unwrap();
        assert_eq!(view.rank, Rank::Member);
    }

    #[test]
    fn test_same_affiliation() {
        let a = MemberView::new(Uuid::now_v7(), Uuid::now_v7(), Rank::Staff);
        let b = MemberView::new(Uuid::now_v7(), Uuid::now_v7(), Rank::Staff);
        let c = MemberView::new(Uuid::now_v7(), a.affiliation_id, Rank::Member);

        assert!(!a.same_affiliation(&b));
        assert!(a.same_affiliation(&c));
    }

    #[test]
    fn test_record_category() {
        let record = MemberRecord::new(Uuid::now_v7())
            .with_attributes(RoleAttributes::new().with_category("elected_official"));
        assert_eq!(record.category(), Some(MemberCategory::ElectedOfficial));
    }
}
