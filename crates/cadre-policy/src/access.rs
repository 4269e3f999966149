//! # Module Access
//!
//! Gatekeeper for the organization module. It runs before any other policy and
//! works on raw member records, without rank resolution.

use cadre_org::{MemberCategory, MemberRecord};
use thiserror::Error;

/// Condition that kept a member out of the organization module.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum AccessDenial {
    /// No member record was supplied
    #[error("No member record")]
    MissingMember,

    /// Category is missing or not one of member, staff, elected official
    #[error("Member category is not eligible for the organization module")]
    IneligibleCategory,

    /// Member has no affiliation
    #[error("Member has no affiliation")]
    MissingAffiliation,

    /// Member is flagged inactive
    #[error("Member is inactive")]
    Inactive,
}

/// Organization module gatekeeper.
///
/// # Example
///
/// ```
/// use cadre_org::{MemberRecord, RoleAttributes};
/// use cadre_policy::ModuleAccessGuard;
/// use uuid::Uuid;
///
/// let record = MemberRecord::new(Uuid::now_v7())
///     .with_affiliation(Uuid::now_v7())
///     .with_attributes(RoleAttributes::new().with_category("staff"));
///
/// assert!(ModuleAccessGuard::can_access_module(Some(&record)));
/// assert!(!ModuleAccessGuard::can_access_module(None));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleAccessGuard;

impl ModuleAccessGuard {
    /// Categories allowed into the module.
    pub const ELIGIBLE_CATEGORIES: [MemberCategory; 3] = [
        MemberCategory::Member,
        MemberCategory::Staff,
        MemberCategory::ElectedOfficial,
    ];

    /// Check if `member` may enter the organization module.
    pub fn can_access_module(member: Option<&MemberRecord>) -> bool {
        Self::check(member).is_ok()
    }

    /// Check access and report the first failed condition.
    ///
    /// Conditions are checked in order: record present, eligible category,
    /// affiliation present, active flag set.
    pub fn check(member: Option<&MemberRecord>) -> Result<(), AccessDenial> {
        let member = member.ok_or(AccessDenial::MissingMember)?;

        match member.category() {
            Some(category) if Self::ELIGIBLE_CATEGORIES.contains(&category) => {}
            _ => return Err(AccessDenial::IneligibleCategory),
        }

        if member.affiliation_id.is_none() {
            return Err(AccessDenial::MissingAffiliation);
        }

        if !member.is_active {
            return Err(AccessDenial::Inactive);
        }

        Ok(())
    }
}
