//! State enums for entities, user identities, and badge snapshots.

use crate::error::TypeError;
use serde::{Deserialize, Serialize};

/// Directory lifecycle state of an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityStatus {
    /// Listed in the directory; reviews count toward aggregates.
    Active,
    /// Delisted; raw review rows remain but contribute zero to any aggregate.
    Inactive,
}

impl EntityStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, Self::Active)
    }
}

/// Admin-assigned trust tier for an entity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TrustLevel {
    Basic,
    Verified,
    TrustedPartner,
}

/// The identity-verification state of a user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentityState {
    /// No standing identity check. Submitted documents may be awaiting review.
    Unverified,
    /// An admin has approved the user's identity documents.
    Verified,
}

impl IdentityState {
    pub fn is_verified(&self) -> bool {
        matches!(self, Self::Verified)
    }
}

/// How a user's name is shown next to their reviews.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DisplayNamePreference {
    Pseudonym,
    FullName,
}

/// The static badge tier snapshotted onto a review at submission time.
///
/// Display logic treats this as a fallback input only; proof verification
/// state always takes precedence once proof has been submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UserBadge {
    VerifiedGraduate,
    VerifiedEmployee,
    VerifiedUser,
    UnverifiedUser,
}

impl UserBadge {
    /// The label shown to end users.
    pub fn label(&self) -> &'static str {
        match self {
            Self::VerifiedGraduate => "Verified Graduate",
            Self::VerifiedEmployee => "Verified Employee",
            Self::VerifiedUser => "Verified User",
            Self::UnverifiedUser => "Unverified User",
        }
    }

    /// Parse a stored label back into a badge tier.
    pub fn from_label(label: &str) -> Result<Self, TypeError> {
        match label {
            "Verified Graduate" => Ok(Self::VerifiedGraduate),
            "Verified Employee" => Ok(Self::VerifiedEmployee),
            "Verified User" => Ok(Self::VerifiedUser),
            "Unverified User" => Ok(Self::UnverifiedUser),
            other => Err(TypeError::UnknownBadgeLabel(other.to_string())),
        }
    }

    /// Whether this snapshot represents any verified tier.
    pub fn is_verified_tier(&self) -> bool {
        !matches!(self, Self::UnverifiedUser)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn badge_labels_roundtrip() {
        for badge in [
            UserBadge::VerifiedGraduate,
            UserBadge::VerifiedEmployee,
            UserBadge::VerifiedUser,
            UserBadge::UnverifiedUser,
        ] {
            assert_eq!(UserBadge::from_label(badge.label()).unwrap(), badge);
        }
    }

    #[test]
    fn unknown_badge_label_rejected() {
        assert!(UserBadge::from_label("Verified Wizard").is_err());
    }

    #[test]
    fn only_unverified_is_not_a_verified_tier() {
        assert!(UserBadge::VerifiedGraduate.is_verified_tier());
        assert!(UserBadge::VerifiedEmployee.is_verified_tier());
        assert!(UserBadge::VerifiedUser.is_verified_tier());
        assert!(!UserBadge::UnverifiedUser.is_verified_tier());
    }
}
