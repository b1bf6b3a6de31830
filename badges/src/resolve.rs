//! Badge resolution - maps a review and its owner's identity state to the
//! single badge shown to end users.

use serde::{Deserialize, Serialize};
use vouch_store::review::{ProofVerdict, ReviewRecord};
use vouch_types::UserBadge;

/// Label shown while a submitted proof awaits an admin decision.
pub const PENDING_LABEL: &str = "Proof Submitted - Under Verification";
/// Label shown after a proof has been rejected.
pub const REJECTED_LABEL: &str = "Proof Rejected - Unverified User";

/// Visual category of a resolved badge.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BadgeCategory {
    VerifiedStrong,
    Pending,
    Rejected,
    VerifiedBasic,
    Unverified,
}

/// The badge displayed alongside a review.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedBadge {
    pub label: String,
    pub category: BadgeCategory,
}

/// Resolve the displayed badge.
///
/// Precedence is load-bearing and must not be reordered: proof state
/// overrides the static snapshot once proof has been submitted, and the
/// admin tag surfaces only after approval. The snapshot is consulted only
/// in the no-proof fallback and the approved branch's fallback, where a
/// stale `UnverifiedUser` snapshot is upgraded if the owner is
/// identity-verified by render time.
pub fn resolve_badge(review: &ReviewRecord, identity_verified: bool) -> ResolvedBadge {
    let Some(proof) = &review.proof else {
        return snapshot_badge(review, identity_verified);
    };

    match &proof.verdict {
        ProofVerdict::Pending => ResolvedBadge {
            label: PENDING_LABEL.to_string(),
            category: BadgeCategory::Pending,
        },
        ProofVerdict::Approved { .. } => {
            let label = match trimmed_tag(review) {
                Some(tag) => tag.to_string(),
                None => effective_snapshot(review, identity_verified)
                    .label()
                    .to_string(),
            };
            ResolvedBadge {
                label,
                category: BadgeCategory::VerifiedStrong,
            }
        }
        ProofVerdict::Rejected { .. } => ResolvedBadge {
            label: REJECTED_LABEL.to_string(),
            category: BadgeCategory::Rejected,
        },
    }
}

fn trimmed_tag(review: &ReviewRecord) -> Option<&str> {
    review
        .custom_verification_tag
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

fn effective_snapshot(review: &ReviewRecord, identity_verified: bool) -> UserBadge {
    match (review.user_badge, identity_verified) {
        (UserBadge::UnverifiedUser, true) => UserBadge::VerifiedUser,
        (badge, _) => badge,
    }
}

fn snapshot_badge(review: &ReviewRecord, identity_verified: bool) -> ResolvedBadge {
    let badge = effective_snapshot(review, identity_verified);
    let category = if badge.is_verified_tier() {
        BadgeCategory::VerifiedBasic
    } else {
        BadgeCategory::Unverified
    };
    ResolvedBadge {
        label: badge.label().to_string(),
        category,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_store::review::ProofAttachment;
    use vouch_types::{AdminId, EntityId, Rating, ReviewId, Timestamp, UserId};

    fn review(badge: UserBadge) -> ReviewRecord {
        let user_id = UserId::new("u1");
        let entity_id = EntityId::new("e1");
        ReviewRecord {
            id: ReviewId::derive(&user_id, &entity_id, 0),
            user_id,
            entity_id,
            rating: Rating::new(4).unwrap(),
            title: None,
            content: "helpful staff".into(),
            user_badge: badge,
            parent_review_id: None,
            update_number: 0,
            is_update: false,
            proof: None,
            is_verified: false,
            custom_verification_tag: None,
            upvotes: 0,
            downvotes: 0,
            created_at: Timestamp::new(100),
            updated_at: Timestamp::new(100),
        }
    }

    fn with_proof(mut r: ReviewRecord, verdict: ProofVerdict) -> ReviewRecord {
        r.proof = Some(ProofAttachment {
            url: "https://blobs.example/p.png".into(),
            remark: None,
            verdict,
        });
        r
    }

    fn approved() -> ProofVerdict {
        ProofVerdict::Approved {
            by: AdminId::new("admin_1"),
            at: Timestamp::new(200),
        }
    }

    fn rejected() -> ProofVerdict {
        ProofVerdict::Rejected {
            by: AdminId::new("admin_1"),
            at: Timestamp::new(200),
            reason: "blurry document".into(),
        }
    }

    #[test]
    fn no_proof_uses_snapshot() {
        let badge = resolve_badge(&review(UserBadge::VerifiedGraduate), false);
        assert_eq!(badge.label, "Verified Graduate");
        assert_eq!(badge.category, BadgeCategory::VerifiedBasic);

        let badge = resolve_badge(&review(UserBadge::UnverifiedUser), false);
        assert_eq!(badge.label, "Unverified User");
        assert_eq!(badge.category, BadgeCategory::Unverified);
    }

    #[test]
    fn stale_unverified_snapshot_upgraded_at_render() {
        let badge = resolve_badge(&review(UserBadge::UnverifiedUser), true);
        assert_eq!(badge.label, "Verified User");
        assert_eq!(badge.category, BadgeCategory::VerifiedBasic);
    }

    #[test]
    fn pending_proof_overrides_everything() {
        // Even a set custom tag must not surface before approval.
        let mut r = with_proof(review(UserBadge::VerifiedGraduate), ProofVerdict::Pending);
        r.custom_verification_tag = Some("Verified Client".into());

        let badge = resolve_badge(&r, true);
        assert_eq!(badge.label, PENDING_LABEL);
        assert_eq!(badge.category, BadgeCategory::Pending);
    }

    #[test]
    fn approved_proof_surfaces_custom_tag() {
        let mut r = with_proof(review(UserBadge::VerifiedUser), approved());
        r.custom_verification_tag = Some("Verified Client".into());

        let badge = resolve_badge(&r, false);
        assert_eq!(badge.label, "Verified Client");
        assert_eq!(badge.category, BadgeCategory::VerifiedStrong);
    }

    #[test]
    fn approved_proof_without_tag_falls_back_to_snapshot() {
        let r = with_proof(review(UserBadge::VerifiedEmployee), approved());
        let badge = resolve_badge(&r, false);
        assert_eq!(badge.label, "Verified Employee");
        assert_eq!(badge.category, BadgeCategory::VerifiedStrong);
    }

    #[test]
    fn approved_proof_blank_tag_ignored() {
        let mut r = with_proof(review(UserBadge::VerifiedUser), approved());
        r.custom_verification_tag = Some("   ".into());

        let badge = resolve_badge(&r, false);
        assert_eq!(badge.label, "Verified User");
        assert_eq!(badge.category, BadgeCategory::VerifiedStrong);
    }

    #[test]
    fn rejected_proof_overrides_tag_and_snapshot() {
        let mut r = with_proof(review(UserBadge::VerifiedGraduate), rejected());
        r.custom_verification_tag = Some("Verified Client".into());

        let badge = resolve_badge(&r, true);
        assert_eq!(badge.label, REJECTED_LABEL);
        assert_eq!(badge.category, BadgeCategory::Rejected);
    }

    #[test]
    fn resolution_is_deterministic() {
        let r = with_proof(review(UserBadge::VerifiedUser), approved());
        assert_eq!(resolve_badge(&r, true), resolve_badge(&r, true));
    }

    #[test]
    fn category_serializes_kebab_case() {
        let json = serde_json::to_string(&BadgeCategory::VerifiedStrong).unwrap();
        assert_eq!(json, "\"verified-strong\"");
        let json = serde_json::to_string(&BadgeCategory::VerifiedBasic).unwrap();
        assert_eq!(json, "\"verified-basic\"");
    }
}
