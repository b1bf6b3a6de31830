//! Review record and storage trait.

use crate::StoreError;
use serde::{Deserialize, Serialize};
use vouch_types::{AdminId, EntityId, Rating, ReviewId, Timestamp, UserBadge, UserId};

/// Admin decision on a submitted proof.
///
/// "Rejected without a reason" is unrepresentable: the reason travels with
/// the variant. Re-review between `Approved` and `Rejected` overwrites the
/// reviewer and timestamp and drops or repopulates the reason accordingly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProofVerdict {
    /// Submitted, awaiting an admin decision.
    Pending,
    /// An admin confirmed the proof supports the review.
    Approved { by: AdminId, at: Timestamp },
    /// An admin rejected the proof.
    Rejected {
        by: AdminId,
        at: Timestamp,
        reason: String,
    },
}

impl ProofVerdict {
    pub fn is_pending(&self) -> bool {
        matches!(self, Self::Pending)
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, Self::Approved { .. })
    }

    pub fn is_rejected(&self) -> bool {
        matches!(self, Self::Rejected { .. })
    }
}

/// Proof-of-experience evidence attached to a review.
///
/// The URL points into the external blob store; its contents are never
/// parsed or validated here.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProofAttachment {
    pub url: String,
    pub remark: Option<String>,
    pub verdict: ProofVerdict,
}

/// A single review row: an original (`parent_review_id = None`,
/// `update_number = 0`) or one update in its chain.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReviewRecord {
    pub id: ReviewId,
    pub user_id: UserId,
    pub entity_id: EntityId,
    pub rating: Rating,
    pub title: Option<String>,
    pub content: String,
    /// Badge tier snapshotted at submission time; display fallback only.
    pub user_badge: UserBadge,
    /// `None` marks the original review of a (user, entity) chain.
    pub parent_review_id: Option<ReviewId>,
    /// 0 for the original; strictly increasing from 1 for updates.
    pub update_number: u32,
    pub is_update: bool,
    /// `None` is the NoProof state.
    pub proof: Option<ProofAttachment>,
    /// Final verified-review flag, set by the admin verify-and-tag action.
    pub is_verified: bool,
    /// Admin-assigned free-text tag; surfaces only once proof is approved.
    pub custom_verification_tag: Option<String>,
    pub upvotes: u64,
    pub downvotes: u64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl ReviewRecord {
    pub fn is_original(&self) -> bool {
        self.parent_review_id.is_none()
    }

    /// Whether proof was ever provided for this review.
    pub fn proof_provided(&self) -> bool {
        self.proof.is_some()
    }
}

/// Trait for review storage operations.
///
/// Backends must make `insert_original` and `insert_update` atomic with
/// respect to their uniqueness checks: at most one original per
/// (user, entity), at most one update per (parent, update_number). A losing
/// concurrent writer observes `StoreError::Duplicate` and the chain engine
/// retries with a fresh read.
pub trait ReviewStore {
    fn get_review(&self, id: &ReviewId) -> Result<ReviewRecord, StoreError>;

    /// Overwrite an existing review row (verification mutations).
    fn put_review(&self, record: &ReviewRecord) -> Result<(), StoreError>;

    /// Insert a new original review. Fails with `Duplicate` if an original
    /// already exists for this (user, entity) pair.
    fn insert_original(&self, record: &ReviewRecord) -> Result<(), StoreError>;

    /// Insert a new update. Fails with `Duplicate` if the
    /// (parent, update_number) slot is already taken.
    fn insert_update(&self, record: &ReviewRecord) -> Result<(), StoreError>;

    /// The original review for a (user, entity) pair, if any.
    fn get_original(
        &self,
        user: &UserId,
        entity: &EntityId,
    ) -> Result<Option<ReviewRecord>, StoreError>;

    /// All updates chained to an original, in no particular order.
    fn get_updates(&self, parent: &ReviewId) -> Result<Vec<ReviewRecord>, StoreError>;

    /// Every review row (originals and updates) written by a user.
    fn list_user_reviews(&self, user: &UserId) -> Result<Vec<ReviewRecord>, StoreError>;

    /// Every original review on an entity (one per reviewing user).
    fn list_entity_originals(&self, entity: &EntityId) -> Result<Vec<ReviewRecord>, StoreError>;

    fn review_count(&self) -> Result<u64, StoreError>;
}
