//! Chain engine - creates and chains reviews, answers chain queries.

use crate::chain::ReviewChain;
use crate::error::ReviewError;
use std::collections::BTreeMap;
use vouch_store::review::{ProofAttachment, ProofVerdict, ReviewRecord, ReviewStore};
use vouch_store::StoreError;
use vouch_types::{EntityId, Rating, ReviewId, ServiceParams, Timestamp, UserBadge, UserId};

/// Proof evidence attached at submission time. Enters the chain already in
/// the pending-verification state.
#[derive(Clone, Debug)]
pub struct ProofSubmission {
    pub url: String,
    pub remark: Option<String>,
}

/// A user's review submission, original or update.
#[derive(Clone, Debug)]
pub struct ReviewSubmission {
    pub user_id: UserId,
    pub entity_id: EntityId,
    pub rating: Rating,
    pub title: Option<String>,
    pub content: String,
    pub proof: Option<ProofSubmission>,
    /// Badge tier snapshot resolved by the caller from the submitting
    /// user's current identity state.
    pub user_badge: UserBadge,
}

/// The chain engine. Stateless; all durable state lives behind the store.
pub struct ChainEngine {
    params: ServiceParams,
}

impl ChainEngine {
    pub fn new(params: ServiceParams) -> Self {
        Self { params }
    }

    /// Create the original review of a (user, entity) chain.
    ///
    /// Fails with `DuplicateOriginal` if the chain already exists. The
    /// pre-check gives the friendly error in the common case; the store's
    /// uniqueness constraint catches the concurrent-writer race.
    pub fn create_original<S: ReviewStore>(
        &self,
        store: &S,
        submission: ReviewSubmission,
        now: Timestamp,
    ) -> Result<ReviewRecord, ReviewError> {
        self.validate(&submission)?;

        if store
            .get_original(&submission.user_id, &submission.entity_id)?
            .is_some()
        {
            return Err(ReviewError::DuplicateOriginal {
                user: submission.user_id,
                entity: submission.entity_id,
            });
        }

        let record = build_record(submission, None, 0, now);
        match store.insert_original(&record) {
            Ok(()) => Ok(record),
            Err(StoreError::Duplicate(_)) => Err(ReviewError::DuplicateOriginal {
                user: record.user_id,
                entity: record.entity_id,
            }),
            Err(e) => Err(e.into()),
        }
    }

    /// Append an update to an existing chain.
    ///
    /// The update number is assigned as max+1 over the chain. Assignment is
    /// a read-then-insert guarded by the store's (parent, update_number)
    /// uniqueness constraint; a conflict means a concurrent writer took the
    /// slot, so the chain is re-read and the insert retried up to
    /// `update_insert_retries` times before surfacing `UpdateNumberConflict`.
    pub fn create_update<S: ReviewStore>(
        &self,
        store: &S,
        submission: ReviewSubmission,
        now: Timestamp,
    ) -> Result<ReviewRecord, ReviewError> {
        self.validate(&submission)?;

        let original = store
            .get_original(&submission.user_id, &submission.entity_id)?
            .ok_or_else(|| ReviewError::NoOriginal {
                user: submission.user_id.clone(),
                entity: submission.entity_id.clone(),
            })?;

        let attempts = self.params.update_insert_retries.max(1);
        for _ in 0..attempts {
            let updates = store.get_updates(&original.id)?;
            let next = updates
                .iter()
                .map(|u| u.update_number)
                .max()
                .unwrap_or(0)
                + 1;

            let record = build_record(submission.clone(), Some(original.id), next, now);
            match store.insert_update(&record) {
                Ok(()) => return Ok(record),
                Err(StoreError::Duplicate(_)) => continue,
                Err(e) => return Err(e.into()),
            }
        }

        Err(ReviewError::UpdateNumberConflict { attempts })
    }

    /// The full chain for a (user, entity) pair, if the user has reviewed
    /// the entity.
    pub fn chain<S: ReviewStore>(
        &self,
        store: &S,
        user: &UserId,
        entity: &EntityId,
    ) -> Result<Option<ReviewChain>, ReviewError> {
        let Some(original) = store.get_original(user, entity)? else {
            return Ok(None);
        };
        let updates = store.get_updates(&original.id)?;
        Ok(Some(ReviewChain::new(original, updates)))
    }

    /// The review representing the user's current opinion of an entity.
    pub fn latest<S: ReviewStore>(
        &self,
        store: &S,
        user: &UserId,
        entity: &EntityId,
    ) -> Result<Option<ReviewRecord>, ReviewError> {
        Ok(self
            .chain(store, user, entity)?
            .map(|chain| chain.latest().clone()))
    }

    /// All of a user's chains, grouped by entity in stable (entity id) order.
    pub fn list_user_reviews<S: ReviewStore>(
        &self,
        store: &S,
        user: &UserId,
    ) -> Result<Vec<ReviewChain>, ReviewError> {
        let rows = store.list_user_reviews(user)?;

        let mut originals: BTreeMap<EntityId, ReviewRecord> = BTreeMap::new();
        let mut updates: BTreeMap<ReviewId, Vec<ReviewRecord>> = BTreeMap::new();
        for row in rows {
            if row.is_original() {
                originals.insert(row.entity_id.clone(), row);
            } else if let Some(parent) = row.parent_review_id {
                updates.entry(parent).or_default().push(row);
            }
        }

        Ok(originals
            .into_values()
            .map(|original| {
                let chained = updates.remove(&original.id).unwrap_or_default();
                ReviewChain::new(original, chained)
            })
            .collect())
    }

    fn validate(&self, submission: &ReviewSubmission) -> Result<(), ReviewError> {
        if submission.content.trim().is_empty() {
            return Err(ReviewError::EmptyContent);
        }
        let max = self.params.max_review_content_len;
        if submission.content.chars().count() > max {
            return Err(ReviewError::ContentTooLong { max });
        }
        if let Some(proof) = &submission.proof {
            if proof.url.trim().is_empty() {
                return Err(ReviewError::EmptyProofUrl);
            }
        }
        Ok(())
    }
}

fn build_record(
    submission: ReviewSubmission,
    parent: Option<ReviewId>,
    update_number: u32,
    now: Timestamp,
) -> ReviewRecord {
    let proof = submission.proof.map(|p| ProofAttachment {
        url: p.url,
        remark: p.remark,
        verdict: ProofVerdict::Pending,
    });
    ReviewRecord {
        id: ReviewId::derive(&submission.user_id, &submission.entity_id, update_number),
        user_id: submission.user_id,
        entity_id: submission.entity_id,
        rating: submission.rating,
        title: submission.title,
        content: submission.content,
        user_badge: submission.user_badge,
        parent_review_id: parent,
        update_number,
        is_update: parent.is_some(),
        proof,
        is_verified: false,
        custom_verification_tag: None,
        upvotes: 0,
        downvotes: 0,
        created_at: now,
        updated_at: now,
    }
}
