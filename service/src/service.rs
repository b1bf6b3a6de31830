//! The review service - request/response operations over a store.

use crate::config::ServiceConfig;
use crate::error::ServiceError;
use vouch_badges::{resolve_badge, ResolvedBadge};
use vouch_ratings::{AggregateProjector, EntityAggregate};
use vouch_reviews::{ChainEngine, ProofSubmission, ReviewChain, ReviewSubmission};
use vouch_store::entity::{EntityRecord, EntityStore};
use vouch_store::review::{ReviewRecord, ReviewStore};
use vouch_store::user::{IdentityDocuments, UserProfile, UserStore};
use vouch_store::StoreError;
use vouch_types::{
    AdminId, EntityId, Rating, ReviewId, ServiceParams, Timestamp, UserBadge, UserId,
};
use vouch_verification::{IdentityEngine, ProofEngine};

/// The service boundary. Every operation runs to completion against the
/// store before returning; there is no background state.
pub struct ReviewService<S> {
    store: S,
    chain: ChainEngine,
    proofs: ProofEngine,
    identity: IdentityEngine,
    projector: AggregateProjector,
    params: ServiceParams,
}

impl<S> ReviewService<S>
where
    S: ReviewStore + EntityStore + UserStore,
{
    pub fn new(store: S, config: ServiceConfig) -> Self {
        Self {
            store,
            chain: ChainEngine::new(config.params.clone()),
            proofs: ProofEngine,
            identity: IdentityEngine,
            projector: AggregateProjector,
            params: config.params,
        }
    }

    /// Access the underlying store (registration flows and tests seed
    /// users/entities through this; review and verification rows must go
    /// through the service operations).
    pub fn store(&self) -> &S {
        &self.store
    }

    // ── Review submission ────────────────────────────────────────────────

    /// Create the user's original review of an entity.
    pub fn submit_review(
        &self,
        user_id: UserId,
        entity_id: EntityId,
        rating: u8,
        title: Option<String>,
        content: String,
        proof: Option<ProofSubmission>,
    ) -> Result<ReviewRecord, ServiceError> {
        let submission = self.prepare_submission(user_id, entity_id, rating, title, content, proof)?;
        let record = self
            .chain
            .create_original(&self.store, submission, Timestamp::now())?;
        tracing::info!(
            user = %record.user_id,
            entity = %record.entity_id,
            review = %record.id,
            rating = record.rating.value(),
            "original review created"
        );
        self.refresh_aggregates(&record.entity_id);
        Ok(record)
    }

    /// Append an update to the user's existing review chain.
    pub fn submit_update(
        &self,
        user_id: UserId,
        entity_id: EntityId,
        rating: u8,
        title: Option<String>,
        content: String,
        proof: Option<ProofSubmission>,
    ) -> Result<ReviewRecord, ServiceError> {
        let submission = self.prepare_submission(user_id, entity_id, rating, title, content, proof)?;
        let record = self
            .chain
            .create_update(&self.store, submission, Timestamp::now())?;
        tracing::info!(
            user = %record.user_id,
            entity = %record.entity_id,
            review = %record.id,
            update_number = record.update_number,
            "review update created"
        );
        self.refresh_aggregates(&record.entity_id);
        Ok(record)
    }

    /// The user's chain on an entity, if they have reviewed it.
    pub fn review_chain(
        &self,
        user_id: &UserId,
        entity_id: &EntityId,
    ) -> Result<Option<ReviewChain>, ServiceError> {
        Ok(self.chain.chain(&self.store, user_id, entity_id)?)
    }

    /// All of a user's chains, grouped by entity, for profile views.
    pub fn list_user_reviews(&self, user_id: &UserId) -> Result<Vec<ReviewChain>, ServiceError> {
        Ok(self.chain.list_user_reviews(&self.store, user_id)?)
    }

    // ── Proof verification ───────────────────────────────────────────────

    /// Attach proof evidence to an existing review.
    pub fn submit_proof(
        &self,
        review_id: &ReviewId,
        url: String,
        remark: Option<String>,
    ) -> Result<(), ServiceError> {
        let mut review = self.load_review(review_id)?;
        self.proofs
            .submit_proof(&mut review, url, remark, Timestamp::now())?;
        self.store.put_review(&review)?;
        tracing::info!(review = %review.id, "proof submitted, awaiting verification");
        Ok(())
    }

    /// Admin action: approve a review's proof.
    pub fn approve_proof(
        &self,
        review_id: &ReviewId,
        admin_id: AdminId,
    ) -> Result<(), ServiceError> {
        let mut review = self.load_review(review_id)?;
        self.proofs
            .approve(&mut review, admin_id.clone(), Timestamp::now())?;
        self.store.put_review(&review)?;
        tracing::info!(review = %review.id, admin = %admin_id, "proof approved");
        Ok(())
    }

    /// Admin action: reject a review's proof with a mandatory reason.
    pub fn reject_proof(
        &self,
        review_id: &ReviewId,
        admin_id: AdminId,
        reason: &str,
    ) -> Result<(), ServiceError> {
        let mut review = self.load_review(review_id)?;
        self.proofs
            .reject(&mut review, admin_id.clone(), reason, Timestamp::now())?;
        self.store.put_review(&review)?;
        tracing::info!(review = %review.id, admin = %admin_id, reason, "proof rejected");
        Ok(())
    }

    // ── Review verification tagging ──────────────────────────────────────

    /// Admin action: mark a review verified, optionally assigning a custom
    /// tag (e.g. a resolved client-verification tag). The badge resolver
    /// keeps the tag hidden until the review's proof is approved.
    pub fn mark_review_verified(
        &self,
        review_id: &ReviewId,
        admin_id: AdminId,
        tag: Option<String>,
    ) -> Result<(), ServiceError> {
        let tag = match tag {
            Some(raw) => {
                let trimmed = raw.trim();
                if trimmed.is_empty() {
                    return Err(ServiceError::EmptyTag);
                }
                Some(trimmed.to_string())
            }
            None => None,
        };

        let mut review = self.load_review(review_id)?;
        review.is_verified = true;
        review.custom_verification_tag = tag;
        review.updated_at = Timestamp::now();
        self.store.put_review(&review)?;
        tracing::info!(
            review = %review.id,
            admin = %admin_id,
            tag = review.custom_verification_tag.as_deref().unwrap_or(""),
            "review marked verified"
        );
        Ok(())
    }

    /// Admin action: withdraw a review's verified mark and custom tag.
    pub fn clear_review_verified(
        &self,
        review_id: &ReviewId,
        admin_id: AdminId,
    ) -> Result<(), ServiceError> {
        let mut review = self.load_review(review_id)?;
        review.is_verified = false;
        review.custom_verification_tag = None;
        review.updated_at = Timestamp::now();
        self.store.put_review(&review)?;
        tracing::info!(review = %review.id, admin = %admin_id, "review verification cleared");
        Ok(())
    }

    // ── Identity verification ────────────────────────────────────────────

    /// Record a user's identity documents for admin review.
    pub fn submit_identity_documents(
        &self,
        user_id: &UserId,
        documents: IdentityDocuments,
    ) -> Result<(), ServiceError> {
        let mut user = self.load_user(user_id)?;
        self.identity.submit_documents(&mut user, documents)?;
        self.store.put_user(&user)?;
        tracing::info!(user = %user.id, "identity documents submitted");
        Ok(())
    }

    /// Admin action: approve a user's identity.
    pub fn approve_identity(
        &self,
        user_id: &UserId,
        admin_id: AdminId,
    ) -> Result<(), ServiceError> {
        let mut user = self.load_user(user_id)?;
        self.identity.approve(&mut user)?;
        self.store.put_user(&user)?;
        tracing::info!(user = %user.id, admin = %admin_id, "identity verified");
        Ok(())
    }

    /// Admin action: reject a user's identity. Destructive: the submitted
    /// documents are cleared and must be resubmitted from scratch.
    pub fn reject_identity(
        &self,
        user_id: &UserId,
        admin_id: AdminId,
    ) -> Result<(), ServiceError> {
        let mut user = self.load_user(user_id)?;
        self.identity.reject(&mut user);
        self.store.put_user(&user)?;
        tracing::warn!(
            user = %user.id,
            admin = %admin_id,
            "identity rejected; submitted documents cleared"
        );
        Ok(())
    }

    // ── Display queries ──────────────────────────────────────────────────

    /// The badge to show next to a review, derived from current review and
    /// owner state.
    pub fn badge_for_review(&self, review_id: &ReviewId) -> Result<ResolvedBadge, ServiceError> {
        let review = self.load_review(review_id)?;
        let owner = self.load_user(&review.user_id)?;
        Ok(resolve_badge(&review, owner.identity.is_verified()))
    }

    /// Recompute an entity's displayed aggregate. Idempotent; also used as
    /// the reconciliation trigger after a deferred refresh.
    pub fn recompute_entity_aggregates(
        &self,
        entity_id: &EntityId,
    ) -> Result<EntityAggregate, ServiceError> {
        match self.projector.recompute(&self.store, entity_id) {
            Ok(aggregate) => Ok(aggregate),
            Err(StoreError::NotFound(_)) => Err(ServiceError::EntityNotFound(entity_id.clone())),
            Err(e) => Err(e.into()),
        }
    }

    // ── Internals ────────────────────────────────────────────────────────

    fn prepare_submission(
        &self,
        user_id: UserId,
        entity_id: EntityId,
        rating: u8,
        title: Option<String>,
        content: String,
        proof: Option<ProofSubmission>,
    ) -> Result<ReviewSubmission, ServiceError> {
        let user = self.load_user(&user_id)?;
        let entity = self.load_entity(&entity_id)?;
        if self.params.reject_inactive_submissions && !entity.status.is_active() {
            return Err(ServiceError::EntityInactive(entity_id));
        }
        let rating = Rating::new(rating)?;
        Ok(ReviewSubmission {
            user_id,
            entity_id,
            rating,
            title,
            content,
            proof,
            user_badge: snapshot_badge(&user),
        })
    }

    /// Refresh the entity's aggregate after a review mutation. Best-effort:
    /// the review write already succeeded and the aggregate is recoverable
    /// by recomputation, so a failure here is logged and deferred to the
    /// next trigger rather than surfaced.
    fn refresh_aggregates(&self, entity_id: &EntityId) {
        if let Err(e) = self.projector.recompute(&self.store, entity_id) {
            tracing::warn!(entity = %entity_id, error = %e, "aggregate refresh deferred");
        }
    }

    fn load_user(&self, user_id: &UserId) -> Result<UserProfile, ServiceError> {
        match self.store.get_user(user_id) {
            Ok(user) => Ok(user),
            Err(StoreError::NotFound(_)) => Err(ServiceError::UserNotFound(user_id.clone())),
            Err(e) => Err(e.into()),
        }
    }

    fn load_entity(&self, entity_id: &EntityId) -> Result<EntityRecord, ServiceError> {
        match self.store.get_entity(entity_id) {
            Ok(entity) => Ok(entity),
            Err(StoreError::NotFound(_)) => Err(ServiceError::EntityNotFound(entity_id.clone())),
            Err(e) => Err(e.into()),
        }
    }

    fn load_review(&self, review_id: &ReviewId) -> Result<ReviewRecord, ServiceError> {
        match self.store.get_review(review_id) {
            Ok(review) => Ok(review),
            Err(StoreError::NotFound(_)) => Err(ServiceError::ReviewNotFound(*review_id)),
            Err(e) => Err(e.into()),
        }
    }
}

/// The static badge tier snapshotted onto a new review from the submitting
/// user's current identity state.
fn snapshot_badge(user: &UserProfile) -> UserBadge {
    if user.identity.is_verified() {
        UserBadge::VerifiedUser
    } else {
        UserBadge::UnverifiedUser
    }
}
