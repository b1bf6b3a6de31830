//! Identity engine - the identity-verification lifecycle on a user profile.

use crate::error::VerificationError;
use vouch_store::user::{IdentityDocuments, UserProfile};
use vouch_types::IdentityState;

pub struct IdentityEngine;

impl IdentityEngine {
    /// Record the user's identity documents for admin review.
    ///
    /// Resubmission is allowed while unverified (the user may correct a
    /// typo before review); illegal once the identity check stands.
    pub fn submit_documents(
        &self,
        user: &mut UserProfile,
        documents: IdentityDocuments,
    ) -> Result<(), VerificationError> {
        if user.identity.is_verified() {
            return Err(VerificationError::AlreadyVerified(user.id.clone()));
        }
        user.identity_documents = Some(documents);
        Ok(())
    }

    /// Approve the user's identity. Requires submitted documents.
    pub fn approve(&self, user: &mut UserProfile) -> Result<(), VerificationError> {
        if user.identity_documents.is_none() {
            return Err(VerificationError::MissingDocuments(user.id.clone()));
        }
        user.identity = IdentityState::Verified;
        Ok(())
    }

    /// Reject the user's identity.
    ///
    /// Destructive reset: the status flips to unverified AND the submitted
    /// documents are cleared, so the user must resubmit from scratch. Legal
    /// in any state.
    pub fn reject(&self, user: &mut UserProfile) {
        user.identity = IdentityState::Unverified;
        user.identity_documents = None;
    }
}
