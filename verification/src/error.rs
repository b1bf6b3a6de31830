use thiserror::Error;
use vouch_types::{ReviewId, UserId};

#[derive(Debug, Error)]
pub enum VerificationError {
    #[error("a rejection reason is required")]
    MissingReason,

    #[error("review {0} already has proof attached")]
    ProofAlreadySubmitted(ReviewId),

    #[error("review {0} has no proof to verify")]
    NoProofSubmitted(ReviewId),

    #[error("proof url must not be empty")]
    EmptyProofUrl,

    #[error("user {0} is already identity-verified")]
    AlreadyVerified(UserId),

    #[error("user {0} has not submitted identity documents")]
    MissingDocuments(UserId),
}
