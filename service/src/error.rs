use thiserror::Error;
use vouch_reviews::ReviewError;
use vouch_store::StoreError;
use vouch_types::{EntityId, ReviewId, TypeError, UserId};
use vouch_verification::VerificationError;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("user {0} is not registered")]
    UserNotFound(UserId),

    #[error("entity {0} is not listed")]
    EntityNotFound(EntityId),

    #[error("review {0} does not exist")]
    ReviewNotFound(ReviewId),

    #[error("entity {0} is inactive and not accepting reviews")]
    EntityInactive(EntityId),

    #[error("verification tag must not be empty")]
    EmptyTag,

    #[error(transparent)]
    Review(#[from] ReviewError),

    #[error(transparent)]
    Verification(#[from] VerificationError),

    #[error(transparent)]
    Invalid(#[from] TypeError),

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
