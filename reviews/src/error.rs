use thiserror::Error;
use vouch_store::StoreError;
use vouch_types::{EntityId, UserId};

#[derive(Debug, Error)]
pub enum ReviewError {
    #[error("user {user} already has a review for entity {entity}; submit an update instead")]
    DuplicateOriginal { user: UserId, entity: EntityId },

    #[error("user {user} has no existing review for entity {entity} to update")]
    NoOriginal { user: UserId, entity: EntityId },

    #[error("could not assign an update number after {attempts} attempts; please try again")]
    UpdateNumberConflict { attempts: u32 },

    #[error("review content must not be empty")]
    EmptyContent,

    #[error("review content exceeds the maximum of {max} characters")]
    ContentTooLong { max: usize },

    #[error("proof url must not be empty")]
    EmptyProofUrl,

    #[error("store error: {0}")]
    Store(#[from] StoreError),
}
