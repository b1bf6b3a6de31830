//! Abstract storage traits for the Vouch review platform.
//!
//! Every storage backend (the relational production store, in-memory for
//! testing) implements these traits. The rest of the codebase depends only
//! on the traits. The uniqueness contracts that make review chaining safe
//! under concurrency live at this seam: see [`ReviewStore::insert_original`]
//! and [`ReviewStore::insert_update`].

pub mod entity;
pub mod error;
pub mod review;
pub mod user;

pub use entity::{EntityRecord, EntityStore};
pub use error::StoreError;
pub use review::{ProofAttachment, ProofVerdict, ReviewRecord, ReviewStore};
pub use user::{IdentityDocuments, UserProfile, UserStore};
