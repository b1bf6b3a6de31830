//! Entity record and storage trait.

use crate::StoreError;
use serde::{Deserialize, Serialize};
use vouch_types::{EntityId, EntityStatus, Timestamp, TrustLevel};

/// A reviewable subject listed in the directory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityRecord {
    pub id: EntityId,
    pub name: String,
    /// Free-form entity kind ("business", "institution", "product").
    pub kind: String,
    pub industry: Option<String>,
    pub contact: Option<String>,
    pub location: Option<String>,
    pub is_verified: bool,
    pub trust_level: TrustLevel,
    pub claimed_by_business: bool,
    pub status: EntityStatus,
    /// Derived; written only by the aggregate projector. One-decimal mean of
    /// the latest rating per review chain.
    pub average_rating: f64,
    /// Derived; written only by the aggregate projector. Number of chains,
    /// not rows.
    pub review_count: u64,
    pub created_at: Timestamp,
}

/// Trait for entity storage operations.
pub trait EntityStore {
    fn get_entity(&self, id: &EntityId) -> Result<EntityRecord, StoreError>;
    fn put_entity(&self, record: &EntityRecord) -> Result<(), StoreError>;
    fn entity_exists(&self, id: &EntityId) -> Result<bool, StoreError>;
    fn entity_count(&self) -> Result<u64, StoreError>;
    fn iter_entities(&self) -> Result<Vec<EntityRecord>, StoreError>;

    /// Entities eligible for directory/homepage ranking.
    fn iter_active_entities(&self) -> Result<Vec<EntityRecord>, StoreError> {
        Ok(self
            .iter_entities()?
            .into_iter()
            .filter(|e| e.status.is_active())
            .collect())
    }
}
