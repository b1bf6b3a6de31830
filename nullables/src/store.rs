//! Nullable store - thread-safe in-memory storage for testing.

use std::collections::HashMap;
use std::sync::Mutex;
use vouch_store::entity::{EntityRecord, EntityStore};
use vouch_store::review::{ReviewRecord, ReviewStore};
use vouch_store::user::{UserProfile, UserStore};
use vouch_store::StoreError;
use vouch_types::{EntityId, ReviewId, UserId};

/// An in-memory review + entity + user store for testing.
///
/// Thread-safe. The uniqueness indexes are checked and written under their
/// own mutex, held across the record insert, so `insert_original` and
/// `insert_update` are atomic check-and-inserts as the `ReviewStore`
/// contract requires. Lock order: index map before record map.
pub struct NullStore {
    reviews: Mutex<HashMap<ReviewId, ReviewRecord>>,
    /// (user, entity) -> original review id. One entry per chain.
    originals: Mutex<HashMap<(String, String), ReviewId>>,
    /// (parent, update_number) -> update review id. Enforces slot uniqueness.
    update_slots: Mutex<HashMap<(ReviewId, u32), ReviewId>>,
    entities: Mutex<HashMap<String, EntityRecord>>,
    users: Mutex<HashMap<String, UserProfile>>,
}

impl NullStore {
    pub fn new() -> Self {
        Self {
            reviews: Mutex::new(HashMap::new()),
            originals: Mutex::new(HashMap::new()),
            update_slots: Mutex::new(HashMap::new()),
            entities: Mutex::new(HashMap::new()),
            users: Mutex::new(HashMap::new()),
        }
    }

    fn chain_key(user: &UserId, entity: &EntityId) -> (String, String) {
        (user.as_str().to_string(), entity.as_str().to_string())
    }
}

impl Default for NullStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ReviewStore for NullStore {
    fn get_review(&self, id: &ReviewId) -> Result<ReviewRecord, StoreError> {
        self.reviews
            .lock()
            .unwrap()
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put_review(&self, record: &ReviewRecord) -> Result<(), StoreError> {
        let mut reviews = self.reviews.lock().unwrap();
        if !reviews.contains_key(&record.id) {
            return Err(StoreError::NotFound(record.id.to_string()));
        }
        reviews.insert(record.id, record.clone());
        Ok(())
    }

    fn insert_original(&self, record: &ReviewRecord) -> Result<(), StoreError> {
        let key = Self::chain_key(&record.user_id, &record.entity_id);
        let mut originals = self.originals.lock().unwrap();
        if originals.contains_key(&key) {
            return Err(StoreError::Duplicate(format!(
                "original review for user {} on entity {}",
                record.user_id, record.entity_id
            )));
        }
        originals.insert(key, record.id);
        self.reviews.lock().unwrap().insert(record.id, record.clone());
        Ok(())
    }

    fn insert_update(&self, record: &ReviewRecord) -> Result<(), StoreError> {
        let parent = record.parent_review_id.ok_or_else(|| {
            StoreError::Backend("insert_update called with an original review".into())
        })?;
        let slot = (parent, record.update_number);
        let mut update_slots = self.update_slots.lock().unwrap();
        if update_slots.contains_key(&slot) {
            return Err(StoreError::Duplicate(format!(
                "update {} in chain {}",
                record.update_number, parent
            )));
        }
        update_slots.insert(slot, record.id);
        self.reviews.lock().unwrap().insert(record.id, record.clone());
        Ok(())
    }

    fn get_original(
        &self,
        user: &UserId,
        entity: &EntityId,
    ) -> Result<Option<ReviewRecord>, StoreError> {
        let originals = self.originals.lock().unwrap();
        let Some(id) = originals.get(&Self::chain_key(user, entity)) else {
            return Ok(None);
        };
        Ok(self.reviews.lock().unwrap().get(id).cloned())
    }

    fn get_updates(&self, parent: &ReviewId) -> Result<Vec<ReviewRecord>, StoreError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .values()
            .filter(|r| r.parent_review_id.as_ref() == Some(parent))
            .cloned()
            .collect())
    }

    fn list_user_reviews(&self, user: &UserId) -> Result<Vec<ReviewRecord>, StoreError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .values()
            .filter(|r| &r.user_id == user)
            .cloned()
            .collect())
    }

    fn list_entity_originals(&self, entity: &EntityId) -> Result<Vec<ReviewRecord>, StoreError> {
        Ok(self
            .reviews
            .lock()
            .unwrap()
            .values()
            .filter(|r| &r.entity_id == entity && r.is_original())
            .cloned()
            .collect())
    }

    fn review_count(&self) -> Result<u64, StoreError> {
        Ok(self.reviews.lock().unwrap().len() as u64)
    }
}

impl EntityStore for NullStore {
    fn get_entity(&self, id: &EntityId) -> Result<EntityRecord, StoreError> {
        self.entities
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put_entity(&self, record: &EntityRecord) -> Result<(), StoreError> {
        self.entities
            .lock()
            .unwrap()
            .insert(record.id.as_str().to_string(), record.clone());
        Ok(())
    }

    fn entity_exists(&self, id: &EntityId) -> Result<bool, StoreError> {
        Ok(self.entities.lock().unwrap().contains_key(id.as_str()))
    }

    fn entity_count(&self) -> Result<u64, StoreError> {
        Ok(self.entities.lock().unwrap().len() as u64)
    }

    fn iter_entities(&self) -> Result<Vec<EntityRecord>, StoreError> {
        Ok(self.entities.lock().unwrap().values().cloned().collect())
    }
}

impl UserStore for NullStore {
    fn get_user(&self, id: &UserId) -> Result<UserProfile, StoreError> {
        self.users
            .lock()
            .unwrap()
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn put_user(&self, profile: &UserProfile) -> Result<(), StoreError> {
        self.users
            .lock()
            .unwrap()
            .insert(profile.id.as_str().to_string(), profile.clone());
        Ok(())
    }

    fn user_exists(&self, id: &UserId) -> Result<bool, StoreError> {
        Ok(self.users.lock().unwrap().contains_key(id.as_str()))
    }

    fn user_count(&self) -> Result<u64, StoreError> {
        Ok(self.users.lock().unwrap().len() as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vouch_types::{Rating, Timestamp, UserBadge};

    fn review(user: &str, entity: &str, update_number: u32) -> ReviewRecord {
        let user_id = UserId::new(user);
        let entity_id = EntityId::new(entity);
        let parent = (update_number > 0)
            .then(|| ReviewId::derive(&user_id, &entity_id, 0));
        ReviewRecord {
            id: ReviewId::derive(&user_id, &entity_id, update_number),
            user_id,
            entity_id,
            rating: Rating::new(4).unwrap(),
            title: None,
            content: "solid experience".into(),
            user_badge: UserBadge::UnverifiedUser,
            parent_review_id: parent,
            update_number,
            is_update: update_number > 0,
            proof: None,
            is_verified: false,
            custom_verification_tag: None,
            upvotes: 0,
            downvotes: 0,
            created_at: Timestamp::new(100),
            updated_at: Timestamp::new(100),
        }
    }

    #[test]
    fn insert_and_get_original() {
        let store = NullStore::new();
        let record = review("u1", "e1", 0);
        store.insert_original(&record).unwrap();

        let found = store
            .get_original(&UserId::new("u1"), &EntityId::new("e1"))
            .unwrap()
            .unwrap();
        assert_eq!(found.id, record.id);
        assert_eq!(store.review_count().unwrap(), 1);
    }

    #[test]
    fn second_original_for_same_pair_rejected() {
        let store = NullStore::new();
        store.insert_original(&review("u1", "e1", 0)).unwrap();

        let result = store.insert_original(&review("u1", "e1", 0));
        assert!(matches!(result, Err(StoreError::Duplicate(_))));
        assert_eq!(store.review_count().unwrap(), 1);
    }

    #[test]
    fn same_user_different_entities_allowed() {
        let store = NullStore::new();
        store.insert_original(&review("u1", "e1", 0)).unwrap();
        store.insert_original(&review("u1", "e2", 0)).unwrap();
        assert_eq!(store.review_count().unwrap(), 2);
    }

    #[test]
    fn update_slot_taken_rejected() {
        let store = NullStore::new();
        store.insert_original(&review("u1", "e1", 0)).unwrap();
        store.insert_update(&review("u1", "e1", 1)).unwrap();

        let result = store.insert_update(&review("u1", "e1", 1));
        assert!(matches!(result, Err(StoreError::Duplicate(_))));
    }

    #[test]
    fn get_updates_filters_by_parent() {
        let store = NullStore::new();
        store.insert_original(&review("u1", "e1", 0)).unwrap();
        store.insert_update(&review("u1", "e1", 1)).unwrap();
        store.insert_update(&review("u1", "e1", 2)).unwrap();
        store.insert_original(&review("u2", "e1", 0)).unwrap();

        let parent = ReviewId::derive(&UserId::new("u1"), &EntityId::new("e1"), 0);
        assert_eq!(store.get_updates(&parent).unwrap().len(), 2);
    }

    #[test]
    fn put_review_requires_existing_row() {
        let store = NullStore::new();
        let record = review("u1", "e1", 0);
        assert!(matches!(
            store.put_review(&record),
            Err(StoreError::NotFound(_))
        ));

        store.insert_original(&record).unwrap();
        let mut updated = record.clone();
        updated.is_verified = true;
        store.put_review(&updated).unwrap();
        assert!(store.get_review(&record.id).unwrap().is_verified);
    }
}
