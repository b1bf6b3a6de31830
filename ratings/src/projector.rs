//! Aggregate projector - recomputes the denormalized rating columns.

use vouch_reviews::ReviewChain;
use vouch_store::entity::EntityStore;
use vouch_store::review::ReviewStore;
use vouch_store::StoreError;
use vouch_types::EntityId;

/// An entity's displayed aggregate.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EntityAggregate {
    /// Mean of the latest rating per chain, rounded to one decimal.
    pub average_rating: f64,
    /// Number of chains (distinct reviewing users), not rows.
    pub review_count: u64,
}

impl EntityAggregate {
    pub const EMPTY: Self = Self {
        average_rating: 0.0,
        review_count: 0,
    };
}

pub struct AggregateProjector;

impl AggregateProjector {
    /// Recompute an entity's aggregate and write the denormalized columns.
    ///
    /// The counted set is the latest review of each chain on the entity.
    /// Updates never change the count; they only move the rating their
    /// chain contributes. Inactive entities project zero regardless of
    /// their raw rows. Idempotent: with no intervening writes, a second
    /// call derives the identical aggregate.
    pub fn recompute<S>(&self, store: &S, entity_id: &EntityId) -> Result<EntityAggregate, StoreError>
    where
        S: ReviewStore + EntityStore,
    {
        let mut entity = store.get_entity(entity_id)?;
        let aggregate = if entity.status.is_active() {
            self.project(store, entity_id)?
        } else {
            EntityAggregate::EMPTY
        };
        entity.average_rating = aggregate.average_rating;
        entity.review_count = aggregate.review_count;
        store.put_entity(&entity)?;
        Ok(aggregate)
    }

    fn project<S: ReviewStore>(
        &self,
        store: &S,
        entity_id: &EntityId,
    ) -> Result<EntityAggregate, StoreError> {
        let originals = store.list_entity_originals(entity_id)?;
        if originals.is_empty() {
            return Ok(EntityAggregate::EMPTY);
        }

        let review_count = originals.len() as u64;
        let mut rating_sum = 0u64;
        for original in originals {
            let updates = store.get_updates(&original.id)?;
            let chain = ReviewChain::new(original, updates);
            rating_sum += u64::from(chain.latest().rating.value());
        }

        Ok(EntityAggregate {
            average_rating: round_to_tenth(rating_sum as f64 / review_count as f64),
            review_count,
        })
    }
}

fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
