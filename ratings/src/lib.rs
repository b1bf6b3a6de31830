//! Entity aggregate projection.
//!
//! Recomputes an entity's displayed `average_rating` and `review_count`
//! from the latest review in each user's chain. Always derives fresh from
//! the counted set instead of patching a running total, so repeated calls
//! cannot accumulate drift.

pub mod projector;

pub use projector::{AggregateProjector, EntityAggregate};
