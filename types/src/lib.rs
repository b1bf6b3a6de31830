//! Fundamental types for the Vouch review platform.
//!
//! This crate defines the core types shared across every other crate in the
//! workspace: identifiers, ratings, timestamps, service parameters, and the
//! state enums driving the verification lifecycles.

pub mod error;
pub mod id;
pub mod params;
pub mod rating;
pub mod state;
pub mod time;

pub use error::TypeError;
pub use id::{AdminId, EntityId, ReviewId, UserId};
pub use params::ServiceParams;
pub use rating::Rating;
pub use state::{DisplayNamePreference, EntityStatus, IdentityState, TrustLevel, UserBadge};
pub use time::Timestamp;
