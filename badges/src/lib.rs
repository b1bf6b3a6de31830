//! Trust badge resolution.
//!
//! A review's displayed badge is derived at read time from the review's
//! proof state, its owner's current identity-verification state, and the
//! optional admin-assigned tag. Pure computation, no I/O.

pub mod resolve;

pub use resolve::{resolve_badge, BadgeCategory, ResolvedBadge, PENDING_LABEL, REJECTED_LABEL};
