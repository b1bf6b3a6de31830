//! Verification lifecycles.
//!
//! Two independent state machines: the proof-of-experience lifecycle on a
//! review (NoProof -> Pending -> Approved | Rejected, with admin
//! re-review corrections) and the identity lifecycle on a user profile
//! (Unverified -> Verified -> Unverified with a destructive document reset
//! on rejection). The engines mutate records in place; persistence stays
//! with the caller.

pub mod error;
pub mod identity;
pub mod proof;

pub use error::VerificationError;
pub use identity::IdentityEngine;
pub use proof::ProofEngine;
