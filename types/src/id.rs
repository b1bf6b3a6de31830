//! Identifier types for users, entities, admins, and reviews.
//!
//! User, entity, and admin ids are opaque strings minted by the external
//! identity provider and directory registration flows; this crate never
//! parses or validates their internal structure. Review ids are 32-byte
//! Blake2b digests derived from the chain slot they occupy.

use blake2::digest::consts::U32;
use blake2::{Blake2b, Digest};
use serde::{Deserialize, Serialize};
use std::fmt;

type Blake2b256 = Blake2b<U32>;

macro_rules! string_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(String);

        impl $name {
            pub fn new(raw: impl Into<String>) -> Self {
                Self(raw.into())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl From<String> for $name {
            fn from(s: String) -> Self {
                Self::new(s)
            }
        }
    };
}

string_id! {
    /// An authenticated user, as identified by the external identity provider.
    UserId
}

string_id! {
    /// A reviewable subject (business, institution, product).
    EntityId
}

string_id! {
    /// An administrator performing verification actions.
    AdminId
}

/// A 32-byte review identifier.
///
/// Derived deterministically from (user, entity, update_number), so the id
/// of a chain slot is stable and two writers racing for the same slot
/// produce the same id; the store's uniqueness constraint rejects the loser.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ReviewId([u8; 32]);

impl ReviewId {
    pub fn new(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Derive the id for a chain slot: the original is slot 0, updates are 1..
    pub fn derive(user: &UserId, entity: &EntityId, update_number: u32) -> Self {
        let mut hasher = Blake2b256::new();
        hasher.update(user.as_str().as_bytes());
        hasher.update([0xff]);
        hasher.update(entity.as_str().as_bytes());
        hasher.update([0xff]);
        hasher.update(update_number.to_le_bytes());
        Self(hasher.finalize().into())
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }
}

impl fmt::Debug for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ReviewId({})", hex::encode(&self.0[..4]))
    }
}

impl fmt::Display for ReviewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", hex::encode(&self.0))
    }
}

// Inline hex encoding to avoid adding the `hex` crate as a dependency of types.
mod hex {
    pub fn encode(bytes: &[u8]) -> String {
        bytes.iter().map(|b| format!("{:02x}", b)).collect()
    }
}
