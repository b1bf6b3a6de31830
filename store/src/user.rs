//! User profile record and storage trait.

use crate::StoreError;
use serde::{Deserialize, Serialize};
use vouch_types::{DisplayNamePreference, IdentityState, Timestamp, TypeError, UserId};

/// Identity-verification inputs captured during the out-of-band identity
/// check. Cleared wholesale when an admin rejects the identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdentityDocuments {
    /// Name as it appears on the submitted document.
    pub legal_name: String,
    /// Identity document number (e.g. PAN).
    pub document_number: String,
    pub verified_mobile: String,
}

/// An authenticated user's profile.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: UserId,
    /// Immutable once set.
    pub pseudonym: Option<String>,
    pub display_name: DisplayNamePreference,
    pub identity: IdentityState,
    /// Present while a submission or a standing identity check exists;
    /// rejection resets this to `None`.
    pub identity_documents: Option<IdentityDocuments>,
    pub created_at: Timestamp,
}

impl UserProfile {
    /// Set the pseudonym. Fails if one is already set.
    pub fn set_pseudonym(&mut self, pseudonym: impl Into<String>) -> Result<(), TypeError> {
        if self.pseudonym.is_some() {
            return Err(TypeError::PseudonymAlreadySet);
        }
        self.pseudonym = Some(pseudonym.into());
        Ok(())
    }
}

/// Trait for user profile storage operations.
pub trait UserStore {
    fn get_user(&self, id: &UserId) -> Result<UserProfile, StoreError>;
    fn put_user(&self, profile: &UserProfile) -> Result<(), StoreError>;
    fn user_exists(&self, id: &UserId) -> Result<bool, StoreError>;
    fn user_count(&self) -> Result<u64, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> UserProfile {
        UserProfile {
            id: UserId::new("u1"),
            pseudonym: None,
            display_name: DisplayNamePreference::Pseudonym,
            identity: IdentityState::Unverified,
            identity_documents: None,
            created_at: Timestamp::new(0),
        }
    }

    #[test]
    fn pseudonym_set_once() {
        let mut user = profile();
        user.set_pseudonym("night_owl").unwrap();
        assert_eq!(user.pseudonym.as_deref(), Some("night_owl"));

        let result = user.set_pseudonym("day_owl");
        assert_eq!(result, Err(TypeError::PseudonymAlreadySet));
        assert_eq!(user.pseudonym.as_deref(), Some("night_owl"));
    }
}
