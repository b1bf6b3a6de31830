//! Service parameters, tunable per deployment.

use serde::{Deserialize, Serialize};

/// Tunable parameters carried by the service configuration.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceParams {
    /// Attempts for update-number assignment before giving up on a
    /// concurrent-writer conflict. Conflicts are benign races, not logic
    /// errors, so they are retried; validation errors never are.
    pub update_insert_retries: u32,

    /// Whether review submission on an inactive entity is rejected outright.
    /// Aggregates exclude inactive entities regardless of this setting.
    pub reject_inactive_submissions: bool,

    /// Maximum review content length in characters.
    pub max_review_content_len: usize,
}

impl Default for ServiceParams {
    fn default() -> Self {
        Self {
            update_insert_retries: 3,
            reject_inactive_submissions: false,
            max_review_content_len: 10_000,
        }
    }
}
