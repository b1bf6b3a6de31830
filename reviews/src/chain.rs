//! A review chain: the original review plus all of its updates.

use vouch_store::review::ReviewRecord;

/// One (user, entity) chain. Updates are kept sorted by `update_number`
/// ascending; "latest" always means highest update number, never newest
/// timestamp, so clock skew cannot reorder a chain.
#[derive(Clone, Debug)]
pub struct ReviewChain {
    pub original: ReviewRecord,
    updates: Vec<ReviewRecord>,
}

impl ReviewChain {
    pub fn new(original: ReviewRecord, mut updates: Vec<ReviewRecord>) -> Self {
        updates.sort_by_key(|u| u.update_number);
        Self { original, updates }
    }

    /// Updates sorted ascending by `update_number`.
    pub fn updates(&self) -> &[ReviewRecord] {
        &self.updates
    }

    /// The review representing the user's current opinion: the update with
    /// the highest `update_number`, or the original if no updates exist.
    pub fn latest(&self) -> &ReviewRecord {
        self.updates.last().unwrap_or(&self.original)
    }

    /// The update number the next revision of this chain should take.
    pub fn next_update_number(&self) -> u32 {
        self.updates
            .last()
            .map(|u| u.update_number)
            .unwrap_or(0)
            + 1
    }

    /// Updates sorted by submission time, for profile display. Ordering
    /// decisions for "latest" never use this.
    pub fn updates_for_display(&self) -> Vec<&ReviewRecord> {
        let mut sorted: Vec<&ReviewRecord> = self.updates.iter().collect();
        sorted.sort_by_key(|u| u.created_at);
        sorted
    }

    /// Total rows in the chain, original included.
    pub fn revision_count(&self) -> usize {
        1 + self.updates.len()
    }
}
