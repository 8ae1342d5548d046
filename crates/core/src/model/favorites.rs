use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use super::ids::TakeawayId;

/// Per-profile set of liked takeaway cards.
///
/// The serde shape is the persisted wire format: `favoriteIds` as an array
/// plus a last-modified stamp. Ids whose cards no longer exist in the
/// catalog are tolerated; working-list derivation simply skips them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoritesState {
    favorite_ids: BTreeSet<TakeawayId>,
    last_updated: DateTime<Utc>,
}

impl FavoritesState {
    /// Fresh state with no favorites.
    #[must_use]
    pub fn empty(now: DateTime<Utc>) -> Self {
        Self {
            favorite_ids: BTreeSet::new(),
            last_updated: now,
        }
    }

    /// Flips membership for `id` and returns the resulting membership:
    /// `true` if the card is a favorite after the call.
    pub fn toggle(&mut self, id: TakeawayId, now: DateTime<Utc>) -> bool {
        let added = self.favorite_ids.insert(id);
        if !added {
            self.favorite_ids.remove(&id);
        }
        self.last_updated = now;
        added
    }

    #[must_use]
    pub fn contains(&self, id: TakeawayId) -> bool {
        self.favorite_ids.contains(&id)
    }

    #[must_use]
    pub fn ids(&self) -> &BTreeSet<TakeawayId> {
        &self.favorite_ids
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.favorite_ids.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.favorite_ids.is_empty()
    }

    #[must_use]
    pub fn last_updated(&self) -> DateTime<Utc> {
        self.last_updated
    }
}
