//! Favorite takeaway cards, persisted after every toggle.

use guide_core::Clock;
use guide_core::model::{FavoritesState, TakeawayId};
use storage::Store;

/// Storage key for the persisted favorites blob.
pub const FAVORITES_KEY: &str = "favorites";

/// Owns the in-memory [`FavoritesState`] for one session.
///
/// There is deliberately no bulk reset: favorites are only ever changed one
/// card at a time. Storage failures degrade to in-memory-only behavior.
pub struct FavoritesService {
    store: Store,
    clock: Clock,
    state: FavoritesState,
}

impl FavoritesService {
    /// Loads persisted favorites, or starts empty if nothing usable is
    /// stored.
    #[must_use]
    pub fn load(store: Store, clock: Clock) -> Self {
        let state = store.get_or(FAVORITES_KEY, FavoritesState::empty(clock.now()));
        Self {
            store,
            clock,
            state,
        }
    }

    /// Flips membership for `id`, persists, and returns the resulting
    /// membership: `true` if the card is now a favorite. The return value
    /// drives the "added/removed" feedback in the UI.
    pub fn toggle(&mut self, id: TakeawayId) -> bool {
        let is_favorite_now = self.state.toggle(id, self.clock.now());
        self.persist();
        is_favorite_now
    }

    /// Pure lookup, no side effect.
    #[must_use]
    pub fn is_favorite(&self, id: TakeawayId) -> bool {
        self.state.contains(id)
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.state.len()
    }

    /// Current state snapshot, e.g. for building visibility inputs.
    #[must_use]
    pub fn state(&self) -> &FavoritesState {
        &self.state
    }

    fn persist(&self) {
        if let Err(err) = self.store.set(FAVORITES_KEY, &self.state) {
            log::warn!("persisting favorites failed, keeping in-memory state: {err}");
        }
    }
}
