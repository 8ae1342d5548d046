use rand::rng;
use rand::seq::SliceRandom;
use std::collections::BTreeSet;

use guide_core::model::{CategoryFilter, FavoritesState, ProgressState};

use super::position::BrowsePosition;
use super::selection::BrowseSelection;
use super::BrowseItem;

/// Tracker-derived inputs the filters read: which ids count as mastered and
/// which are favorites.
///
/// Callers capture a fresh snapshot from the trackers before each call, so
/// the browser stays a function of explicit inputs with no hidden
/// dependency on tracker internals.
#[derive(Debug, Clone, Default)]
pub struct VisibilityInputs {
    mastered: BTreeSet<u32>,
    favorites: BTreeSet<u32>,
}

impl VisibilityInputs {
    /// No mastered items, no favorites; every filter passes everything.
    #[must_use]
    pub fn none() -> Self {
        Self::default()
    }

    /// Snapshot for quiz walkthroughs: mastered ids from the progress state.
    #[must_use]
    pub fn from_progress(progress: &ProgressState) -> Self {
        Self {
            mastered: progress.mastered_ids().map(|id| id.value()).collect(),
            favorites: BTreeSet::new(),
        }
    }

    /// Snapshot for takeaway walkthroughs: favorite ids.
    #[must_use]
    pub fn from_favorites(favorites: &FavoritesState) -> Self {
        Self {
            mastered: BTreeSet::new(),
            favorites: favorites.ids().iter().map(|id| id.value()).collect(),
        }
    }
}

/// Ordered, filtered (and possibly shuffled) walk over a catalog slice.
///
/// The working list is rederived on demand from the full item list, the
/// current [`BrowseSelection`], and the caller's [`VisibilityInputs`]; the
/// only cached derivation is the shuffle permutation, which is recomputed
/// whenever a filter changes while shuffle is active. An empty working list
/// is a normal state, not an error.
pub struct Browser<T: BrowseItem> {
    items: Vec<T>,
    selection: BrowseSelection,
    /// Cached permutation of the filtered candidate set, present while
    /// shuffle mode is active.
    shuffled: Option<Vec<u32>>,
    current: usize,
}

impl<T: BrowseItem> Browser<T> {
    /// Browser over `items` in natural catalog order with no filters
    /// active.
    #[must_use]
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            selection: BrowseSelection::default(),
            shuffled: None,
            current: 0,
        }
    }

    #[must_use]
    pub fn selection(&self) -> &BrowseSelection {
        &self.selection
    }

    #[must_use]
    pub fn is_shuffled(&self) -> bool {
        self.shuffled.is_some()
    }

    /// The ordered working list the presentation layer iterates over.
    #[must_use]
    pub fn working_list(&self, inputs: &VisibilityInputs) -> Vec<&T> {
        self.working_ids(inputs)
            .into_iter()
            .filter_map(|id| self.item_by_id(id))
            .collect()
    }

    #[must_use]
    pub fn len(&self, inputs: &VisibilityInputs) -> usize {
        self.working_ids(inputs).len()
    }

    #[must_use]
    pub fn is_empty(&self, inputs: &VisibilityInputs) -> bool {
        self.working_ids(inputs).is_empty()
    }

    /// Current index, clamped into the working list. 0 for an empty list.
    #[must_use]
    pub fn current_index(&self, inputs: &VisibilityInputs) -> usize {
        Self::clamp_index(self.current, self.len(inputs))
    }

    /// Item at the (clamped) current index, or `None` if the working list
    /// is empty.
    #[must_use]
    pub fn current_item(&self, inputs: &VisibilityInputs) -> Option<&T> {
        let ids = self.working_ids(inputs);
        let id = *ids.get(Self::clamp_index(self.current, ids.len()))?;
        self.item_by_id(id)
    }

    /// "N of M" position for the current working list.
    #[must_use]
    pub fn position(&self, inputs: &VisibilityInputs) -> BrowsePosition {
        let total = self.len(inputs);
        BrowsePosition {
            index: Self::clamp_index(self.current, total),
            total,
        }
    }

    /// Applies a category selection and restarts the walk from the top.
    pub fn set_category(&mut self, category: CategoryFilter, inputs: &VisibilityInputs) {
        self.selection.category = category;
        self.after_filter_change(inputs);
    }

    /// Turns the mastered-exclusion filter on or off and restarts the walk.
    pub fn set_exclude_mastered(&mut self, exclude: bool, inputs: &VisibilityInputs) {
        self.selection.exclude_mastered = exclude;
        self.after_filter_change(inputs);
    }

    /// Turns the favorites-only filter on or off and restarts the walk.
    pub fn set_favorites_only(&mut self, only: bool, inputs: &VisibilityInputs) {
        self.selection.favorites_only = only;
        self.after_filter_change(inputs);
    }

    /// Computes a fresh uniform permutation of the currently filtered set
    /// and restarts the walk from the top of the new order.
    pub fn shuffle(&mut self, inputs: &VisibilityInputs) {
        self.reshuffle(inputs);
        self.current = 0;
    }

    /// Drops the cached permutation and returns to natural catalog order.
    pub fn clear_shuffle(&mut self) {
        self.shuffled = None;
        self.current = 0;
    }

    /// Steps forward. Returns `false` (without moving) at the end of the
    /// list or when the list is empty.
    pub fn next(&mut self, inputs: &VisibilityInputs) -> bool {
        let len = self.len(inputs);
        let index = Self::clamp_index(self.current, len);
        if index + 1 < len {
            self.current = index + 1;
            true
        } else {
            self.current = index;
            false
        }
    }

    /// Steps backward. Returns `false` (without moving) at the start.
    pub fn previous(&mut self, inputs: &VisibilityInputs) -> bool {
        let len = self.len(inputs);
        let index = Self::clamp_index(self.current, len);
        if index > 0 {
            self.current = index - 1;
            true
        } else {
            self.current = index;
            false
        }
    }

    /// Jumps to the given working-list index, clamped into range.
    pub fn go_to_index(&mut self, index: usize, inputs: &VisibilityInputs) {
        self.current = Self::clamp_index(index, self.len(inputs));
    }

    /// Jumps to the item with the given id.
    ///
    /// If the id is filtered out of the current working list, every active
    /// filter is relaxed (category back to all, exclusion and favorites-only
    /// off, shuffle cleared) and the lookup is retried against the natural
    /// catalog. Returns `false` only if the id is not in the catalog at all.
    pub fn go_to(&mut self, id: u32, inputs: &VisibilityInputs) -> bool {
        if let Some(index) = self.working_ids(inputs).iter().position(|&x| x == id) {
            self.current = index;
            return true;
        }

        self.selection = BrowseSelection::default();
        self.shuffled = None;
        match self.items.iter().position(|item| item.browse_id() == id) {
            Some(index) => {
                self.current = index;
                true
            }
            None => {
                self.current = 0;
                false
            }
        }
    }

    /// Filtered candidate ids in natural catalog order, per the fixed
    /// derivation order: category, then mastered-exclusion, then
    /// favorites-only.
    fn filtered_ids(&self, inputs: &VisibilityInputs) -> Vec<u32> {
        self.items
            .iter()
            .filter(|item| self.selection.category.matches(item.category_label()))
            .filter(|item| {
                !self.selection.exclude_mastered || !inputs.mastered.contains(&item.browse_id())
            })
            .filter(|item| {
                !self.selection.favorites_only || inputs.favorites.contains(&item.browse_id())
            })
            .map(BrowseItem::browse_id)
            .collect()
    }

    /// Working-list ids: the filtered set, reordered by the cached
    /// permutation when shuffle is active. The cache is re-filtered against
    /// the live candidate set so it never yields ids no longer in scope.
    fn working_ids(&self, inputs: &VisibilityInputs) -> Vec<u32> {
        let filtered = self.filtered_ids(inputs);
        match &self.shuffled {
            Some(order) => {
                let allowed: BTreeSet<u32> = filtered.into_iter().collect();
                order
                    .iter()
                    .copied()
                    .filter(|id| allowed.contains(id))
                    .collect()
            }
            None => filtered,
        }
    }

    fn item_by_id(&self, id: u32) -> Option<&T> {
        self.items.iter().find(|item| item.browse_id() == id)
    }

    fn after_filter_change(&mut self, inputs: &VisibilityInputs) {
        self.current = 0;
        if self.shuffled.is_some() {
            self.reshuffle(inputs);
        }
    }

    fn reshuffle(&mut self, inputs: &VisibilityInputs) {
        let mut ids = self.filtered_ids(inputs);
        ids.shuffle(&mut rng());
        self.shuffled = Some(ids);
    }

    fn clamp_index(index: usize, len: usize) -> usize {
        if len == 0 { 0 } else { index.min(len - 1) }
    }
}
