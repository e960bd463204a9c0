/// Star filter state
///
/// A single minimum-star threshold. 0 means "no filter". Clicking the
/// star that is already active clears the filter; clicking a different
/// star replaces it, so at most one nonzero threshold is ever active.

use super::data::MAX_STARS;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct StarFilterState {
    active_threshold: u8,
}

impl StarFilterState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply a star click with toggle semantics. Returns the new threshold.
    ///
    /// A rating of 0 (or anything the UI should never send) clears the
    /// filter instead of erroring; ratings above the maximum are clamped.
    pub fn set_filter(&mut self, rating: u8) -> u8 {
        let rating = rating.min(MAX_STARS);
        if rating == 0 || rating == self.active_threshold {
            self.active_threshold = 0;
        } else {
            self.active_threshold = rating;
        }
        self.active_threshold
    }

    /// Force the filter off
    pub fn clear_filter(&mut self) {
        self.active_threshold = 0;
    }

    /// The active minimum-star threshold; 0 when no filter is active
    pub fn active(&self) -> u8 {
        self.active_threshold
    }

    pub fn is_active(&self) -> bool {
        self.active_threshold > 0
    }

    /// Whether star `index` (1-based) should render lit.
    /// Stars 1..=threshold are lit, the rest are not.
    pub fn star_is_lit(&self, index: u8) -> bool {
        index >= 1 && index <= self.active_threshold
    }
}
