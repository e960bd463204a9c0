/// Control panel controller
///
/// Owns the selection set, the star filter, the unfiltered source list,
/// and the grid projection, and is the only place any of them mutate.
/// Each event handler explicitly triggers exactly the downstream work it
/// needs: selection changes resync checked flags and re-derive button
/// states; filter and folder changes rebuild the projection first.

use super::actions::{derive_action_states, ActionStates};
use super::data::{AssetData, AssetRecord};
use super::engine::apply_star_filter;
use super::filter::StarFilterState;
use super::grid::GridProjection;
use super::selection::SelectionSet;
use super::store::AssetStore;
use std::collections::HashSet;

pub struct ControlPanelController<S: AssetStore> {
    store: S,
    /// Unfiltered, ordered source list for the current folder.
    /// Filtering reads this; it is only replaced on folder change
    /// or when the store rewrites a record (rating).
    original_assets: Vec<AssetRecord>,
    selection: SelectionSet,
    filter: StarFilterState,
    projection: GridProjection,
    actions: ActionStates,
}

impl<S: AssetStore> ControlPanelController<S> {
    pub fn new(store: S) -> Self {
        let mut controller = ControlPanelController {
            original_assets: store.all_assets(),
            store,
            selection: SelectionSet::new(),
            filter: StarFilterState::new(),
            projection: GridProjection::default(),
            actions: ActionStates::default(),
        };
        controller.rebuild_projection();
        controller
    }

    // ========== Event handlers ==========

    /// 'Select All': add every visible Normal asset to the selection.
    /// Returns how many were newly added.
    pub fn on_select_all_clicked(&mut self) -> usize {
        let mut added = 0;
        for id in self.projection.visible_normal_ids() {
            if self.selection.add(&id) {
                added += 1;
            }
        }
        self.projection.resync_checked(&self.selection);
        self.derive_actions();
        println!("✅ Selected all visible assets ({} new)", added);
        added
    }

    /// 'Deselect All': only acts when something is selected
    pub fn on_deselect_all_clicked(&mut self) {
        if self.selection.is_empty() {
            return;
        }
        self.selection.clear();
        self.projection.resync_checked(&self.selection);
        self.derive_actions();
    }

    /// A tile's checkbox was toggled directly
    pub fn on_tile_toggled(&mut self, id: &str, checked: bool) {
        if checked {
            self.selection.add(id);
        } else {
            self.selection.remove(id);
        }
        self.projection.resync_checked(&self.selection);
        self.derive_actions();
    }

    /// A star in the filter row was clicked (toggle semantics)
    pub fn on_star_filter_clicked(&mut self, rating: u8) {
        let threshold = self.filter.set_filter(rating);
        if threshold == 0 {
            println!("🔄 Star filter cleared - showing all assets");
        } else {
            println!("⭐ Filtering for {}+ stars", threshold);
        }
        self.rebuild_projection();
    }

    /// A new folder was opened (or the current one rescanned).
    /// Selection and filter reset; the projection is rebuilt from the
    /// new store contents.
    pub fn on_folder_changed(&mut self, store: S) {
        self.store = store;
        self.original_assets = self.store.all_assets();
        self.selection.clear();
        self.filter.clear_filter();
        self.rebuild_projection();
    }

    /// An asset was rated. The store persists the rating; visibility may
    /// change under an active filter, so the projection is rebuilt.
    pub fn on_asset_rated(&mut self, id: &str, stars: u8) {
        if let Err(err) = self.store.set_stars(id, stars) {
            eprintln!("⚠️  Could not save rating for '{}': {}", id, err);
        }
        self.original_assets = self.store.all_assets();
        self.rebuild_projection();
    }

    // ========== Recomputation ==========

    /// Run the filter over the source list and replace the projection
    /// wholesale, then re-derive button states. Checked flags are
    /// re-established from the selection as part of the rebuild, so the
    /// grid and the selection cannot drift apart.
    fn rebuild_projection(&mut self) {
        let filtered =
            apply_star_filter(&self.original_assets, self.filter.active(), &mut self.store);
        self.projection = GridProjection::rebuild(filtered, &self.selection);
        self.derive_actions();
    }

    fn derive_actions(&mut self) {
        self.actions = derive_action_states(
            self.selection.len(),
            self.projection.visible_normal_count(),
            self.store.current_folder().is_some(),
        );
    }

    // ========== Snapshots for the presentation layer ==========

    pub fn projection(&self) -> &GridProjection {
        &self.projection
    }

    pub fn action_states(&self) -> ActionStates {
        self.actions
    }

    pub fn active_filter(&self) -> u8 {
        self.filter.active()
    }

    pub fn star_is_lit(&self, index: u8) -> bool {
        self.filter.star_is_lit(index)
    }

    pub fn selected_ids(&self) -> HashSet<String> {
        self.selection.ids()
    }

    pub fn selected_count(&self) -> usize {
        self.selection.len()
    }

    /// Selected tiles that are actually visible right now. Stale ids
    /// (selected but filtered out or gone) count as not visible.
    pub fn visible_selected_count(&self) -> usize {
        self.projection.checked_count()
    }

    pub fn has_working_folder(&self) -> bool {
        self.store.current_folder().is_some()
    }

    pub fn current_folder(&self) -> Option<std::path::PathBuf> {
        self.store.current_folder()
    }

    /// Full records for every selected, currently visible asset.
    /// Used by the move/delete file operations.
    pub fn selected_full_records(&mut self) -> Vec<AssetData> {
        let mut records = Vec::new();
        for id in self.projection.visible_normal_ids() {
            if !self.selection.contains(&id) {
                continue;
            }
            match self.store.resolve(&id) {
                Ok(Some(data)) => records.push(data),
                Ok(None) => {}
                Err(err) => eprintln!("⚠️  Could not resolve asset '{}': {}", id, err),
            }
        }
        records
    }
}
