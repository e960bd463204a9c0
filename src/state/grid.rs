/// Grid projection: the ordered tiles presented to the user
///
/// Rebuilt wholesale from the filter engine's output, never patched in
/// place. Every Normal tile's checked flag mirrors selection membership;
/// special folders are navigation entries and never render checked.

use super::data::{AssetKind, AssetRecord};
use super::selection::SelectionSet;

/// One grid tile, bound to a single asset record
#[derive(Debug, Clone, PartialEq)]
pub struct Tile {
    pub record: AssetRecord,
    pub checked: bool,
}

impl Tile {
    pub fn id(&self) -> &str {
        self.record.id()
    }
}

/// The ordered, filtered view of the current folder
#[derive(Debug, Clone, Default)]
pub struct GridProjection {
    tiles: Vec<Tile>,
}

impl GridProjection {
    /// Replace the projection with a freshly filtered record list,
    /// establishing each tile's checked flag from the selection.
    pub fn rebuild(records: Vec<AssetRecord>, selection: &SelectionSet) -> Self {
        let tiles = records
            .into_iter()
            .map(|record| {
                let checked =
                    record.kind() == AssetKind::Normal && selection.contains(record.id());
                Tile { record, checked }
            })
            .collect();
        GridProjection { tiles }
    }

    /// Re-establish checked flags after a selection change.
    /// Cheaper than a rebuild: the filter does not depend on selection.
    pub fn resync_checked(&mut self, selection: &SelectionSet) {
        for tile in &mut self.tiles {
            tile.checked =
                tile.record.kind() == AssetKind::Normal && selection.contains(tile.id());
        }
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    /// Ids of Normal-kind tiles, in grid order (select-all scope)
    pub fn visible_normal_ids(&self) -> Vec<String> {
        self.tiles
            .iter()
            .filter(|t| t.record.kind() == AssetKind::Normal)
            .map(|t| t.id().to_string())
            .collect()
    }

    /// Number of Normal-kind tiles currently visible
    pub fn visible_normal_count(&self) -> usize {
        self.tiles
            .iter()
            .filter(|t| t.record.kind() == AssetKind::Normal)
            .count()
    }

    /// Number of visible tiles that are checked
    pub fn checked_count(&self) -> usize {
        self.tiles.iter().filter(|t| t.checked).count()
    }
}
