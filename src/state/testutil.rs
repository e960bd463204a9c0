/// Shared helpers for state tests
///
/// `MemoryStore` stands in for the folder-backed store: records live in
/// a Vec, and ids listed in `failing` simulate unreadable sidecar files.

use std::collections::HashSet;
use std::path::PathBuf;

use super::data::{AssetData, AssetRecord};
use super::store::{AssetStore, StoreError};

pub struct MemoryStore {
    pub records: Vec<AssetRecord>,
    pub failing: HashSet<String>,
    pub folder: Option<PathBuf>,
}

impl MemoryStore {
    pub fn new(records: Vec<AssetRecord>) -> Self {
        MemoryStore {
            records,
            failing: HashSet::new(),
            folder: Some(PathBuf::from("/assets")),
        }
    }
}

impl AssetStore for MemoryStore {
    fn all_assets(&self) -> Vec<AssetRecord> {
        self.records.clone()
    }

    fn resolve(&mut self, id: &str) -> Result<Option<AssetData>, StoreError> {
        if self.failing.contains(id) {
            return Err(StoreError::UnknownAsset(id.to_string()));
        }
        let Some(position) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        match &self.records[position] {
            AssetRecord::Full(data) => Ok(Some(data.clone())),
            _ => Ok(None),
        }
    }

    fn current_folder(&self) -> Option<PathBuf> {
        self.folder.clone()
    }

    fn set_stars(&mut self, id: &str, stars: u8) -> Result<(), StoreError> {
        for record in &mut self.records {
            if record.id() == id {
                if let AssetRecord::Full(data) = record {
                    data.stars = Some(stars);
                    return Ok(());
                }
            }
        }
        Err(StoreError::UnknownAsset(id.to_string()))
    }
}

/// A fully loaded record with the given rating
pub fn full(name: &str, stars: u8) -> AssetRecord {
    AssetRecord::Full(AssetData {
        name: name.to_string(),
        archive: Some(format!("{name}.zip")),
        preview: Some(format!("{name}.png")),
        size_mb: 1.0,
        thumbnail: None,
        stars: Some(stars),
        color: None,
        meta: serde_json::Value::Null,
    })
}

/// A navigation pseudo-entry
pub fn special(name: &str) -> AssetRecord {
    AssetRecord::SpecialFolder {
        id: name.to_string(),
        path: PathBuf::from(format!("/assets/{name}")),
    }
}

/// A listing-only record
pub fn stub(name: &str) -> AssetRecord {
    AssetRecord::Stub {
        id: name.to_string(),
    }
}
