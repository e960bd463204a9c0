/// Asset store: the authoritative record list for the open folder
///
/// `AssetStore` is the contract the controller depends on; `FolderStore`
/// is the production implementation backed by `.asset` sidecar files in
/// a single folder. Tests use an in-memory implementation instead.

use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use super::data::{AssetData, AssetRecord, MAX_STARS};

/// Errors from the folder-backed store
#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("no folder is open")]
    NoFolder,
    #[error("unknown asset: {0}")]
    UnknownAsset(String),
}

/// Contract between the controller and whatever holds the records
pub trait AssetStore {
    /// Ordered snapshot of all records for the current folder
    fn all_assets(&self) -> Vec<AssetRecord>;

    /// Upgrade a stub to a full record. `Ok(None)` means the id is unknown
    /// or has nothing to resolve; `Err` means the sidecar could not be read.
    /// Either way the caller keeps the stub it already has.
    fn resolve(&mut self, id: &str) -> Result<Option<AssetData>, StoreError>;

    /// The folder currently open, if any
    fn current_folder(&self) -> Option<PathBuf>;

    /// Set an asset's star rating (0-6) and persist it
    fn set_stars(&mut self, id: &str, stars: u8) -> Result<(), StoreError>;
}

/// Subfolder names that surface as navigation pseudo-entries in the grid
const SPECIAL_FOLDER_NAMES: [&str; 3] = ["textures", "tex", "maps"];

/// Folder-backed asset store
///
/// Scanning yields stub records from the directory listing; the sidecar
/// JSON of each asset is only read when a stub gets resolved, so opening
/// a large folder stays cheap.
#[derive(Debug, Clone, Default)]
pub struct FolderStore {
    folder: Option<PathBuf>,
    records: Vec<AssetRecord>,
}

impl FolderStore {
    /// A store with no folder open (application start)
    pub fn closed() -> Self {
        Self::default()
    }

    /// Open a folder: list special subfolders and `.asset` sidecars.
    ///
    /// Special folders come first, then assets sorted case-insensitively
    /// by name. This listing order is what the grid preserves.
    pub fn open(folder: &Path) -> Result<Self, StoreError> {
        let mut special = Vec::new();
        let mut stubs = Vec::new();

        for entry in WalkDir::new(folder)
            .min_depth(1)
            .max_depth(1)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            if path.is_dir() {
                if SPECIAL_FOLDER_NAMES
                    .iter()
                    .any(|s| name.eq_ignore_ascii_case(s))
                {
                    special.push(AssetRecord::SpecialFolder {
                        id: name,
                        path: path.to_path_buf(),
                    });
                }
                continue;
            }

            if let Some(extension) = path.extension() {
                let ext = extension.to_string_lossy().to_lowercase();
                if ext != "asset" {
                    continue;
                }
                if let Some(stem) = path.file_stem() {
                    stubs.push(AssetRecord::Stub {
                        id: stem.to_string_lossy().to_string(),
                    });
                }
            }
        }

        special.sort_by_key(|r| r.id().to_lowercase());
        stubs.sort_by_key(|r| r.id().to_lowercase());

        let mut records = special;
        records.append(&mut stubs);

        println!(
            "📁 Opened folder {} ({} records)",
            folder.display(),
            records.len()
        );

        Ok(FolderStore {
            folder: Some(folder.to_path_buf()),
            records,
        })
    }

    fn sidecar_path(&self, id: &str) -> Result<PathBuf, StoreError> {
        let folder = self.folder.as_ref().ok_or(StoreError::NoFolder)?;
        Ok(folder.join(format!("{id}.asset")))
    }

    /// Read and parse an asset's sidecar file
    fn read_sidecar(&self, id: &str) -> Result<AssetData, StoreError> {
        let path = self.sidecar_path(id)?;
        let raw = fs::read_to_string(path)?;
        let mut data: AssetData = serde_json::from_str(&raw)?;
        // the file stem is the identity the store scans and resolves by;
        // a hand-edited `name` field must not detach the record from it
        data.name = id.to_string();
        Ok(data)
    }

    /// Write an asset's sidecar file (pretty-printed, like the scanner does)
    fn write_sidecar(&self, data: &AssetData) -> Result<(), StoreError> {
        let path = self.sidecar_path(&data.name)?;
        let raw = serde_json::to_string_pretty(data)?;
        fs::write(path, raw)?;
        Ok(())
    }
}

impl AssetStore for FolderStore {
    fn all_assets(&self) -> Vec<AssetRecord> {
        self.records.clone()
    }

    fn resolve(&mut self, id: &str) -> Result<Option<AssetData>, StoreError> {
        let Some(position) = self.records.iter().position(|r| r.id() == id) else {
            return Ok(None);
        };
        match &self.records[position] {
            AssetRecord::Full(data) => Ok(Some(data.clone())),
            AssetRecord::SpecialFolder { .. } => Ok(None),
            AssetRecord::Stub { .. } => {
                let data = self.read_sidecar(id)?;
                // cache the upgrade so the next pass skips the file read
                self.records[position] = AssetRecord::Full(data.clone());
                Ok(Some(data))
            }
        }
    }

    fn current_folder(&self) -> Option<PathBuf> {
        self.folder.clone()
    }

    fn set_stars(&mut self, id: &str, stars: u8) -> Result<(), StoreError> {
        let mut data = self
            .resolve(id)?
            .ok_or_else(|| StoreError::UnknownAsset(id.to_string()))?;
        data.stars = Some(stars.min(MAX_STARS));
        self.write_sidecar(&data)?;
        if let Some(record) = self.records.iter_mut().find(|r| r.id() == id) {
            *record = AssetRecord::Full(data);
        }
        println!("⭐ Rated '{}' with {} stars", id, stars.min(MAX_STARS));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    static DIR_SEQ: AtomicU32 = AtomicU32::new(0);

    /// Fresh scratch folder under the system temp dir
    fn scratch_folder() -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "asset-browser-test-{}-{}",
            std::process::id(),
            DIR_SEQ.fetch_add(1, Ordering::Relaxed)
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_asset(dir: &Path, name: &str, body: &str) {
        fs::write(dir.join(format!("{name}.asset")), body).unwrap();
    }

    #[test]
    fn test_open_lists_specials_first_then_sorted_assets() {
        let dir = scratch_folder();
        write_asset(&dir, "Zebra", r#"{"name": "Zebra"}"#);
        write_asset(&dir, "apple", r#"{"name": "apple"}"#);
        fs::create_dir(dir.join("textures")).unwrap();
        fs::create_dir(dir.join("unrelated")).unwrap();

        let store = FolderStore::open(&dir).unwrap();
        let ids: Vec<&str> = store.records.iter().map(|r| r.id()).collect();
        assert_eq!(ids, vec!["textures", "apple", "Zebra"]);
        assert!(store.records[0].is_special_folder());
        assert!(store.records[1].is_stub());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_upgrades_stub_in_place() {
        let dir = scratch_folder();
        write_asset(&dir, "rock", r#"{"name": "rock", "stars": 5}"#);

        let mut store = FolderStore::open(&dir).unwrap();
        assert!(store.records[0].is_stub());

        let data = store.resolve("rock").unwrap().unwrap();
        assert_eq!(data.effective_stars(), 5);
        assert!(!store.records[0].is_stub());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_keeps_file_stem_identity() {
        let dir = scratch_folder();
        // sidecar hand-edited to carry a different name
        write_asset(&dir, "rock", r#"{"name": "boulder", "stars": 2}"#);

        let mut store = FolderStore::open(&dir).unwrap();
        let data = store.resolve("rock").unwrap().unwrap();
        assert_eq!(data.name, "rock");
        // the upgraded record still answers to the id it was listed under
        assert_eq!(store.records[0].id(), "rock");

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_unknown_id_is_none() {
        let dir = scratch_folder();
        let mut store = FolderStore::open(&dir).unwrap();
        assert!(store.resolve("ghost").unwrap().is_none());
        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_resolve_corrupt_sidecar_is_an_error_and_keeps_stub() {
        let dir = scratch_folder();
        write_asset(&dir, "broken", "{not json");

        let mut store = FolderStore::open(&dir).unwrap();
        assert!(store.resolve("broken").is_err());
        // the record is still there as a stub
        assert!(store.records[0].is_stub());

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_set_stars_persists_to_sidecar() {
        let dir = scratch_folder();
        write_asset(&dir, "wood", r#"{"name": "wood", "stars": null}"#);

        let mut store = FolderStore::open(&dir).unwrap();
        store.set_stars("wood", 4).unwrap();

        // a fresh store sees the new rating
        let mut reopened = FolderStore::open(&dir).unwrap();
        let data = reopened.resolve("wood").unwrap().unwrap();
        assert_eq!(data.effective_stars(), 4);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_closed_store_has_no_folder() {
        let store = FolderStore::closed();
        assert!(store.current_folder().is_none());
        assert!(store.all_assets().is_empty());
    }
}
