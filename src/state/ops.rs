/// File operations on selected assets
///
/// An asset on disk is a triple: the `.asset` sidecar, the archive, and
/// the preview image, plus an optional cached thumbnail under `.cache/`.
/// Move and delete work through the whole batch; a failure on one asset
/// is reported and the rest continue.

use std::fs;
use std::path::{Path, PathBuf};

use super::data::AssetData;

#[derive(thiserror::Error, Debug)]
pub enum OpsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("destination is the source folder")]
    SameFolder,
}

/// Outcome of a batch operation
#[derive(Debug, Clone, Copy, Default)]
pub struct OpReport {
    pub succeeded: usize,
    pub failed: usize,
}

/// All on-disk files belonging to one asset, existing ones only
fn asset_files(folder: &Path, asset: &AssetData) -> Vec<PathBuf> {
    let mut files = vec![folder.join(format!("{}.asset", asset.name))];
    if let Some(archive) = &asset.archive {
        files.push(folder.join(archive));
    }
    if let Some(preview) = &asset.preview {
        files.push(folder.join(preview));
    }
    files.push(folder.join(".cache").join(format!("{}.thumb", asset.name)));
    files.retain(|p| p.exists());
    files
}

fn move_one(folder: &Path, asset: &AssetData, destination: &Path) -> Result<(), OpsError> {
    if destination == folder {
        return Err(OpsError::SameFolder);
    }
    for file in asset_files(folder, asset) {
        // file_name is always present here: asset_files only builds joined paths
        let target = destination.join(file.file_name().unwrap_or_default());
        if fs::rename(&file, &target).is_err() {
            // rename fails across filesystems; fall back to copy + remove
            fs::copy(&file, &target)?;
            fs::remove_file(&file)?;
        }
    }
    Ok(())
}

fn delete_one(folder: &Path, asset: &AssetData) -> Result<(), OpsError> {
    for file in asset_files(folder, asset) {
        fs::remove_file(&file)?;
    }
    Ok(())
}

/// Move each asset's files into `destination`
pub fn move_assets(folder: &Path, assets: &[AssetData], destination: &Path) -> OpReport {
    let mut report = OpReport::default();
    for asset in assets {
        match move_one(folder, asset, destination) {
            Ok(()) => report.succeeded += 1,
            Err(err) => {
                eprintln!("⚠️  Error moving '{}': {}", asset.name, err);
                report.failed += 1;
            }
        }
    }
    println!(
        "📦 Moved {} assets to {} ({} failed)",
        report.succeeded,
        destination.display(),
        report.failed
    );
    report
}

/// Delete each asset's files from disk
pub fn delete_assets(folder: &Path, assets: &[AssetData]) -> OpReport {
    let mut report = OpReport::default();
    for asset in assets {
        match delete_one(folder, asset) {
            Ok(()) => report.succeeded += 1,
            Err(err) => {
                eprintln!("⚠️  Error deleting '{}': {}", asset.name, err);
                report.failed += 1;
            }
        }
    }
    println!(
        "🗑️  Deleted {} assets ({} failed)",
        report.succeeded, report.failed
    );
    report
}
