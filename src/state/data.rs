/// Shared data structures for the application state
///
/// These types represent the asset records that flow between the
/// folder-backed store and the UI layer. A record is either a stub
/// (listing-only, no metadata yet) or a fully loaded sidecar record.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Maximum star rating an asset can carry
pub const MAX_STARS: u8 = 6;

/// Classifies a record for filtering and selection purposes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// An ordinary asset (archive + preview pair with a sidecar file)
    Normal,
    /// A navigation pseudo-entry (e.g. a "textures" subfolder)
    SpecialFolder,
}

/// Full metadata for an asset, as stored in its `.asset` sidecar file
///
/// The sidecar is JSON written by the folder scanner. Fields may be
/// missing or null in older files, so everything except `name` defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AssetData {
    /// Asset name, doubles as the stable identifier within a folder
    pub name: String,
    /// Archive filename (relative to the asset's folder)
    #[serde(default)]
    pub archive: Option<String>,
    /// Preview image filename (relative to the asset's folder)
    #[serde(default)]
    pub preview: Option<String>,
    /// Archive size in megabytes
    #[serde(default)]
    pub size_mb: f64,
    /// Thumbnail marker; `None` until a thumbnail has been generated
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Star rating 0-6; tolerates numbers, numeric strings, null, or junk
    #[serde(default, deserialize_with = "deserialize_stars")]
    pub stars: Option<u8>,
    /// Optional label color (hex string)
    #[serde(default)]
    pub color: Option<String>,
    /// Free-form metadata bag, preserved as-is
    #[serde(default)]
    pub meta: serde_json::Value,
}

impl AssetData {
    /// The star rating used for filter decisions.
    /// Missing or unparsable values count as 0, never as an error.
    pub fn effective_stars(&self) -> u8 {
        self.stars.unwrap_or(0)
    }
}

/// A single entry in the current folder's asset list
///
/// Stubs come from the directory listing and are upgraded to `Full`
/// on demand by the store. Special folders are never stubs and never
/// carry a rating.
#[derive(Debug, Clone, PartialEq)]
pub enum AssetRecord {
    /// Listing-only entry: identity known, sidecar not read yet
    Stub { id: String },
    /// Fully loaded sidecar record
    Full(AssetData),
    /// Navigation pseudo-entry pointing at a subfolder
    SpecialFolder { id: String, path: PathBuf },
}

impl AssetRecord {
    /// Stable identifier of this record within its folder
    pub fn id(&self) -> &str {
        match self {
            AssetRecord::Stub { id } => id,
            AssetRecord::Full(data) => &data.name,
            AssetRecord::SpecialFolder { id, .. } => id,
        }
    }

    pub fn kind(&self) -> AssetKind {
        match self {
            AssetRecord::SpecialFolder { .. } => AssetKind::SpecialFolder,
            _ => AssetKind::Normal,
        }
    }

    pub fn is_special_folder(&self) -> bool {
        self.kind() == AssetKind::SpecialFolder
    }

    pub fn is_stub(&self) -> bool {
        matches!(self, AssetRecord::Stub { .. })
    }

    /// Star rating for filter decisions; stubs and special folders are 0
    pub fn effective_stars(&self) -> u8 {
        match self {
            AssetRecord::Full(data) => data.effective_stars(),
            _ => 0,
        }
    }
}

/// Coerce whatever the sidecar holds in `stars` into `Option<u8>`.
///
/// Old sidecars store null, numbers, or numeric strings ("3"); hand-edited
/// files sometimes hold junk like "N/A". Anything unusable becomes `None`
/// so the rating falls back to 0 downstream.
fn deserialize_stars<'de, D>(deserializer: D) -> Result<Option<u8>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(coerce_stars(&value))
}

fn coerce_stars(value: &serde_json::Value) -> Option<u8> {
    let parsed = match value {
        serde_json::Value::Number(n) => n.as_i64(),
        serde_json::Value::String(s) => s.trim().parse::<i64>().ok(),
        _ => None,
    };
    parsed.map(|n| n.clamp(0, MAX_STARS as i64) as u8)
}
