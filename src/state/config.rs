/// Application configuration
///
/// Stored as JSON in the user's config directory:
/// - Linux: ~/.config/asset-browser/config.json
/// - macOS: ~/Library/Application Support/asset-browser/config.json
/// - Windows: %APPDATA%\asset-browser\config.json
///
/// A missing or corrupt file yields the defaults; the browser must
/// always start.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// A pinned work folder shown as a quick-access button
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkFolder {
    pub name: String,
    pub path: PathBuf,
    #[serde(default)]
    pub color: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BrowserConfig {
    /// Tile width in pixels
    pub thumbnail_size: u16,
    /// Up to nine pinned folders
    pub work_folders: Vec<WorkFolder>,
}

impl Default for BrowserConfig {
    fn default() -> Self {
        BrowserConfig {
            thumbnail_size: 256,
            work_folders: Vec::new(),
        }
    }
}

impl BrowserConfig {
    fn config_path() -> Option<PathBuf> {
        let mut path = dirs::config_dir().or_else(dirs::home_dir)?;
        path.push("asset-browser");
        path.push("config.json");
        Some(path)
    }

    /// Load the config, falling back to defaults on any failure
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            eprintln!("⚠️  Could not determine config directory, using defaults");
            return Self::default();
        };
        match fs::read_to_string(&path) {
            Ok(raw) => match serde_json::from_str(&raw) {
                Ok(config) => {
                    println!("📁 Config loaded from {}", path.display());
                    config
                }
                Err(err) => {
                    eprintln!("⚠️  Corrupt config ({}), using defaults", err);
                    Self::default()
                }
            },
            // first run: no file yet
            Err(_) => Self::default(),
        }
    }

    /// Persist the config, creating the directory if needed
    pub fn save(&self) -> Result<(), std::io::Error> {
        let Some(path) = Self::config_path() else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(self)?;
        fs::write(&path, raw)?;
        Ok(())
    }

    /// Work folders that can actually be opened (path exists)
    pub fn usable_work_folders(&self) -> Vec<&WorkFolder> {
        self.work_folders
            .iter()
            .filter(|f| f.path.exists())
            .take(9)
            .collect()
    }
}
