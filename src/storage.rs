//! Local persistence for the kiln store.
//!
//! Four JSON files under the storage root, one per persisted collection:
//!
//! ```text
//! <root>/
//!   firings.json       # Append-only firing history
//!   zone_offsets.json  # Current per-zone offsets
//!   hardware.json      # Wear counters for tracked components
//!   programs.json      # Saved firing programs
//! ```
//!
//! Every save rewrites each file as a whole value — no partial updates,
//! no migrations, last write wins.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use serde::{Serialize, de::DeserializeOwned};

use crate::model::ExportDocument;
use crate::state::KilnState;

/// Errors that can occur during storage operations.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = core::result::Result<T, StorageError>;

const FIRINGS_FILE: &str = "firings.json";
const OFFSETS_FILE: &str = "zone_offsets.json";
const HARDWARE_FILE: &str = "hardware.json";
const PROGRAMS_FILE: &str = "programs.json";

/// Local file-based storage for the kiln store.
pub struct Storage {
    root: PathBuf,
}

impl Storage {
    /// Creates a new storage instance rooted at the given directory.
    ///
    /// The directory is created if it doesn't exist.
    pub fn new(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Returns the default storage root: `~/.kilnlog/`.
    pub fn default_root() -> Option<PathBuf> {
        dirs::home_dir().map(|h| h.join(".kilnlog"))
    }

    /// Loads the full store. Missing files load as defaults, so a fresh
    /// root yields an empty history with stock offsets and hardware.
    pub fn load(&self) -> Result<KilnState> {
        Ok(KilnState {
            firings: self.read_or_default(FIRINGS_FILE)?,
            zone_offsets: self.read_or_default(OFFSETS_FILE)?,
            hardware: self.read_or_default(HARDWARE_FILE)?,
            programs: self.read_or_default(PROGRAMS_FILE)?,
        })
    }

    /// Writes the full store, overwriting every file.
    pub fn save(&self, state: &KilnState) -> Result<()> {
        self.write(FIRINGS_FILE, &state.firings)?;
        self.write(OFFSETS_FILE, &state.zone_offsets)?;
        self.write(HARDWARE_FILE, &state.hardware)?;
        self.write(PROGRAMS_FILE, &state.programs)?;
        Ok(())
    }

    fn read_or_default<T: DeserializeOwned + Default>(&self, name: &str) -> Result<T> {
        let path = self.root.join(name);
        if !path.exists() {
            return Ok(T::default());
        }
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn write<T: Serialize>(&self, name: &str, value: &T) -> Result<()> {
        let json = serde_json::to_string_pretty(value)?;
        fs::write(self.root.join(name), json)?;
        Ok(())
    }

    // ── Export / import ──

    /// Writes an export document to the given path.
    pub fn write_export(path: &Path, doc: &ExportDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(path, json)?;
        Ok(())
    }

    /// Reads an export document back from disk.
    pub fn read_export(path: &Path) -> Result<ExportDocument> {
        let json = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&json)?)
    }
}
