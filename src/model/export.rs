//! The export document: a single JSON snapshot of everything persisted.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};

use super::{FiringProgram, FiringRecord, HardwareSet, ZoneOffsets};

/// A complete snapshot of the store plus an export timestamp.
///
/// Field names are snake_case; this is the canonical interchange contract.
/// Importing a document restores the four collections in order; `exported`
/// is metadata only and is dropped on import.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDocument {
    pub firings: Vec<FiringRecord>,
    pub zone_offsets: ZoneOffsets,
    pub hardware: HardwareSet,
    pub programs: Vec<FiringProgram>,

    /// When the export was produced (ISO-8601).
    pub exported: Timestamp,
}
