//! Core data model for kilnlog.
//!
//! The four persisted collections — firing history, zone offsets, hardware
//! wear, and firing programs — plus the static cone reference table and the
//! export document that snapshots all of them.

mod cone;
mod export;
mod firing;
mod hardware;
mod program;
mod zone;

pub use cone::Cone;
pub use export::ExportDocument;
pub use firing::{FiringRecord, FiringType, LoadDensity, ZoneResults};
pub use hardware::{ComponentKind, HardwareComponent, HardwareSet};
pub use program::FiringProgram;
pub use zone::{Zone, ZoneOffsets};
