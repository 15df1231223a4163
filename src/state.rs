//! Application state and pure transitions.
//!
//! One value holds everything kilnlog persists. Transitions consume the
//! state and return the updated value; nothing here touches disk. The CLI
//! loads the store, applies exactly one transition, and saves the result
//! as a whole — the persistence boundary stays outside this module.

use jiff::{Timestamp, civil::Date};

use crate::model::{
    ComponentKind, ExportDocument, FiringProgram, FiringRecord, HardwareSet, Zone, ZoneOffsets,
};

/// The four persisted collections of the store.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KilnState {
    pub firings: Vec<FiringRecord>,
    pub zone_offsets: ZoneOffsets,
    pub hardware: HardwareSet,
    pub programs: Vec<FiringProgram>,
}

impl KilnState {
    /// Appends a firing and advances every component's wear count in
    /// lockstep. Components wear with firings logged, not kiln hours.
    #[must_use]
    pub fn log_firing(mut self, record: FiringRecord) -> Self {
        self.firings.push(record);
        self.hardware = self.hardware.after_firing();
        self
    }

    /// Replaces one zone's offset. Past records keep their snapshots.
    #[must_use]
    pub fn set_offset(mut self, zone: Zone, value: i32) -> Self {
        self.zone_offsets = self.zone_offsets.with_zone(zone, value);
        self
    }

    /// Adopts a full offset set, typically an advisor suggestion.
    #[must_use]
    pub fn apply_suggestions(mut self, suggested: ZoneOffsets) -> Self {
        self.zone_offsets = suggested;
        self
    }

    #[must_use]
    pub fn add_program(mut self, program: FiringProgram) -> Self {
        self.programs.push(program);
        self
    }

    /// Applies field updates to one hardware component; `None` fields are
    /// left alone.
    #[must_use]
    pub fn update_component(mut self, kind: ComponentKind, update: ComponentUpdate) -> Self {
        let component = self.hardware.get_mut(kind);
        if let Some(date) = update.installed {
            component.installed = Some(date);
        }
        if let Some(count) = update.firing_count {
            component.firing_count = count;
        }
        if let Some(max_life) = update.max_life {
            component.max_life = max_life;
        }
        self
    }

    /// Snapshots the store as an export document.
    pub fn to_export(&self, exported: Timestamp) -> ExportDocument {
        ExportDocument {
            firings: self.firings.clone(),
            zone_offsets: self.zone_offsets,
            hardware: self.hardware,
            programs: self.programs.clone(),
            exported,
        }
    }

    /// Restores the store from an export document. The export timestamp is
    /// metadata and is dropped.
    pub fn from_export(doc: ExportDocument) -> Self {
        Self {
            firings: doc.firings,
            zone_offsets: doc.zone_offsets,
            hardware: doc.hardware,
            programs: doc.programs,
        }
    }
}

/// Partial update for a hardware component.
#[derive(Debug, Clone, Copy, Default)]
pub struct ComponentUpdate {
    pub installed: Option<Date>,
    pub firing_count: Option<u32>,
    pub max_life: Option<u32>,
}
