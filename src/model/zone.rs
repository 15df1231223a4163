//! Kiln zones and the per-zone offset set.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A heating zone of the kiln.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Zone {
    Top,
    Middle,
    Bottom,
}

impl Zone {
    /// Every zone, top first.
    pub const ALL: [Self; 3] = [Self::Top, Self::Middle, Self::Bottom];

    pub fn name(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Middle => "middle",
            Self::Bottom => "bottom",
        }
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Zone {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "top" => Ok(Self::Top),
            "middle" => Ok(Self::Middle),
            "bottom" => Ok(Self::Bottom),
            other => Err(format!("unknown zone '{other}' (expected top, middle, or bottom)")),
        }
    }
}

/// Current per-zone temperature corrections in °F, each within 0..=100.
///
/// Mutated freely by the user; past firing records carry their own
/// snapshot and are never rewritten.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneOffsets {
    pub top: i32,
    pub middle: i32,
    pub bottom: i32,
}

impl Default for ZoneOffsets {
    /// 18°F per zone, the common starting correction.
    fn default() -> Self {
        Self {
            top: 18,
            middle: 18,
            bottom: 18,
        }
    }
}

impl ZoneOffsets {
    pub fn get(self, zone: Zone) -> i32 {
        match zone {
            Zone::Top => self.top,
            Zone::Middle => self.middle,
            Zone::Bottom => self.bottom,
        }
    }

    /// Returns a copy with one zone's offset replaced.
    #[must_use]
    pub fn with_zone(mut self, zone: Zone, value: i32) -> Self {
        match zone {
            Zone::Top => self.top = value,
            Zone::Middle => self.middle = value,
            Zone::Bottom => self.bottom = value,
        }
        self
    }
}
