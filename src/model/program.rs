//! Firing programs: named presets kept as user reference data.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::FiringType;

/// A named firing preset. Independent reference data — a program has no
/// relationship to logged firings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiringProgram {
    pub id: Uuid,
    pub name: String,
    pub kind: FiringType,

    /// Peak temperature, °F.
    pub target_temp_f: u32,

    /// Ramp rate, °F per hour.
    pub ramp_rate_f_per_hr: u32,

    /// Hold at peak, minutes.
    pub hold_minutes: u32,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clay_body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub created_at: Timestamp,
}
