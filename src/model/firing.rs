//! Firing records: the append-only history of logged kiln runs.

use jiff::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Cone, Zone, ZoneOffsets};

/// One logged kiln run.
///
/// Append-only: a record is never mutated after creation. In particular
/// `offsets_at_firing` is a snapshot — changing the current offsets later
/// does not rewrite history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FiringRecord {
    pub id: Uuid,

    /// The intended firing endpoint.
    pub target_cone: Cone,

    /// What the witness cone or controller showed, e.g. "hot cone 6".
    /// The sole signal for a zone with no zone-specific result.
    pub overall_result: String,

    /// Optional zone-specific results, same vocabulary as `overall_result`.
    #[serde(default)]
    pub zone_results: ZoneResults,

    /// The offsets in effect when this firing ran.
    pub offsets_at_firing: ZoneOffsets,

    pub firing_type: FiringType,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub clay_body: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub glaze: Option<String>,

    pub load_density: LoadDensity,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    pub logged_at: Timestamp,
}

impl FiringRecord {
    /// The text evaluated for a zone: the zone-specific result when
    /// present, else the overall result. Lower-cased for matching.
    pub fn resolved_result(&self, zone: Zone) -> String {
        match self.zone_results.get(zone) {
            Some(text) => text.to_lowercase(),
            None => self.overall_result.to_lowercase(),
        }
    }
}

/// Optional per-zone result text. Blank entries count as absent and fall
/// back to the overall result.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneResults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub middle: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
}

impl ZoneResults {
    /// The trimmed result for a zone, or `None` when blank.
    pub fn get(&self, zone: Zone) -> Option<&str> {
        let text = match zone {
            Zone::Top => &self.top,
            Zone::Middle => &self.middle,
            Zone::Bottom => &self.bottom,
        };
        text.as_deref().map(str::trim).filter(|t| !t.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        Zone::ALL.into_iter().all(|zone| self.get(zone).is_none())
    }
}

/// What kind of firing this was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FiringType {
    Bisque,
    #[default]
    Glaze,
    Test,
}

impl FiringType {
    pub const ALL: [Self; 3] = [Self::Bisque, Self::Glaze, Self::Test];

    pub fn name(self) -> &'static str {
        match self {
            Self::Bisque => "bisque",
            Self::Glaze => "glaze",
            Self::Test => "test",
        }
    }
}

/// How full the kiln was for this firing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LoadDensity {
    #[default]
    Full,
    Partial,
    Test,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(overall: &str, zone_results: ZoneResults) -> FiringRecord {
        FiringRecord {
            id: Uuid::new_v4(),
            target_cone: Cone::C6,
            overall_result: overall.to_string(),
            zone_results,
            offsets_at_firing: ZoneOffsets::default(),
            firing_type: FiringType::Glaze,
            clay_body: None,
            glaze: None,
            load_density: LoadDensity::Full,
            notes: None,
            logged_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn resolved_result_prefers_zone_text() {
        let firing = record(
            "Perfect Cone 6",
            ZoneResults {
                top: Some("Hot Cone 6".to_string()),
                ..ZoneResults::default()
            },
        );
        assert_eq!(firing.resolved_result(Zone::Top), "hot cone 6");
        assert_eq!(firing.resolved_result(Zone::Middle), "perfect cone 6");
    }

    #[test]
    fn blank_zone_text_falls_back_to_overall() {
        let firing = record(
            "cone 7",
            ZoneResults {
                top: Some("   ".to_string()),
                ..ZoneResults::default()
            },
        );
        assert_eq!(firing.resolved_result(Zone::Top), "cone 7");
    }

    #[test]
    fn zone_results_is_empty_ignores_whitespace() {
        let results = ZoneResults {
            middle: Some(" ".to_string()),
            ..ZoneResults::default()
        };
        assert!(results.is_empty());
    }

    #[test]
    fn record_round_trips_through_json() {
        let firing = record(
            "perfect cone 6",
            ZoneResults {
                bottom: Some("good cone 6".to_string()),
                ..ZoneResults::default()
            },
        );
        let json = serde_json::to_string(&firing).unwrap();
        let back: FiringRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, firing);
    }
}
