//! Offset suggestions and hardware health classification.
//!
//! The advisor answers two questions from in-memory state: what should the
//! next firing's zone offsets be, and how worn is each tracked component.
//! Both are pure functions — no I/O, no mutation of inputs.

use crate::model::{FiringRecord, HardwareComponent, Zone, ZoneOffsets};

/// How many of the most recent firings feed a suggestion.
pub const RECENT_WINDOW: usize = 5;

/// Adjustment for a result described as running hot or soft, in °F.
const HOT_ADJUSTMENT_F: i32 = 12;

/// Approximate temperature spacing between adjacent cones, in °F.
const DEGREES_PER_CONE_F: i32 = 18;

/// Offsets are kept within this range.
const OFFSET_MIN: i32 = 0;
const OFFSET_MAX: i32 = 100;

/// Usage below this is excellent; between this and the replace band, worth
/// monitoring.
const MONITOR_PERCENT: f64 = 60.0;
const REPLACE_PERCENT: f64 = 85.0;

#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    #[error("rated life is 0 firings; set a nonzero max life before classifying wear")]
    ZeroRatedLife,
}

/// Suggests the next offset for every zone from recent firing results.
///
/// Returns `None` when there is no history at all — no data, no advice.
/// Otherwise each zone is computed independently over the last
/// [`RECENT_WINDOW`] records; a zone with no usable signal echoes its
/// current offset.
pub fn suggest_offsets(history: &[FiringRecord], current: ZoneOffsets) -> Option<ZoneOffsets> {
    if history.is_empty() {
        return None;
    }

    let recent = &history[history.len().saturating_sub(RECENT_WINDOW)..];
    let mut suggested = current;
    for zone in Zone::ALL {
        suggested = suggested.with_zone(zone, suggest_zone(recent, zone, current.get(zone)));
    }
    Some(suggested)
}

fn suggest_zone(recent: &[FiringRecord], zone: Zone, current: i32) -> i32 {
    let mut total = 0_i32;
    let mut valid = 0_i32;

    for firing in recent {
        let result = firing.resolved_result(zone);

        // A result that never mentions a cone carries no usable signal.
        if !result.contains("cone") {
            continue;
        }

        if result.contains("hot") || result.contains("soft") {
            total += HOT_ADJUSTMENT_F;
            valid += 1;
        } else if result.contains("perfect") || result.contains("good") {
            valid += 1;
        } else if let Some(actual) = reported_cone(&result) {
            let target = firing.target_cone.ordinal_value();
            // An exact numeric match without "perfect"/"good" wording
            // contributes nothing, not even to the valid count.
            if actual != target {
                total += (actual - target) * DEGREES_PER_CONE_F;
                valid += 1;
            }
        }
    }

    if valid == 0 {
        current
    } else {
        let adjustment = (f64::from(total) / f64::from(valid)).round() as i32;
        (current + adjustment).clamp(OFFSET_MIN, OFFSET_MAX)
    }
}

/// Parses the first "cone <number>" in the text: digits directly after
/// "cone" or separated only by whitespace.
fn reported_cone(text: &str) -> Option<i32> {
    let mut rest = text;
    while let Some(pos) = rest.find("cone") {
        rest = &rest[pos + "cone".len()..];
        let after = rest.trim_start();
        let end = after
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(after.len());
        if end > 0 {
            return after[..end].parse().ok();
        }
    }
    None
}

/// Wear classification for one hardware component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentHealth {
    /// Percentage of rated life consumed. Not clamped — a component past
    /// its rated life reads over 100.
    pub usage_percent: f64,
    pub status: HealthStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HealthStatus {
    Excellent,
    Monitor,
    ReplaceSoon,
}

impl HealthStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Monitor => "Monitor",
            Self::ReplaceSoon => "Replace Soon",
        }
    }
}

/// Classifies a component's wear from its firing count and rated life.
///
/// A zero rated life is a configuration error, rejected rather than
/// propagated as a NaN percentage.
pub fn classify_health(component: &HardwareComponent) -> Result<ComponentHealth, AdvisorError> {
    if component.max_life == 0 {
        return Err(AdvisorError::ZeroRatedLife);
    }

    let usage_percent = f64::from(component.firing_count) / f64::from(component.max_life) * 100.0;
    let status = if usage_percent < MONITOR_PERCENT {
        HealthStatus::Excellent
    } else if usage_percent < REPLACE_PERCENT {
        HealthStatus::Monitor
    } else {
        HealthStatus::ReplaceSoon
    };

    Ok(ComponentHealth {
        usage_percent,
        status,
    })
}
