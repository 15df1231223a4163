//! Output formatting for CLI display.

use crate::advisor::{ComponentHealth, HealthStatus};
use crate::model::{
    ComponentKind, FiringProgram, FiringRecord, HardwareComponent, Zone, ZoneOffsets, ZoneResults,
};

/// Compact offset triple, e.g. `T:18° M:18° B:22°`.
pub(super) fn format_offsets(offsets: ZoneOffsets) -> String {
    format!(
        "T:{}° M:{}° B:{}°",
        offsets.top, offsets.middle, offsets.bottom
    )
}

/// One-line summary of a firing for history listings.
pub(super) fn format_firing(firing: &FiringRecord) -> String {
    let id = firing.id.to_string();
    let short_id = &id[..8];
    let date = firing.logged_at.strftime("%Y-%m-%d");
    let mut line = format!(
        "{short_id}  {date}  [{}]  target cone {}  {}  ({})",
        firing.firing_type.name(),
        firing.target_cone,
        firing.overall_result,
        format_offsets(firing.offsets_at_firing),
    );
    if let Some(clay) = &firing.clay_body {
        line.push_str(&format!("  [{clay}]"));
    }
    line
}

/// Zone-specific results when any are present.
pub(super) fn format_zone_results(results: &ZoneResults) -> Option<String> {
    if results.is_empty() {
        return None;
    }
    let parts: Vec<String> = Zone::ALL
        .into_iter()
        .filter_map(|zone| results.get(zone).map(|text| format!("{}: {text}", zone.name())))
        .collect();
    Some(format!("zones — {}", parts.join(", ")))
}

/// Current vs. suggested offset for one zone.
pub(super) fn format_suggestion(zone: Zone, current: i32, suggested: i32) -> String {
    if suggested == current {
        format!("{:<7} {current}°F (no change)", zone.name())
    } else {
        format!("{:<7} {current}°F → {suggested}°F", zone.name())
    }
}

/// Wear line for one component.
pub(super) fn format_component(
    kind: ComponentKind,
    component: &HardwareComponent,
    health: ComponentHealth,
) -> String {
    let installed = component
        .installed
        .map_or_else(|| "install date unset".to_string(), |d| format!("installed {d}"));
    format!(
        "{:<14} {}/{} firings  {}% used  {}  ({installed})",
        kind.name(),
        component.firing_count,
        component.max_life,
        health.usage_percent.round(),
        health.status.label(),
    )
}

/// The maintenance alert for a component, when its wear warrants one.
pub(super) fn maintenance_note(status: HealthStatus) -> Option<&'static str> {
    match status {
        HealthStatus::Excellent => None,
        HealthStatus::Monitor => Some("monitor closely"),
        HealthStatus::ReplaceSoon => Some("replacement recommended soon"),
    }
}

/// One-line summary of a saved program.
pub(super) fn format_program(program: &FiringProgram) -> String {
    let id = program.id.to_string();
    let short_id = &id[..8];
    let mut line = format!(
        "{short_id}  {}  [{}]  {}°F  {}°F/hr  hold {} min",
        program.name,
        program.kind.name(),
        program.target_temp_f,
        program.ramp_rate_f_per_hr,
        program.hold_minutes,
    );
    if let Some(clay) = &program.clay_body {
        line.push_str(&format!("  [{clay}]"));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn offsets_format_as_compact_triple() {
        let offsets = ZoneOffsets {
            top: 18,
            middle: 20,
            bottom: 22,
        };
        assert_eq!(format_offsets(offsets), "T:18° M:20° B:22°");
    }

    #[test]
    fn suggestion_shows_change_or_no_change() {
        assert_eq!(
            format_suggestion(Zone::Top, 18, 30),
            "top     18°F → 30°F"
        );
        assert_eq!(
            format_suggestion(Zone::Middle, 18, 18),
            "middle  18°F (no change)"
        );
    }

    #[test]
    fn zone_results_skip_blank_zones() {
        let results = ZoneResults {
            top: Some("hot cone 6".to_string()),
            middle: Some("  ".to_string()),
            bottom: None,
        };
        assert_eq!(
            format_zone_results(&results).unwrap(),
            "zones — top: hot cone 6"
        );
        assert_eq!(format_zone_results(&ZoneResults::default()), None);
    }

    #[test]
    fn component_line_includes_usage_and_status() {
        let component = HardwareComponent {
            installed: None,
            firing_count: 270,
            max_life: 300,
        };
        let health = crate::advisor::classify_health(&component).unwrap();
        let line = format_component(ComponentKind::Elements, &component, health);
        assert!(line.contains("270/300 firings"));
        assert!(line.contains("90% used"));
        assert!(line.contains("Replace Soon"));
    }

    #[test]
    fn maintenance_notes_follow_health_bands() {
        assert_eq!(maintenance_note(HealthStatus::Excellent), None);
        assert_eq!(
            maintenance_note(HealthStatus::Monitor),
            Some("monitor closely")
        );
        assert_eq!(
            maintenance_note(HealthStatus::ReplaceSoon),
            Some("replacement recommended soon")
        );
    }
}
