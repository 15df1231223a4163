//! Derived display statistics over the firing history.
//!
//! Everything here is recomputed from state on demand and rendered by the
//! CLI; nothing is stored.

use crate::model::{FiringRecord, FiringType};

/// Fraction of firings that read as successful, as a rounded percentage.
///
/// A firing counts as a success when its overall result mentions
/// "perfect" or "good", or names its own target cone without reading hot.
/// An empty history reads as 0%.
pub fn success_rate(history: &[FiringRecord]) -> u32 {
    if history.is_empty() {
        return 0;
    }
    let successes = history.iter().filter(|f| is_success(f)).count();
    percentage(successes, history.len())
}

fn is_success(firing: &FiringRecord) -> bool {
    let result = firing.overall_result.to_lowercase();
    result.contains("perfect")
        || result.contains("good")
        || (result.contains("cone")
            && result.contains(firing.target_cone.label())
            && !result.contains("hot"))
}

/// Rounded mean of the middle-zone offset snapshots, or `None` with no
/// history.
pub fn average_middle_offset(history: &[FiringRecord]) -> Option<i32> {
    if history.is_empty() {
        return None;
    }
    let total: i32 = history.iter().map(|f| f.offsets_at_firing.middle).sum();
    let count = i32::try_from(history.len()).ok()?;
    Some((f64::from(total) / f64::from(count)).round() as i32)
}

/// The most frequently used clay body, or `None` when no firing names one.
/// Ties go to the clay seen first in the history.
pub fn top_clay_body(history: &[FiringRecord]) -> Option<&str> {
    let mut counts: Vec<(&str, usize)> = Vec::new();
    for firing in history {
        let Some(clay) = firing.clay_body.as_deref().filter(|c| !c.is_empty()) else {
            continue;
        };
        match counts.iter_mut().find(|(name, _)| *name == clay) {
            Some((_, count)) => *count += 1,
            None => counts.push((clay, 1)),
        }
    }

    let mut best: Option<(&str, usize)> = None;
    for (name, count) in counts {
        if best.is_none_or(|(_, best_count)| count > best_count) {
            best = Some((name, count));
        }
    }
    best.map(|(name, _)| name)
}

/// Count and rounded percentage per firing type, in declaration order.
pub fn firing_type_distribution(history: &[FiringRecord]) -> Vec<(FiringType, usize, u32)> {
    FiringType::ALL
        .into_iter()
        .map(|kind| {
            let count = history.iter().filter(|f| f.firing_type == kind).count();
            let percent = if history.is_empty() {
                0
            } else {
                percentage(count, history.len())
            };
            (kind, count, percent)
        })
        .collect()
}

fn percentage(part: usize, whole: usize) -> u32 {
    (part as f64 / whole as f64 * 100.0).round() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::Timestamp;
    use uuid::Uuid;

    use crate::model::{Cone, LoadDensity, ZoneOffsets, ZoneResults};

    fn firing(target: Cone, overall: &str) -> FiringRecord {
        FiringRecord {
            id: Uuid::new_v4(),
            target_cone: target,
            overall_result: overall.to_string(),
            zone_results: ZoneResults::default(),
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
    fn empty_history_reads_as_zero() {
        assert_eq!(success_rate(&[]), 0);
        assert_eq!(average_middle_offset(&[]), None);
        assert_eq!(top_clay_body(&[]), None);
    }

    #[test]
    fn perfect_and_good_count_as_successes() {
        let history = vec![
            firing(Cone::C6, "Perfect cone 6"),
            firing(Cone::C6, "good cone 6"),
        ];
        assert_eq!(success_rate(&history), 100);
    }

    #[test]
    fn naming_the_target_cone_counts_unless_hot() {
        let history = vec![
            firing(Cone::C6, "cone 6 even throughout"),
            firing(Cone::C6, "hot cone 6"),
        ];
        // The hot firing names the target but still fails.
        assert_eq!(success_rate(&history), 50);
    }

    #[test]
    fn naming_a_different_cone_is_a_failure() {
        let history = vec![firing(Cone::C6, "cone 7")];
        assert_eq!(success_rate(&history), 0);
    }

    #[test]
    fn rate_rounds_to_nearest_percent() {
        let history = vec![
            firing(Cone::C6, "perfect cone 6"),
            firing(Cone::C6, "cone 7"),
            firing(Cone::C6, "cone 7"),
        ];
        // 1/3 rounds to 33.
        assert_eq!(success_rate(&history), 33);
    }

    #[test]
    fn average_middle_offset_rounds() {
        let mut a = firing(Cone::C6, "perfect cone 6");
        a.offsets_at_firing = ZoneOffsets {
            top: 18,
            middle: 20,
            bottom: 18,
        };
        let mut b = firing(Cone::C6, "perfect cone 6");
        b.offsets_at_firing = ZoneOffsets {
            top: 18,
            middle: 25,
            bottom: 18,
        };
        // (20 + 25) / 2 = 22.5, rounds to 23.
        assert_eq!(average_middle_offset(&[a, b]), Some(23));
    }

    #[test]
    fn top_clay_body_is_the_most_frequent() {
        let mut history: Vec<FiringRecord> = Vec::new();
        for clay in ["Porcelain", "Buff Stoneware", "Porcelain"] {
            let mut record = firing(Cone::C6, "perfect cone 6");
            record.clay_body = Some(clay.to_string());
            history.push(record);
        }
        history.push(firing(Cone::C6, "perfect cone 6"));
        assert_eq!(top_clay_body(&history), Some("Porcelain"));
    }

    #[test]
    fn top_clay_body_ties_go_to_first_seen() {
        let mut history: Vec<FiringRecord> = Vec::new();
        for clay in ["Earthenware", "Porcelain"] {
            let mut record = firing(Cone::C6, "perfect cone 6");
            record.clay_body = Some(clay.to_string());
            history.push(record);
        }
        assert_eq!(top_clay_body(&history), Some("Earthenware"));
    }

    #[test]
    fn distribution_covers_all_types() {
        let mut history = vec![
            firing(Cone::C6, "perfect cone 6"),
            firing(Cone::C6, "perfect cone 6"),
        ];
        history[1].firing_type = FiringType::Bisque;

        let distribution = firing_type_distribution(&history);
        assert_eq!(distribution.len(), 3);
        assert_eq!(distribution[0], (FiringType::Bisque, 1, 50));
        assert_eq!(distribution[1], (FiringType::Glaze, 1, 50));
        assert_eq!(distribution[2], (FiringType::Test, 0, 0));
    }
}
