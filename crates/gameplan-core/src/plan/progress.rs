//! Weighted completion progress.

use super::event::PlanEvent;

/// Percentage of total task weight that is completed, in `[0, 100]`.
///
/// A collection whose weights sum to zero reports 0, not an error.
/// Read-only: never mutates its input.
pub fn weekly_progress(tasks: &[PlanEvent]) -> f64 {
    let total: u32 = tasks.iter().map(|t| t.weight).sum();
    if total == 0 {
        return 0.0;
    }
    let completed: u32 = tasks
        .iter()
        .filter(|t| t.completed)
        .map(|t| t.weight)
        .sum();
    f64::from(completed) / f64::from(total) * 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn task(id: &str, weight: u32, completed: bool) -> PlanEvent {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 9, 0, 0).unwrap();
        PlanEvent::new(id, id.to_uppercase(), start, start)
            .with_weight(weight)
            .with_completed(completed)
    }

    #[test]
    fn empty_collection_is_zero() {
        assert_eq!(weekly_progress(&[]), 0.0);
    }

    #[test]
    fn all_zero_weights_is_zero_not_nan() {
        let tasks = vec![task("a", 0, true), task("b", 0, false)];
        let progress = weekly_progress(&tasks);
        assert_eq!(progress, 0.0);
        assert!(!progress.is_nan());
    }

    #[test]
    fn weighted_completion() {
        let tasks = vec![
            task("a", 30, true),
            task("b", 50, false),
            task("c", 20, true),
        ];
        let progress = weekly_progress(&tasks);
        assert!((progress - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn zero_weight_tasks_are_tracked_but_not_scored() {
        let tasks = vec![task("a", 40, true), task("b", 0, false)];
        assert!((weekly_progress(&tasks) - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn result_is_bounded() {
        let tasks = vec![task("a", 100, true), task("b", 100, true)];
        assert!((weekly_progress(&tasks) - 100.0).abs() < f64::EPSILON);
    }
}
