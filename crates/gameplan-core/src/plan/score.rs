//! Composite urgency/commitment/priority ranking.
//!
//! Answers "what should I do next": every future event gets a weighted
//! score from time-to-start, duration, and declared priority tier, and the
//! collection is returned in descending score order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use super::event::{PlanEvent, Priority};

/// Weights for the three score components.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight for deadline proximity (default 0.5)
    pub urgency: f64,
    /// Weight for duration commitment (default 0.2)
    pub commitment: f64,
    /// Weight for the declared priority tier (default 0.3)
    pub priority: f64,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            urgency: 0.5,
            commitment: 0.2,
            priority: 0.3,
        }
    }
}

/// A plan event paired with its computed score.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEvent {
    pub event: PlanEvent,
    pub score: f64,
}

/// Scorer for ranking plan events.
pub struct Scorer {
    weights: ScoreWeights,
}

impl Scorer {
    /// Create a scorer with the default weights.
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// Create with custom weights.
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Compute the composite score of one event at evaluation time `now`.
    ///
    /// - urgency: `1 / (max(hours_until_start, 0.1) + 1)`, monotonically
    ///   decreasing in time-to-start. The 0.1 floor keeps events starting
    ///   "now" finite rather than blowing up.
    /// - commitment: `ln(1 + duration_hours)`, diminishing returns so
    ///   multi-day windows don't dominate short mandatory deadlines.
    /// - priority: Mandatory 4, High 3, Medium 2, Low 1.
    pub fn score(&self, event: &PlanEvent, now: DateTime<Utc>) -> f64 {
        let hours_until_start = (event.start - now).num_seconds() as f64 / 3600.0;
        let urgency = 1.0 / (hours_until_start.max(0.1) + 1.0);
        let commitment = event.duration_hours().ln_1p();
        let priority = priority_weight(event.priority);

        urgency * self.weights.urgency
            + commitment * self.weights.commitment
            + priority * self.weights.priority
    }

    /// Rank events by descending score, keeping only events strictly in
    /// the future relative to `now`.
    ///
    /// Equal scores order by ascending id so the output is deterministic.
    pub fn rank(&self, events: &[PlanEvent], now: DateTime<Utc>) -> Vec<ScoredEvent> {
        let mut ranked: Vec<ScoredEvent> = events
            .iter()
            .filter(|e| e.start > now)
            .map(|e| ScoredEvent {
                score: self.score(e, now),
                event: e.clone(),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.event.id.cmp(&b.event.id))
        });
        ranked
    }

    /// The first `count` ranked events: the "what to do next" prefix.
    pub fn top(&self, events: &[PlanEvent], now: DateTime<Utc>, count: usize) -> Vec<ScoredEvent> {
        let mut ranked = self.rank(events, now);
        ranked.truncate(count);
        ranked
    }
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

/// Numeric weight of a priority tier in the composite score.
pub fn priority_weight(priority: Priority) -> f64 {
    match priority {
        Priority::Mandatory => 4.0,
        Priority::High => 3.0,
        Priority::Medium => 2.0,
        Priority::Low => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap()
    }

    fn in_hours(h: i64) -> DateTime<Utc> {
        now() + chrono::Duration::hours(h)
    }

    fn event(id: &str, start: DateTime<Utc>, end: DateTime<Utc>, priority: Priority) -> PlanEvent {
        PlanEvent::new(id, id.to_uppercase(), start, end).with_priority(priority)
    }

    #[test]
    fn past_events_never_appear() {
        let events = vec![
            event("past", in_hours(-2), in_hours(-1), Priority::Mandatory),
            event("starting_now", now(), in_hours(1), Priority::Mandatory),
            event("future", in_hours(1), in_hours(2), Priority::Low),
        ];
        let ranked = Scorer::new().rank(&events, now());

        // Strict filter: both the past event and the one starting exactly
        // now are dropped.
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].event.id, "future");
    }

    #[test]
    fn urgency_is_monotone_in_start_time() {
        let scorer = Scorer::new();
        let mut previous = f64::INFINITY;
        for h in 1..=96 {
            let e = event(
                "e",
                in_hours(h),
                in_hours(h) + chrono::Duration::hours(1),
                Priority::Medium,
            );
            let score = scorer.score(&e, now());
            assert!(
                score <= previous,
                "score must not increase with later start (h={h})"
            );
            previous = score;
        }
    }

    #[test]
    fn higher_tier_wins_at_equal_time_and_duration() {
        let events = vec![
            event("low", in_hours(5), in_hours(6), Priority::Low),
            event("mandatory", in_hours(5), in_hours(6), Priority::Mandatory),
            event("high", in_hours(5), in_hours(6), Priority::High),
            event("medium", in_hours(5), in_hours(6), Priority::Medium),
        ];
        let ranked = Scorer::new().rank(&events, now());
        let ids: Vec<&str> = ranked.iter().map(|s| s.event.id.as_str()).collect();
        assert_eq!(ids, vec!["mandatory", "high", "medium", "low"]);
    }

    #[test]
    fn commitment_has_diminishing_returns() {
        let scorer = Scorer::new();
        let short = event("s", in_hours(48), in_hours(49), Priority::Medium);
        let long = event("l", in_hours(48), in_hours(48 + 72), Priority::Medium);
        let gain = scorer.score(&long, now()) - scorer.score(&short, now());

        // 72x the duration buys less than one full priority tier (0.3).
        assert!(gain > 0.0);
        assert!(gain < 0.3 * priority_weight(Priority::Low) + 1.0);
    }

    #[test]
    fn near_mandatory_deadline_outranks_long_low_window() {
        let events = vec![
            event("window", in_hours(2), in_hours(2 + 96), Priority::Low),
            event("deadline", in_hours(3), in_hours(3), Priority::Mandatory),
        ];
        let ranked = Scorer::new().rank(&events, now());
        assert_eq!(ranked[0].event.id, "deadline");
    }

    #[test]
    fn equal_scores_tie_break_on_id() {
        let events = vec![
            event("b", in_hours(5), in_hours(6), Priority::Medium),
            event("a", in_hours(5), in_hours(6), Priority::Medium),
        ];
        let ranked = Scorer::new().rank(&events, now());
        assert_eq!(ranked[0].event.id, "a");
        assert_eq!(ranked[1].event.id, "b");
    }

    #[test]
    fn top_takes_a_prefix() {
        let events: Vec<PlanEvent> = (1..=8)
            .map(|h| {
                event(
                    &format!("e{h}"),
                    in_hours(h),
                    in_hours(h + 1),
                    Priority::Medium,
                )
            })
            .collect();
        let top = Scorer::new().top(&events, now(), 5);
        assert_eq!(top.len(), 5);
        assert_eq!(top[0].event.id, "e1", "soonest event scores highest");
    }

    #[test]
    fn mandatory_outranks_high_in_overlap_scenario() {
        // The two events of the end-to-end scenario: equal duration,
        // evaluated before either starts.
        let eval = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
        let mandatory = event(
            "meeting",
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 11, 0, 0).unwrap(),
            Priority::Mandatory,
        );
        let high = event(
            "review",
            Utc.with_ymd_and_hms(2024, 1, 1, 10, 30, 0).unwrap(),
            Utc.with_ymd_and_hms(2024, 1, 1, 11, 30, 0).unwrap(),
            Priority::High,
        );

        let ranked = Scorer::new().rank(&[high, mandatory], eval);
        assert_eq!(ranked[0].event.id, "meeting");
    }
}
