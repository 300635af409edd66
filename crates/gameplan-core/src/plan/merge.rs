//! Conflict-aware schedule merging.
//!
//! Combines event collections from heterogeneous sources (stored schedule,
//! extracted tasks, the organization's recurring deadlines) into one
//! timeline sorted by start time, and flags overlapping pairs where at
//! least one side is `Mandatory`.

use chrono::{DateTime, Utc};

use super::event::{PlanEvent, Priority};
use crate::deadlines::DeadlineCalendar;

/// Merges event collections with the organization's deadline calendar.
pub struct Merger {
    calendar: DeadlineCalendar,
}

impl Merger {
    /// Create a merger backed by the default organization calendar.
    pub fn new() -> Self {
        Self {
            calendar: DeadlineCalendar::default(),
        }
    }

    /// Create a merger backed by a specific calendar.
    pub fn with_calendar(calendar: DeadlineCalendar) -> Self {
        Self { calendar }
    }

    /// Merge event collections with a fresh materialization of the
    /// organization calendar for `now`.
    ///
    /// The calendar output is regenerated on every call and never cached.
    /// Result is sorted ascending by start (stable on ties) with
    /// `is_conflict` recomputed from scratch.
    pub fn merge(
        &self,
        collections: Vec<Vec<PlanEvent>>,
        now: DateTime<Utc>,
    ) -> Vec<PlanEvent> {
        let mut events: Vec<PlanEvent> = collections.into_iter().flatten().collect();
        events.extend(self.calendar.upcoming(now));
        merge_collections(vec![events])
    }
}

impl Default for Merger {
    fn default() -> Self {
        Self::new()
    }
}

/// Merge event collections without an organization calendar.
///
/// Concatenates in the order given, sorts ascending by start time
/// (stable, so equal timestamps keep their concatenation order), and
/// recomputes conflict flags. Empty input yields an empty result.
pub fn merge_collections(collections: Vec<Vec<PlanEvent>>) -> Vec<PlanEvent> {
    let mut events: Vec<PlanEvent> = collections.into_iter().flatten().collect();
    events.sort_by_key(|e| e.start);
    flag_conflicts(&mut events);
    events
}

/// Recompute `is_conflict` over the whole collection.
///
/// A pair conflicts when the half-open `[start, end)` intervals overlap and
/// at least one side is `Mandatory`; both sides are flagged. Zero-duration
/// markers never overlap anything under the half-open test.
///
/// Pairwise O(n^2); fine at the expected scale of tens to low hundreds of
/// events, and the asymmetric Mandatory rule stays obvious.
fn flag_conflicts(events: &mut [PlanEvent]) {
    for event in events.iter_mut() {
        event.is_conflict = false;
    }

    for i in 0..events.len() {
        for j in (i + 1)..events.len() {
            let overlap = events[i].end > events[j].start && events[i].start < events[j].end;
            if overlap
                && (events[i].priority == Priority::Mandatory
                    || events[j].priority == Priority::Mandatory)
            {
                events[i].is_conflict = true;
                events[j].is_conflict = true;
            }
        }
    }
}
