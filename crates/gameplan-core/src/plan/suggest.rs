//! Idle work-block suggestion.
//!
//! Scans a schedule for free intervals between adjacent events and
//! synthesizes advisory work sessions. Suggestions are derived output:
//! recomputed on every call and never persisted.

use chrono::Duration;

use super::event::{EventSource, PlanEvent, Priority};

/// Default suggested block length in minutes (2 hours).
pub const DEFAULT_BLOCK_MINUTES: i64 = 120;

/// Title given to every synthetic block.
pub const WORK_BLOCK_TITLE: &str = "Suggested Work Block";

/// Suggests fixed-length work blocks in schedule gaps.
pub struct WorkBlockSuggester {
    block_minutes: i64,
}

impl WorkBlockSuggester {
    /// Create a suggester with the default 2-hour block length.
    pub fn new() -> Self {
        Self {
            block_minutes: DEFAULT_BLOCK_MINUTES,
        }
    }

    /// Set the block length (also the minimum qualifying gap).
    pub fn with_block_minutes(mut self, minutes: i64) -> Self {
        self.block_minutes = minutes;
        self
    }

    /// Suggest one work block per qualifying gap.
    ///
    /// Events are considered in start order; for each adjacent pair the gap
    /// runs from the earlier event's end to the later event's start. A gap
    /// of at least the block length yields exactly one block of exactly the
    /// block length at the gap's beginning, however much larger the gap is.
    ///
    /// Blocks are priority `Low`, source `Generated`, weight 0, and must
    /// never be merged back into the stored collection.
    pub fn suggest(&self, events: &[PlanEvent]) -> Vec<PlanEvent> {
        let mut sorted: Vec<&PlanEvent> = events.iter().collect();
        sorted.sort_by_key(|e| e.start);

        let mut blocks = Vec::new();
        for pair in sorted.windows(2) {
            let gap_start = pair[0].end;
            let gap_end = pair[1].start;
            if gap_end - gap_start >= Duration::minutes(self.block_minutes) {
                blocks.push(PlanEvent {
                    id: format!("work-block-{}", gap_start.to_rfc3339()),
                    title: WORK_BLOCK_TITLE.to_string(),
                    start: gap_start,
                    end: gap_start + Duration::minutes(self.block_minutes),
                    source: EventSource::Generated,
                    priority: Priority::Low,
                    completed: false,
                    weight: 0,
                    is_conflict: false,
                });
            }
        }
        blocks
    }
}

impl Default for WorkBlockSuggester {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function using the default block length.
pub fn suggest_work_blocks(events: &[PlanEvent]) -> Vec<PlanEvent> {
    WorkBlockSuggester::new().suggest(events)
}
