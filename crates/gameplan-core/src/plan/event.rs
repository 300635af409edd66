//! Plan event types and utilities.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Where a plan event came from.
///
/// Informational only: preserved through merging, ranking, and suggestion,
/// but never consulted by the scoring formulas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EventSource {
    /// Supplied by the user (manual entry or schedule upload).
    User,
    /// Materialized from the organization's recurring deadline calendar.
    OrgDeadline,
    /// Derived output: extracted tasks or suggested work blocks.
    Generated,
}

impl EventSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::User => "user",
            Self::OrgDeadline => "org-deadline",
            Self::Generated => "generated",
        }
    }
}

/// Priority tier of a plan event.
///
/// Totally ordered: `Low < Medium < High < Mandatory`. `Mandatory` is the
/// only tier that can trigger conflict flagging during a merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
    Mandatory,
}

impl Priority {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Mandatory => "mandatory",
        }
    }
}

/// A single schedulable item: a calendar event, a task, or a deadline marker.
///
/// A zero-duration event (`start == end`) is a deadline marker meaning
/// "due at this instant".
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEvent {
    pub id: String,
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub source: EventSource,
    pub priority: Priority,
    #[serde(default)]
    pub completed: bool,
    /// Contribution to the progress meter, 0-100 scale. 0 means tracked
    /// but not scored. The collection need not sum to 100.
    #[serde(default)]
    pub weight: u32,
    /// Derived flag, overwritten on every merge. Never set elsewhere.
    #[serde(default)]
    pub is_conflict: bool,
}

impl PlanEvent {
    /// Create a new plan event.
    ///
    /// Defaults: source `User`, priority `Medium`, not completed, weight 0.
    ///
    /// # Panics
    /// Panics if `end < start` or the title is empty. Use
    /// [`try_new`](Self::try_new) for a non-panicking version.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self::try_new(id, title, start, end)
            .expect("PlanEvent::new: end must not precede start and title must be non-empty")
    }

    /// Create a new plan event, returning a Result.
    ///
    /// `start == end` is accepted and denotes a deadline marker.
    ///
    /// # Errors
    /// Returns an error if `end < start` or the title is empty.
    pub fn try_new(
        id: impl Into<String>,
        title: impl Into<String>,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Self, ValidationError> {
        if end < start {
            return Err(ValidationError::InvalidTimeRange { start, end });
        }
        let title = title.into();
        if title.is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "title".to_string(),
                message: "must be non-empty".to_string(),
            });
        }
        Ok(Self {
            id: id.into(),
            title,
            start,
            end,
            source: EventSource::User,
            priority: Priority::Medium,
            completed: false,
            weight: 0,
            is_conflict: false,
        })
    }

    /// Get duration in minutes
    pub fn duration_minutes(&self) -> i64 {
        (self.end - self.start).num_minutes()
    }

    /// Get duration in fractional hours
    pub fn duration_hours(&self) -> f64 {
        (self.end - self.start).num_seconds() as f64 / 3600.0
    }

    /// Whether this is a zero-duration deadline marker.
    pub fn is_deadline_marker(&self) -> bool {
        self.start == self.end
    }

    /// Check if this event overlaps with another.
    ///
    /// Intervals are half-open `[start, end)`, so a deadline marker never
    /// overlaps another marker at the same instant, but a marker inside a
    /// genuine interval does overlap it.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.end > other.start && self.start < other.end
    }

    /// Set source
    pub fn with_source(mut self, source: EventSource) -> Self {
        self.source = source;
        self
    }

    /// Set priority tier
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set progress-meter weight (clamped to 100)
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = weight.min(100);
        self
    }

    /// Mark as completed
    pub fn with_completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }
}
