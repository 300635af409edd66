//! Recurring organization deadline calendar.
//!
//! Chapters run on a weekly cadence: meetings, outreach quotas, member-hour
//! deadlines. Instead of a rule-plus-occurrences model, the calendar
//! materializes concrete `PlanEvent` instances for the upcoming week on
//! every call, deterministic for a given evaluation time and never cached.

use chrono::{DateTime, Datelike, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::plan::event::{EventSource, PlanEvent, Priority};

/// A weekly recurring deadline definition.
///
/// `duration_minutes == 0` produces a zero-duration deadline marker
/// ("due at this instant").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecurringDeadline {
    pub title: String,
    /// Day of week: 0=Sun ... 6=Sat
    pub weekday: u8,
    pub hour: u32,
    pub minute: u32,
    #[serde(default)]
    pub duration_minutes: i64,
    pub priority: Priority,
}

impl RecurringDeadline {
    /// Next occurrence of this deadline's weekday at its wall-clock time.
    ///
    /// `(target + 7 - today) % 7` days ahead, so a deadline whose weekday
    /// is today resolves to today even if the time has already passed;
    /// downstream future-only filtering handles those. Returns `None` for
    /// an out-of-range wall-clock time.
    pub fn next_occurrence(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        let today = now.weekday().num_days_from_sunday();
        let days_ahead = (u32::from(self.weekday) + 7 - today) % 7;
        let date = now.date_naive() + Duration::days(i64::from(days_ahead));
        date.and_hms_opt(self.hour, self.minute, 0)
            .map(|naive| naive.and_utc())
    }

    /// Materialize this deadline's next instance as a plan event.
    pub fn materialize(&self, now: DateTime<Utc>) -> Option<PlanEvent> {
        let start = self.next_occurrence(now)?;
        let end = start + Duration::minutes(self.duration_minutes);
        Some(PlanEvent {
            id: format!("org-{}-{}", slug(&self.title), start.to_rfc3339()),
            title: self.title.clone(),
            start,
            end,
            source: EventSource::OrgDeadline,
            priority: self.priority,
            completed: false,
            weight: 0,
            is_conflict: false,
        })
    }
}

/// The organization's recurring deadline set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeadlineCalendar {
    pub deadlines: Vec<RecurringDeadline>,
}

impl DeadlineCalendar {
    pub fn new(deadlines: Vec<RecurringDeadline>) -> Self {
        Self { deadlines }
    }

    /// Materialize the upcoming instance of every definition.
    ///
    /// Deterministic for a given `now`; definitions with an invalid
    /// wall-clock time are skipped.
    pub fn upcoming(&self, now: DateTime<Utc>) -> Vec<PlanEvent> {
        self.deadlines
            .iter()
            .filter_map(|d| d.materialize(now))
            .collect()
    }
}

impl Default for DeadlineCalendar {
    /// The standing weekly cadence: chapter meetings Monday and Wednesday
    /// evening, outreach and member-hour markers late in the week, the
    /// social marker Sunday night.
    fn default() -> Self {
        Self::new(vec![
            RecurringDeadline {
                title: "Chapter Meeting".to_string(),
                weekday: 1, // Monday
                hour: 19,
                minute: 0,
                duration_minutes: 60,
                priority: Priority::Mandatory,
            },
            RecurringDeadline {
                title: "Chapter Meeting".to_string(),
                weekday: 3, // Wednesday
                hour: 19,
                minute: 0,
                duration_minutes: 60,
                priority: Priority::Mandatory,
            },
            RecurringDeadline {
                title: "Outreach Emails Deadline".to_string(),
                weekday: 4, // Thursday
                hour: 17,
                minute: 0,
                duration_minutes: 0,
                priority: Priority::High,
            },
            RecurringDeadline {
                title: "Member Hours Deadline".to_string(),
                weekday: 5, // Friday
                hour: 23,
                minute: 59,
                duration_minutes: 0,
                priority: Priority::High,
            },
            RecurringDeadline {
                title: "Social & Group Dinner Deadline".to_string(),
                weekday: 0, // Sunday
                hour: 20,
                minute: 0,
                duration_minutes: 0,
                priority: Priority::Medium,
            },
        ])
    }
}

fn slug(title: &str) -> String {
    title
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    // 2024-01-02 is a Tuesday.
    fn tuesday() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 1, 2, 8, 0, 0).unwrap()
    }

    #[test]
    fn next_occurrence_rolls_forward_to_target_weekday() {
        let deadline = RecurringDeadline {
            title: "Chapter Meeting".to_string(),
            weekday: 3, // Wednesday
            hour: 19,
            minute: 0,
            duration_minutes: 60,
            priority: Priority::Mandatory,
        };
        let start = deadline.next_occurrence(tuesday()).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 3, 19, 0, 0).unwrap());
    }

    #[test]
    fn same_weekday_resolves_to_today() {
        let deadline = RecurringDeadline {
            title: "Standup".to_string(),
            weekday: 2, // Tuesday, same as `now`
            hour: 7,
            minute: 0,
            duration_minutes: 0,
            priority: Priority::Low,
        };
        // 07:00 already passed at 08:00, but the occurrence is still today.
        let start = deadline.next_occurrence(tuesday()).unwrap();
        assert_eq!(start, Utc.with_ymd_and_hms(2024, 1, 2, 7, 0, 0).unwrap());
    }

    #[test]
    fn materialize_marker_has_zero_duration() {
        let deadline = RecurringDeadline {
            title: "Member Hours Deadline".to_string(),
            weekday: 5,
            hour: 23,
            minute: 59,
            duration_minutes: 0,
            priority: Priority::High,
        };
        let event = deadline.materialize(tuesday()).unwrap();
        assert!(event.is_deadline_marker());
        assert_eq!(event.source, EventSource::OrgDeadline);
        assert_eq!(event.priority, Priority::High);
        assert_eq!(event.weight, 0);
    }

    #[test]
    fn default_calendar_materializes_five_instances() {
        let events = DeadlineCalendar::default().upcoming(tuesday());
        assert_eq!(events.len(), 5);
        assert!(events.iter().all(|e| e.source == EventSource::OrgDeadline));

        let meetings: Vec<_> = events
            .iter()
            .filter(|e| e.priority == Priority::Mandatory)
            .collect();
        assert_eq!(meetings.len(), 2);
        assert!(meetings.iter().all(|e| e.duration_minutes() == 60));
    }

    #[test]
    fn upcoming_is_deterministic_per_call() {
        let calendar = DeadlineCalendar::default();
        let first = calendar.upcoming(tuesday());
        let second = calendar.upcoming(tuesday());
        let ids = |events: &[PlanEvent]| -> Vec<String> {
            events.iter().map(|e| e.id.clone()).collect()
        };
        assert_eq!(ids(&first), ids(&second));
    }

    #[test]
    fn ids_are_unique_within_a_materialization() {
        let events = DeadlineCalendar::default().upcoming(tuesday());
        let mut ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), events.len());
    }

    #[test]
    fn invalid_wall_clock_time_is_skipped() {
        let calendar = DeadlineCalendar::new(vec![RecurringDeadline {
            title: "Broken".to_string(),
            weekday: 1,
            hour: 25,
            minute: 0,
            duration_minutes: 0,
            priority: Priority::Low,
        }]);
        assert!(calendar.upcoming(tuesday()).is_empty());
    }
}
