//! Task extraction collaborator contract.
//!
//! The engine treats "extract tasks from free text" as an opaque external
//! capability. An extractor returns zero or more `{title, start, end}`
//! triples; by contract failure is an empty list, never an error that
//! propagates into the planning functions. The LLM transport itself lives
//! outside this crate -- only the response payload shape is known here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::plan::event::{EventSource, PlanEvent, Priority};

/// A task triple produced by an extractor, timestamps in RFC3339.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractedTask {
    pub title: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl ExtractedTask {
    /// Convert into a plan event with a fresh id.
    ///
    /// Extracted tasks enter the schedule as `Generated` / `Medium` with
    /// no progress weight; the user promotes them from there.
    pub fn into_event(self) -> PlanEvent {
        PlanEvent {
            id: Uuid::new_v4().to_string(),
            title: self.title,
            start: self.start,
            end: self.end,
            source: EventSource::Generated,
            priority: Priority::Medium,
            completed: false,
            weight: 0,
            is_conflict: false,
        }
    }
}

/// Extracts tasks from free-text notes.
pub trait TaskExtractor {
    /// Extract zero or more tasks. Infallible by contract: an extractor
    /// that fails returns an empty list.
    fn extract(&self, notes: &str) -> Vec<ExtractedTask>;
}

/// Extractor that never finds anything. For tests and offline use.
pub struct NoopExtractor;

impl TaskExtractor for NoopExtractor {
    fn extract(&self, _notes: &str) -> Vec<ExtractedTask> {
        Vec::new()
    }
}

/// Parse an extraction-response payload: a JSON array of
/// `{"title", "start", "end"}` objects.
///
/// Tolerant by design: a malformed payload yields an empty list, and
/// individually malformed entries (bad timestamps, empty titles, reversed
/// ranges) are skipped rather than failing the batch.
pub fn parse_extraction_response(payload: &str) -> Vec<ExtractedTask> {
    let Ok(values) = serde_json::from_str::<Vec<serde_json::Value>>(payload) else {
        return Vec::new();
    };

    values
        .into_iter()
        .filter_map(|value| serde_json::from_value::<ExtractedTask>(value).ok())
        .filter(|task| !task.title.is_empty() && task.end >= task.start)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_well_formed_payload() {
        let payload = r#"[
            {"title": "Send outreach emails", "start": "2024-01-04T09:00:00Z", "end": "2024-01-04T10:00:00Z"},
            {"title": "Book venue", "start": "2024-01-05T12:00:00Z", "end": "2024-01-05T12:00:00Z"}
        ]"#;
        let tasks = parse_extraction_response(payload);
        assert_eq!(tasks.len(), 2);
        assert_eq!(tasks[0].title, "Send outreach emails");
        assert_eq!(tasks[1].start, tasks[1].end);
    }

    #[test]
    fn malformed_payload_yields_empty() {
        assert!(parse_extraction_response("not json at all").is_empty());
        assert!(parse_extraction_response(r#"{"title": "object, not array"}"#).is_empty());
    }

    #[test]
    fn bad_entries_are_skipped_not_fatal() {
        let payload = r#"[
            {"title": "Good", "start": "2024-01-04T09:00:00Z", "end": "2024-01-04T10:00:00Z"},
            {"title": "Bad timestamp", "start": "tomorrow-ish", "end": "2024-01-04T10:00:00Z"},
            {"title": "", "start": "2024-01-04T09:00:00Z", "end": "2024-01-04T10:00:00Z"},
            {"title": "Reversed", "start": "2024-01-04T10:00:00Z", "end": "2024-01-04T09:00:00Z"},
            {"start": "2024-01-04T09:00:00Z", "end": "2024-01-04T10:00:00Z"}
        ]"#;
        let tasks = parse_extraction_response(payload);
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].title, "Good");
    }

    #[test]
    fn into_event_tags_as_generated() {
        let payload =
            r#"[{"title": "Draft recap", "start": "2024-01-04T09:00:00Z", "end": "2024-01-04T10:00:00Z"}]"#;
        let event = parse_extraction_response(payload)
            .into_iter()
            .next()
            .unwrap()
            .into_event();

        assert_eq!(event.source, EventSource::Generated);
        assert_eq!(event.priority, Priority::Medium);
        assert_eq!(event.weight, 0);
        assert!(!event.id.is_empty());
    }

    #[test]
    fn noop_extractor_finds_nothing() {
        assert!(NoopExtractor.extract("lots of meeting notes").is_empty());
    }
}
