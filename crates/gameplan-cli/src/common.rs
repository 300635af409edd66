//! Shared helpers for CLI commands.

use chrono::{DateTime, Utc};
use gameplan_core::{PlanEvent, Priority};

pub fn parse_timestamp(s: &str) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    Ok(DateTime::parse_from_rfc3339(s)?.with_timezone(&Utc))
}

/// Evaluation time for ranking/merging: `--at` if given, otherwise now.
pub fn eval_time(at: Option<&str>) -> Result<DateTime<Utc>, Box<dyn std::error::Error>> {
    match at {
        Some(s) => parse_timestamp(s),
        None => Ok(Utc::now()),
    }
}

pub fn parse_priority(s: &str) -> Result<Priority, Box<dyn std::error::Error>> {
    match s.to_ascii_lowercase().as_str() {
        "low" => Ok(Priority::Low),
        "medium" => Ok(Priority::Medium),
        "high" => Ok(Priority::High),
        "mandatory" => Ok(Priority::Mandatory),
        other => Err(format!("unknown priority '{other}' (expected low|medium|high|mandatory)").into()),
    }
}

pub fn format_event(event: &PlanEvent) -> String {
    let done = if event.completed { "x" } else { " " };
    let conflict = if event.is_conflict { "  !conflict" } else { "" };
    format!(
        "[{done}] {} .. {}  [{:>9}] {}  ({}){conflict}",
        event.start.format("%Y-%m-%d %H:%M"),
        event.end.format("%Y-%m-%d %H:%M"),
        event.priority.as_str(),
        event.title,
        event.id,
    )
}
