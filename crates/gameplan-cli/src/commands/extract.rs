use std::path::Path;

use gameplan_core::{parse_extraction_response, PlanEvent, ScheduleDb};

/// Import events from an extraction-response payload on disk.
///
/// The file holds what a task extractor returned: a JSON array of
/// `{title, start, end}` objects. A malformed payload imports nothing,
/// matching the extraction contract (failure means "no new events").
pub fn run(file: &Path, user: &str) -> Result<(), Box<dyn std::error::Error>> {
    let payload = std::fs::read_to_string(file)?;
    let tasks = parse_extraction_response(&payload);

    if tasks.is_empty() {
        println!("no tasks extracted");
        return Ok(());
    }

    let db = ScheduleDb::open()?;
    let mut events = db.load_schedule(user)?.unwrap_or_default();
    let imported: Vec<PlanEvent> = tasks.into_iter().map(|t| t.into_event()).collect();
    for event in &imported {
        println!("Event added: {}  {}", event.id, event.title);
    }
    events.extend(imported);
    db.save_schedule(user, &events)?;
    Ok(())
}
