use gameplan_core::{weekly_progress, ScheduleDb};

pub fn run(user: &str) -> Result<(), Box<dyn std::error::Error>> {
    let db = ScheduleDb::open()?;
    let events = db.load_schedule(user)?.unwrap_or_default();
    let progress = weekly_progress(&events);
    println!("Progress: {}%", progress.round());
    Ok(())
}
