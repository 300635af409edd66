use gameplan_core::{Config, Merger, ScheduleDb, WorkBlockSuggester};

use crate::common;

pub fn run(at: Option<&str>, user: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let now = common::eval_time(at)?;
    let config = Config::load_or_default();
    let db = ScheduleDb::open()?;
    let stored = db.load_schedule(user)?.unwrap_or_default();

    let merged = Merger::with_calendar(config.calendar()).merge(vec![stored], now);
    let blocks = WorkBlockSuggester::new()
        .with_block_minutes(config.suggester.block_minutes)
        .suggest(&merged);

    // Advisory output only; suggestions are never written back to storage.
    if json {
        println!("{}", serde_json::to_string_pretty(&blocks)?);
    } else if blocks.is_empty() {
        println!("no idle blocks found");
    } else {
        for block in &blocks {
            println!("{}", common::format_event(block));
        }
    }
    Ok(())
}
