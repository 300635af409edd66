use gameplan_core::{Config, Merger, ScheduleDb, Scorer};

use crate::common;

pub fn run(
    count: usize,
    at: Option<&str>,
    user: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let now = common::eval_time(at)?;
    let config = Config::load_or_default();
    let db = ScheduleDb::open()?;
    let stored = db.load_schedule(user)?.unwrap_or_default();

    let merged = Merger::with_calendar(config.calendar()).merge(vec![stored], now);
    let ranked = Scorer::with_weights(config.score_weights()).top(&merged, now, count);

    if json {
        println!("{}", serde_json::to_string_pretty(&ranked)?);
    } else if ranked.is_empty() {
        println!("no upcoming events");
    } else {
        for (i, scored) in ranked.iter().enumerate() {
            println!(
                "{}. {:.3}  {}",
                i + 1,
                scored.score,
                common::format_event(&scored.event)
            );
        }
    }
    Ok(())
}
