use clap::Subcommand;
use gameplan_core::{Config, Merger, ScheduleDb};

use crate::common;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Show the merged timeline: stored events plus organization deadlines,
    /// sorted by start, with conflicts flagged
    Show {
        /// Evaluation time, RFC3339 (defaults to now)
        #[arg(long)]
        at: Option<String>,
        #[arg(long, default_value = "default")]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        PlanAction::Show { at, user, json } => {
            let now = common::eval_time(at.as_deref())?;
            let config = Config::load_or_default();
            let db = ScheduleDb::open()?;
            let stored = db.load_schedule(&user)?.unwrap_or_default();

            let merger = Merger::with_calendar(config.calendar());
            let merged = merger.merge(vec![stored], now);

            if json {
                println!("{}", serde_json::to_string_pretty(&merged)?);
            } else if merged.is_empty() {
                println!("empty plan");
            } else {
                for event in &merged {
                    println!("{}", common::format_event(event));
                }
                let conflicts = merged.iter().filter(|e| e.is_conflict).count();
                if conflicts > 0 {
                    println!("{conflicts} event(s) in conflict");
                }
            }
        }
    }
    Ok(())
}
