use clap::Subcommand;
use gameplan_core::Config;

use crate::common;

#[derive(Subcommand)]
pub enum DeadlinesAction {
    /// List the upcoming instance of each organization deadline
    List {
        /// Evaluation time, RFC3339 (defaults to now)
        #[arg(long)]
        at: Option<String>,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
}

pub fn run(action: DeadlinesAction) -> Result<(), Box<dyn std::error::Error>> {
    match action {
        DeadlinesAction::List { at, json } => {
            let now = common::eval_time(at.as_deref())?;
            let config = Config::load_or_default();
            let mut events = config.calendar().upcoming(now);
            events.sort_by_key(|e| e.start);

            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else if events.is_empty() {
                println!("no organization deadlines configured");
            } else {
                for event in &events {
                    println!("{}", common::format_event(event));
                }
            }
        }
    }
    Ok(())
}
