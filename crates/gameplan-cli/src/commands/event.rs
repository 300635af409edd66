use clap::Subcommand;
use gameplan_core::{PlanEvent, ScheduleDb};
use uuid::Uuid;

use crate::common;

#[derive(Subcommand)]
pub enum EventAction {
    /// Add an event to the stored schedule
    Add {
        title: String,
        /// Start time, RFC3339
        #[arg(long)]
        start: String,
        /// End time, RFC3339; defaults to start (deadline marker)
        #[arg(long)]
        end: Option<String>,
        /// Priority tier: low, medium, high, mandatory
        #[arg(long, default_value = "medium")]
        priority: String,
        /// Progress-meter weight (0-100)
        #[arg(long, default_value_t = 0)]
        weight: u32,
        #[arg(long, default_value = "default")]
        user: String,
    },
    /// List stored events
    List {
        #[arg(long)]
        json: bool,
        #[arg(long, default_value = "default")]
        user: String,
    },
    /// Mark an event completed
    Complete {
        id: String,
        #[arg(long, default_value = "default")]
        user: String,
    },
    /// Remove an event
    Remove {
        id: String,
        #[arg(long, default_value = "default")]
        user: String,
    },
}

pub fn run(action: EventAction) -> Result<(), Box<dyn std::error::Error>> {
    let db = ScheduleDb::open()?;
    match action {
        EventAction::Add {
            title,
            start,
            end,
            priority,
            weight,
            user,
        } => {
            let start = common::parse_timestamp(&start)?;
            let end = match end {
                Some(s) => common::parse_timestamp(&s)?,
                None => start,
            };
            let event = PlanEvent::try_new(Uuid::new_v4().to_string(), title, start, end)?
                .with_priority(common::parse_priority(&priority)?)
                .with_weight(weight);

            let mut events = db.load_schedule(&user)?.unwrap_or_default();
            events.push(event.clone());
            db.save_schedule(&user, &events)?;
            println!("Event added: {}", event.id);
        }
        EventAction::List { json, user } => {
            let events = db.load_schedule(&user)?.unwrap_or_default();
            if json {
                println!("{}", serde_json::to_string_pretty(&events)?);
            } else if events.is_empty() {
                println!("no stored events");
            } else {
                for event in &events {
                    println!("{}", common::format_event(event));
                }
            }
        }
        EventAction::Complete { id, user } => {
            let mut events = db.load_schedule(&user)?.unwrap_or_default();
            let event = events
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| format!("no event with id {id}"))?;
            event.completed = true;
            db.save_schedule(&user, &events)?;
            println!("Event completed: {id}");
        }
        EventAction::Remove { id, user } => {
            let mut events = db.load_schedule(&user)?.unwrap_or_default();
            let before = events.len();
            events.retain(|e| e.id != id);
            if events.len() == before {
                return Err(format!("no event with id {id}").into());
            }
            db.save_schedule(&user, &events)?;
            println!("Event removed: {id}");
        }
    }
    Ok(())
}
