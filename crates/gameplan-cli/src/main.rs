use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "gameplan-cli", version, about = "Gameplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Stored event management
    Event {
        #[command(subcommand)]
        action: commands::event::EventAction,
    },
    /// Merged timeline with conflict flags
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Ranked "what to do next" list
    Next {
        /// Number of events to show
        #[arg(long, default_value_t = 5)]
        count: usize,
        /// Evaluation time, RFC3339 (defaults to now)
        #[arg(long)]
        at: Option<String>,
        #[arg(long, default_value = "default")]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Suggested idle work blocks
    Suggest {
        /// Evaluation time, RFC3339 (defaults to now)
        #[arg(long)]
        at: Option<String>,
        #[arg(long, default_value = "default")]
        user: String,
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Weighted completion progress
    Progress {
        #[arg(long, default_value = "default")]
        user: String,
    },
    /// Organization deadline calendar
    Deadlines {
        #[command(subcommand)]
        action: commands::deadlines::DeadlinesAction,
    },
    /// Import events from an extraction-response JSON file
    Extract {
        /// Path to a JSON array of {title, start, end} objects
        file: std::path::PathBuf,
        #[arg(long, default_value = "default")]
        user: String,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Event { action } => commands::event::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Next {
            count,
            at,
            user,
            json,
        } => commands::next::run(count, at.as_deref(), &user, json),
        Commands::Suggest { at, user, json } => {
            commands::suggest::run(at.as_deref(), &user, json)
        }
        Commands::Progress { user } => commands::progress::run(&user),
        Commands::Deadlines { action } => commands::deadlines::run(action),
        Commands::Extract { file, user } => commands::extract::run(&file, &user),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
