//! # Gameplan Core Library
//!
//! Core business logic for Gameplan: a schedule reconciliation and
//! task-prioritization engine for student-organization members juggling
//! personal calendars and chapter-mandated deadlines. All operations are
//! available through a standalone CLI binary; any GUI is a thin layer over
//! this same library.
//!
//! ## Architecture
//!
//! - **Plan**: pure, stateless transformations over in-memory event
//!   collections -- conflict-aware merging, composite ranking, idle
//!   work-block suggestion, weighted progress
//! - **Deadlines**: the organization's recurring calendar, materialized
//!   fresh on every merge
//! - **Extract**: the narrow contract for AI task extraction; transport
//!   lives outside this crate
//! - **Storage**: SQLite per-user schedule persistence and TOML-based
//!   configuration
//!
//! ## Key Components
//!
//! - [`PlanEvent`]: the canonical schedulable item
//! - [`Merger`]: combines collections and flags Mandatory conflicts
//! - [`Scorer`]: urgency/commitment/priority ranking
//! - [`WorkBlockSuggester`]: advisory work sessions for schedule gaps
//! - [`ScheduleDb`]: per-user schedule persistence

pub mod deadlines;
pub mod error;
pub mod extract;
pub mod plan;
pub mod storage;

pub use deadlines::{DeadlineCalendar, RecurringDeadline};
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use extract::{parse_extraction_response, ExtractedTask, NoopExtractor, TaskExtractor};
pub use plan::{
    merge_collections, priority_weight, suggest_work_blocks, weekly_progress, EventSource,
    Merger, PlanEvent, Priority, ScoreWeights, ScoredEvent, Scorer, WorkBlockSuggester,
};
pub use storage::{Config, ScheduleDb};
