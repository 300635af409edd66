//! Schedule reconciliation and task prioritization.
//!
//! Pure, stateless transformations over in-memory event collections:
//! merging with conflict flagging, composite ranking, idle work-block
//! suggestion, and weighted progress. Evaluation time is always an
//! explicit parameter so callers (and tests) can pin it.

pub mod event;
pub mod merge;
pub mod progress;
pub mod score;
pub mod suggest;

pub use event::{EventSource, PlanEvent, Priority};
pub use merge::{merge_collections, Merger};
pub use progress::weekly_progress;
pub use score::{priority_weight, ScoreWeights, ScoredEvent, Scorer};
pub use suggest::{suggest_work_blocks, WorkBlockSuggester, DEFAULT_BLOCK_MINUTES};
