pub mod config;
pub mod deadlines;
pub mod event;
pub mod extract;
pub mod next;
pub mod plan;
pub mod progress;
pub mod suggest;
