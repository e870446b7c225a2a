//! Command implementations

pub mod schedule;
pub mod score;
pub mod simple;

pub use schedule::{ScheduleDay, build_schedule};
pub use score::{ScoreResult, score_guess};
pub use simple::run_simple;
