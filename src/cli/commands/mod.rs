//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes the
//! optional `REPORT` argument to its implementation:
//! - no report: [`SyncCommand`]
//! - `s`, `p`, `l`, `d`, `a`: [`ShowCommand`]
//! - `i`: [`StatsCommand`]

pub mod dispatcher;
pub mod show;
pub mod stats;
pub mod sync;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, USAGE_EXIT_CODE};
pub use show::{Listing, ShowCommand};
pub use stats::StatsCommand;
pub use sync::SyncCommand;
