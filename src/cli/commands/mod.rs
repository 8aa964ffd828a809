//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait, which provides a uniform
//! interface for executing commands and reporting results.
//!
//! # Architecture
//!
//! Commands are dispatched via [`CommandDispatcher`], which routes CLI
//! subcommands to their implementations. Commands that build a report
//! receive the already-loaded [`ReportConfig`](crate::config::ReportConfig)
//! and layer their own flags on top.

pub mod completions;
pub mod dispatcher;
pub mod project_info;
pub mod show;
pub mod version;

pub use dispatcher::{Command, CommandDispatcher, CommandResult};
