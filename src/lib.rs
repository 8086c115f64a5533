//! tetrino (workspace facade crate).
//!
//! Re-exports the workspace crates under one name and holds the runner's own
//! configuration and event log.

pub use tetrino_core as core;
pub use tetrino_input as input;
pub use tetrino_term as term;
pub use tetrino_types as types;

pub mod config;
pub mod event_log;

pub use config::GameConfig;
pub use event_log::{EventKind, EventLog, EventRecord};
