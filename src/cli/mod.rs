//! CLI command handlers.
//!
//! Testable command handlers invoked by `main.rs`. Each handler implements
//! the logic of one subcommand and returns a process exit code.

mod view;

pub use view::{run_view, threshold_reached};

// Re-export config types used by handlers
pub use crate::config::ViewConfig;
