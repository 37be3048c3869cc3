//! CLI subcommand definitions

use clap::Subcommand;

/// Main CLI commands
#[derive(Debug, Subcommand)]
pub(crate) enum Commands {
    /// Fetch photos for an Earth date or Martian sol (default)
    Fetch,
    /// Fetch photos for a significant mission event
    Event {
        /// Event name (see `rovercam events`)
        name: String,
    },
    /// List the predefined mission events
    Events,
}
