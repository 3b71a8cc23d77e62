//! CLI module
//!
//! Command-line interface for listing paginated collections.
//!
//! # Commands
//!
//! - `me` - Show the authorized user
//! - `guilds` - List guilds of the authorized user
//! - `members` - List members of a guild
//! - `messages` - List message history of a channel

mod commands;
mod runner;

pub use commands::{Cli, Commands, PageArgs};
pub use runner::Runner;
