//! CLI commands and argument parsing

use crate::types::Snowflake;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Discord REST facade CLI
#[derive(Parser, Debug)]
#[command(name = "cordrest")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Pagination flags shared by the list commands
#[derive(Args, Debug, Clone, Default)]
pub struct PageArgs {
    /// Records per request (defaults to the config value)
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Stop after this many records
    #[arg(long)]
    pub max_records: Option<usize>,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the authorized user
    Me,

    /// List guilds of the authorized user, oldest first
    Guilds {
        /// Only guilds with an ID greater than this
        #[arg(long)]
        after: Option<Snowflake>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List members of a guild, ordered by user ID
    Members {
        /// Guild ID
        #[arg(long)]
        guild: Snowflake,

        /// Only members with a user ID greater than this
        #[arg(long)]
        after: Option<Snowflake>,

        #[command(flatten)]
        page: PageArgs,
    },

    /// List messages of a channel, newest first
    Messages {
        /// Channel ID
        #[arg(long)]
        channel: Snowflake,

        /// Only messages older than this ID (defaults to now)
        #[arg(long)]
        before: Option<Snowflake>,

        #[command(flatten)]
        page: PageArgs,
    },
}
