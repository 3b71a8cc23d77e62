//! # cordrest
//!
//! A typed facade over the Discord REST API with lazy cursor pagination.
//!
//! ## Features
//!
//! - **Cursor Pagination**: `after`/`before` snowflake cursors, one page at a time
//! - **Lazy Streams**: nothing is fetched until the stream is polled
//! - **Typed Records**: serde models for guilds, members, channels and messages
//! - **Entity Handles**: cheap ID wrappers that share one router
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use cordrest::{RestClient, RestConfig, Result};
//! use futures::TryStreamExt;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let config = RestConfig::default().with_env_overrides();
//!     let client = RestClient::from_config(&config)?;
//!
//!     let mut guilds = client.guilds()?;
//!     while let Some(guild) = guilds.try_next().await? {
//!         println!("{} {}", guild.id, guild.name);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────┐
//! │  RestClient ── guild() / channel() / user() handles       │
//! └───────────────────────────┬───────────────────────────────┘
//!                             │
//! ┌──────────────┬────────────┴───────────┬───────────────────┐
//! │ UserService  │  GuildService          │  ChannelService   │
//! └──────────────┴────────────┬───────────┴───────────────────┘
//!                             │ PageRequest { after|before, limit }
//! ┌───────────────────────────┴───────────────────────────────┐
//! │  Paginator ── fetch page, move cursor, stop on empty page │
//! ├───────────────────────────────────────────────────────────┤
//! │  Router ── one HTTP attempt, JSON decode, status errors   │
//! └───────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Snowflake and shared type aliases
pub mod types;

/// Request router
pub mod http;

/// Cursor pagination
pub mod pagination;

/// Decoded REST records
pub mod model;

/// Per-resource REST services
pub mod service;

/// REST client facade
pub mod client;

/// Entity handles
pub mod entity;

/// Gateway lifecycle events
pub mod event;

/// Client configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::RestClient;
pub use config::{load_config, load_config_from_str, RestConfig};
pub use entity::{RestChannel, RestGuild, RestMember, RestMessage, RestUser};
pub use error::{Error, Result};
pub use pagination::{paginate_after, paginate_before, PageRequest, PageStream, Paginator};
pub use types::Snowflake;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
