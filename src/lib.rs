//! Mastodon Backup - export a Mastodon account to a local directory.
//!
//! This library provides functionality for a point-in-time backup of the
//! authenticated account.
//!
//! # Features
//!
//! - Back up statuses, with full pagination or a recent-N limit
//! - Back up followers, following, lists, mutes, blocks, domain blocks
//!   and bookmarks
//! - Download media attachments of backed-up statuses
//! - Per-category failure isolation
//! - Owner-only permissions on everything written
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use mastodon_backup::{Config, MastodonApi, Orchestrator, RunConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let api = MastodonApi::new(
//!         &config.mastodon.api_base_url,
//!         config.mastodon.access_token.clone(),
//!     )?;
//!
//!     let run = Orchestrator::new(&api, RunConfig::from_config(&config))
//!         .run()
//!         .await?;
//!     println!("Backed up to {}", run.directory.display());
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod backup;
pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod media;
pub mod output;

// Re-exports for convenience
pub use api::MastodonApi;
pub use backup::{BackupRun, Category, Orchestrator, RunConfig};
pub use config::{Config, MediaNaming};
pub use error::{Error, Result};
pub use media::{MediaItem, MediaType};
