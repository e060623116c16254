//! Configuration module for mastodon-backup.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Media naming modes
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{
    Config, MastodonConfig, OptionsConfig, DEFAULT_OUTPUT_DIRECTORY, DEFAULT_PAGE_SIZE,
};
pub use modes::MediaNaming;
pub use validation::validate_config;
