//! Mastodon API module.
//!
//! This module provides:
//! - HTTP client for the Mastodon REST API
//! - API response types

pub mod client;
pub mod types;

pub use client::MastodonApi;
pub use types::*;
