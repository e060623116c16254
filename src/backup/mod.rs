//! Backup module.
//!
//! This module provides:
//! - Cursor-based pagination
//! - Per-category fetch-and-write tasks with isolated failures
//! - Media attachment downloading
//! - Run state tracking
//! - The orchestrator tying them together

pub mod category;
pub mod media;
pub mod paginate;
pub mod records;
pub mod run;
pub mod state;

pub use category::{run_category, Category, CategoryError};
pub use media::{backup_media, download_media_item};
pub use paginate::{fetch_collection, AccountStatuses, PageRequest, PageSource, Pager};
pub use run::{Orchestrator, RunConfig};
pub use state::{BackupRun, CategoryOutcome, MediaReport, OutcomeStatus};
