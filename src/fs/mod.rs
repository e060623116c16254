//! Filesystem module.
//!
//! Provides:
//! - Backup directory naming
//! - Filename generation and sanitization
//! - Owner-only permission handling

pub mod naming;
pub mod paths;
pub mod permissions;

pub use naming::{media_filename, sanitize_path_component};
pub use paths::{backup_dir_name, get_backup_dir};
pub use permissions::{create_private_dir, create_private_file, restrict_file};
