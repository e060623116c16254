//! Media module for attachment representation and extraction.

pub mod item;
pub mod parser;

pub use item::{MediaItem, MediaType, LEGACY_EXTENSION};
pub use parser::collect_attachments;
