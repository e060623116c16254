//! Per-category backup task.
//!
//! Each category is fetched, written one line per entity to its own file,
//! and restricted to the owner. Failures are returned as [`CategoryError`]
//! so the caller can record them without aborting other categories.

use std::fmt;
use std::future::Future;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::error::Error;
use crate::fs::{create_private_file, restrict_file};

/// A class of account data backed up to its own file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Statuses,
    Followers,
    Following,
    Lists,
    Mutes,
    Blocks,
    DomainBlocks,
    Bookmarks,
}

impl Category {
    /// Every category, in the order a run backs them up.
    pub const ALL: [Category; 8] = [
        Category::Statuses,
        Category::Followers,
        Category::Following,
        Category::Lists,
        Category::Mutes,
        Category::Blocks,
        Category::DomainBlocks,
        Category::Bookmarks,
    ];

    /// Human-readable label used in the summary.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Statuses => "Statuses",
            Category::Followers => "Followers",
            Category::Following => "Following",
            Category::Lists => "Lists",
            Category::Mutes => "Mutes",
            Category::Blocks => "Blocks",
            Category::DomainBlocks => "Domain blocks",
            Category::Bookmarks => "Bookmarks",
        }
    }

    /// Name of the file the category is written to.
    pub fn file_name(&self) -> &'static str {
        match self {
            Category::Statuses => "statuses_backup.txt",
            Category::Followers => "followers_backup.txt",
            Category::Following => "following_backup.txt",
            Category::Lists => "lists_backup.txt",
            Category::Mutes => "mutes_backup.txt",
            Category::Blocks => "blocks_backup.txt",
            Category::DomainBlocks => "domain_blocks_backup.txt",
            Category::Bookmarks => "bookmarks_backup.txt",
        }
    }

    /// Path of the category file inside a backup directory.
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file_name())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

/// Why a category could not be backed up.
#[derive(Error, Debug)]
pub enum CategoryError {
    #[error("fetch failed: {0}")]
    Fetch(#[source] Error),

    #[error("could not write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fetch one category and write it to its file in `dir`.
///
/// No file is created when the fetch fails. A write failure leaves whatever
/// was written in place. On success the fetched items are handed back.
pub async fn run_category<T, Fut, S>(
    dir: &Path,
    category: Category,
    fetch: Fut,
    serialize: S,
) -> Result<Vec<T>, CategoryError>
where
    Fut: Future<Output = crate::error::Result<Vec<T>>>,
    S: Fn(&T) -> String,
{
    let items = fetch.await.map_err(CategoryError::Fetch)?;

    let path = category.path_in(dir);
    write_lines(&path, &items, serialize)
        .await
        .map_err(|source| CategoryError::Write {
            path: path.clone(),
            source,
        })?;

    tracing::debug!("Wrote {} {} to {}", items.len(), category, path.display());
    Ok(items)
}

async fn write_lines<T, S>(path: &Path, items: &[T], serialize: S) -> std::io::Result<()>
where
    S: Fn(&T) -> String,
{
    let file = create_private_file(path).await?;
    let mut writer = BufWriter::new(file);
    for item in items {
        writer.write_all(serialize(item).as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }
    writer.flush().await?;
    writer.into_inner().sync_all().await?;

    restrict_file(path).await
}
