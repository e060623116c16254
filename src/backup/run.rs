//! Backup run orchestration.

use std::path::PathBuf;

use chrono::{Local, NaiveDate};

use crate::api::MastodonApi;
use crate::backup::category::{run_category, Category, CategoryError};
use crate::backup::media::backup_media;
use crate::backup::paginate::{fetch_collection, AccountStatuses};
use crate::backup::records::{account_line, bookmark_line, list_line, status_line};
use crate::backup::state::BackupRun;
use crate::config::{Config, MediaNaming};
use crate::error::{Error, Result};
use crate::fs::{create_private_dir, get_backup_dir};
use crate::output::{create_spinner, print_info};

/// Settings for one run, resolved from configuration and CLI.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub output_root: PathBuf,
    pub status_limit: Option<u32>,
    pub page_size: u32,
    pub media_names: MediaNaming,
    pub download_media: bool,
    pub show_progress: bool,
    /// Day the backup directory is named after.
    pub date: NaiveDate,
}

impl RunConfig {
    /// Resolve run settings from a validated config, dated today.
    pub fn from_config(config: &Config) -> Self {
        Self {
            output_root: config.output_directory(),
            status_limit: config.options.status_limit,
            page_size: config.options.page_size,
            media_names: config.options.media_names,
            download_media: config.options.download_media,
            show_progress: config.options.show_progress,
            date: Local::now().date_naive(),
        }
    }
}

/// Runs every backup stage against one output directory.
pub struct Orchestrator<'a> {
    api: &'a MastodonApi,
    config: RunConfig,
}

impl<'a> Orchestrator<'a> {
    pub fn new(api: &'a MastodonApi, config: RunConfig) -> Self {
        Self { api, config }
    }

    /// Perform a full backup.
    ///
    /// Returns an error only for setup failures (credentials, output
    /// directory). Category and media failures are recorded in the returned
    /// [`BackupRun`].
    pub async fn run(&self) -> Result<BackupRun> {
        let account = self.api.verify_credentials().await?;
        print_info(&format!(
            "Logged in as: {}",
            account
                .display_name
                .as_deref()
                .filter(|name| !name.is_empty())
                .unwrap_or(&account.username)
        ));

        let dir = get_backup_dir(&self.config.output_root, &account.username, self.config.date)?;
        create_private_dir(&dir)
            .await
            .map_err(|source| Error::OutputDirectory {
                path: dir.clone(),
                source,
            })?;
        print_info(&format!("Backing up to {}", dir.display()));

        let mut run = BackupRun::new(account.username.clone(), dir.clone());
        let page_size = self.config.page_size;

        // Statuses
        let source = AccountStatuses {
            api: self.api,
            account_id: &account.id,
            page_size,
        };
        match self.config.status_limit {
            Some(limit) => tracing::info!("Fetching the last {} statuses...", limit),
            None => tracing::info!("Fetching all statuses..."),
        }
        let spinner = self
            .config
            .show_progress
            .then(|| create_spinner("Fetching statuses..."));
        let result = run_category(
            &dir,
            Category::Statuses,
            fetch_collection(&source, self.config.status_limit),
            status_line,
        )
        .await;
        if let Some(spinner) = spinner {
            spinner.finish_and_clear();
        }
        if let Some(statuses) = record(&mut run, Category::Statuses, result) {
            run.statuses = statuses;
        }

        let result = run_category(
            &dir,
            Category::Followers,
            self.api.followers(&account.id, page_size),
            account_line,
        )
        .await;
        record(&mut run, Category::Followers, result);

        let result = run_category(
            &dir,
            Category::Following,
            self.api.following(&account.id, page_size),
            account_line,
        )
        .await;
        record(&mut run, Category::Following, result);

        let result = run_category(&dir, Category::Lists, self.api.lists(), list_line).await;
        record(&mut run, Category::Lists, result);

        let result = run_category(
            &dir,
            Category::Mutes,
            self.api.mutes(page_size),
            account_line,
        )
        .await;
        record(&mut run, Category::Mutes, result);

        let result = run_category(
            &dir,
            Category::Blocks,
            self.api.blocks(page_size),
            account_line,
        )
        .await;
        record(&mut run, Category::Blocks, result);

        let result = run_category(
            &dir,
            Category::DomainBlocks,
            self.api.domain_blocks(page_size),
            |domain: &String| domain.clone(),
        )
        .await;
        record(&mut run, Category::DomainBlocks, result);

        let result = run_category(
            &dir,
            Category::Bookmarks,
            self.api.bookmarks(page_size),
            bookmark_line,
        )
        .await;
        record(&mut run, Category::Bookmarks, result);

        // Media, from whatever statuses were fetched
        if self.config.download_media {
            let report = backup_media(
                self.api,
                &dir,
                &run.statuses,
                self.config.media_names,
                self.config.show_progress,
            )
            .await;
            run.media = Some(report);
        } else {
            tracing::info!("Skipping media attachments");
        }

        Ok(run)
    }
}

/// Log a category result and append its outcome to the run.
fn record<T>(
    run: &mut BackupRun,
    category: Category,
    result: std::result::Result<Vec<T>, CategoryError>,
) -> Option<Vec<T>> {
    match result {
        Ok(items) => {
            tracing::info!("{}: {} backed up", category.label(), items.len());
            run.record_success(category, items.len());
            Some(items)
        }
        Err(e) => {
            match &e {
                CategoryError::Fetch(err) => {
                    tracing::error!("Error backing up {}: {}", category, err)
                }
                CategoryError::Write { path, source } => tracing::error!(
                    "Error writing {} backup file {}: {}",
                    category,
                    path.display(),
                    source
                ),
            }
            let reason = match e {
                CategoryError::Fetch(err) => err.to_string(),
                write_err => write_err.to_string(),
            };
            run.record_failure(category, reason);
            None
        }
    }
}
