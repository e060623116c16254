//! Backup run state tracking.

use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::api::Status;
use crate::backup::category::Category;

/// Result of one category's backup task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    Success { items: usize },
    Failed { reason: String },
}

/// One line of the summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategoryOutcome {
    pub category: Category,
    pub status: OutcomeStatus,
}

impl CategoryOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, OutcomeStatus::Success { .. })
    }
}

/// Counts from the media stage.
///
/// `attempted` counts every attachment found, including those that failed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MediaReport {
    pub attempted: usize,
    pub downloaded: usize,
    pub failed: usize,
}

impl MediaReport {
    pub fn record_success(&mut self) {
        self.attempted += 1;
        self.downloaded += 1;
    }

    pub fn record_failure(&mut self) {
        self.attempted += 1;
        self.failed += 1;
    }
}

/// Everything one backup run produced.
#[derive(Debug)]
pub struct BackupRun {
    pub username: String,
    pub directory: PathBuf,
    pub started_at: DateTime<Local>,

    /// One entry per category, in backup order.
    pub outcomes: Vec<CategoryOutcome>,

    /// `None` when media downloading was disabled.
    pub media: Option<MediaReport>,

    /// Statuses fetched by the statuses category; empty if it failed.
    pub statuses: Vec<Status>,
}

impl BackupRun {
    /// Create a new run for an account and directory.
    pub fn new(username: String, directory: PathBuf) -> Self {
        Self {
            username,
            directory,
            started_at: Local::now(),
            outcomes: Vec::new(),
            media: None,
            statuses: Vec::new(),
        }
    }

    /// Record a successful category.
    pub fn record_success(&mut self, category: Category, items: usize) {
        self.outcomes.push(CategoryOutcome {
            category,
            status: OutcomeStatus::Success { items },
        });
    }

    /// Record a failed category.
    pub fn record_failure(&mut self, category: Category, reason: String) {
        self.outcomes.push(CategoryOutcome {
            category,
            status: OutcomeStatus::Failed { reason },
        });
    }

    /// Outcome recorded for a category, if it has run.
    pub fn outcome(&self, category: Category) -> Option<&CategoryOutcome> {
        self.outcomes.iter().find(|o| o.category == category)
    }

    /// Number of categories that failed.
    pub fn failed_count(&self) -> usize {
        self.outcomes.iter().filter(|o| !o.is_success()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_outcomes_in_order() {
        let mut run = BackupRun::new("alice".into(), PathBuf::from("out/x"));
        run.record_success(Category::Statuses, 3);
        run.record_failure(Category::Followers, "HTTP 500".into());

        assert_eq!(run.outcomes.len(), 2);
        assert_eq!(run.outcomes[0].category, Category::Statuses);
        assert!(run.outcome(Category::Statuses).unwrap().is_success());
        assert!(!run.outcome(Category::Followers).unwrap().is_success());
        assert!(run.outcome(Category::Lists).is_none());
        assert_eq!(run.failed_count(), 1);
    }

    #[test]
    fn test_media_report_counts_attempts() {
        let mut report = MediaReport::default();
        report.record_success();
        report.record_failure();
        report.record_success();

        assert_eq!(
            report,
            MediaReport {
                attempted: 3,
                downloaded: 2,
                failed: 1
            }
        );
    }
}
