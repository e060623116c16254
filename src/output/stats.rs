//! Backup summary reporting.

use console::style;

use crate::backup::{BackupRun, OutcomeStatus};

/// Summary lines for a finished run, one per category and one for media.
///
/// Failed categories are listed explicitly rather than left out.
pub fn summary_lines(run: &BackupRun) -> Vec<String> {
    let mut lines: Vec<String> = run
        .outcomes
        .iter()
        .map(|outcome| match &outcome.status {
            OutcomeStatus::Success { items } => {
                format!("{}: {} backed up", outcome.category.label(), items)
            }
            OutcomeStatus::Failed { reason } => {
                format!("{}: FAILED ({})", outcome.category.label(), reason)
            }
        })
        .collect();

    lines.push(match &run.media {
        Some(report) if report.failed > 0 => format!(
            "Media attachments: {} downloaded ({} failed)",
            report.attempted, report.failed
        ),
        Some(report) => format!("Media attachments: {} downloaded", report.attempted),
        None => "Media attachments: skipped".to_string(),
    });

    lines
}

/// Print the final summary of a run.
pub fn print_backup_summary(run: &BackupRun) {
    println!();
    println!("{}", style("═".repeat(50)).dim());
    println!(
        "{}",
        style(format!(
            "Backup for {} completed and stored in {}!",
            run.username,
            run.directory.display()
        ))
        .bold()
    );
    println!("{}", style("Backup summary:").bold());
    for line in summary_lines(run) {
        if line.contains("FAILED") || line.contains(" failed)") {
            println!("  {}", style(line).red());
        } else {
            println!("  {}", line);
        }
    }
    println!(
        "  Finished in {}s",
        (chrono::Local::now() - run.started_at).num_seconds()
    );
    println!("{}", style("═".repeat(50)).dim());
}
