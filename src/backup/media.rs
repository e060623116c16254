//! Media attachment downloading.

use std::path::{Path, PathBuf};

use futures::StreamExt;
use indicatif::MultiProgress;
use tokio::io::AsyncWriteExt;

use crate::api::{MastodonApi, Status};
use crate::backup::state::MediaReport;
use crate::config::MediaNaming;
use crate::error::{Error, Result};
use crate::fs::{create_private_file, restrict_file};
use crate::media::{collect_attachments, MediaItem};
use crate::output::{create_download_bar, create_item_bar};

/// Minimum file size to show progress bar (20 MB).
const PROGRESS_THRESHOLD: u64 = 20 * 1024 * 1024;

/// Download every attachment of `statuses` into `dir`.
///
/// Each attachment is independent: a failure is logged and the next one is
/// tried. File numbering follows attachment order, so failures leave gaps.
pub async fn backup_media(
    api: &MastodonApi,
    dir: &Path,
    statuses: &[Status],
    naming: MediaNaming,
    show_progress: bool,
) -> MediaReport {
    let items = collect_attachments(statuses);
    let mut report = MediaReport::default();

    if items.is_empty() {
        tracing::info!("No media attachments to download");
        return report;
    }

    tracing::info!("Downloading {} media attachments...", items.len());

    let progress = show_progress.then(MultiProgress::new);
    let items_bar = progress
        .as_ref()
        .map(|multi| multi.add(create_item_bar(items.len() as u64, "Media")));

    for item in &items {
        let output_path = dir.join(item.generate_filename(naming));

        match download_media_item(api, item, &output_path, progress.as_ref()).await {
            Ok(path) => {
                report.record_success();
                tracing::info!("Downloaded {}", path.display());
            }
            Err(e) => {
                report.record_failure();
                tracing::warn!(
                    "Failed to download attachment {} of status {} ({}): {}",
                    item.media_id,
                    item.status_id,
                    item.download_url.as_deref().unwrap_or("no URL"),
                    e
                );
            }
        }

        if let Some(bar) = &items_bar {
            bar.inc(1);
        }
    }

    if let Some(bar) = items_bar {
        bar.finish_and_clear();
    }

    tracing::info!(
        "Media download complete: {} downloaded, {} failed",
        report.downloaded,
        report.failed
    );

    report
}

/// Download a single attachment to `output_path` with owner-only permissions.
pub async fn download_media_item(
    api: &MastodonApi,
    item: &MediaItem,
    output_path: &Path,
    progress: Option<&MultiProgress>,
) -> Result<PathBuf> {
    let url = item
        .download_url
        .as_deref()
        .ok_or_else(|| Error::Download("attachment has no URL yet".into()))?;

    let response = api.download_file(url).await?;

    let written: Result<()> = async {
        stream_to_file(response, output_path, progress).await?;
        restrict_file(output_path).await?;
        Ok(())
    }
    .await;

    if let Err(e) = written {
        // Don't leave a truncated or world-readable file under a valid-looking name
        discard_partial(output_path).await;
        return Err(e);
    }

    Ok(output_path.to_path_buf())
}

/// Remove whatever was written to `path`, if anything.
async fn discard_partial(path: &Path) {
    if let Err(e) = tokio::fs::remove_file(path).await {
        if e.kind() != std::io::ErrorKind::NotFound {
            tracing::debug!("Could not remove partial file {}: {}", path.display(), e);
        }
    }
}

/// Stream a response body to a new private file.
async fn stream_to_file(
    response: reqwest::Response,
    output_path: &Path,
    progress: Option<&MultiProgress>,
) -> Result<()> {
    let content_length = response.content_length();
    let show_bar = content_length.map(|l| l > PROGRESS_THRESHOLD).unwrap_or(false);

    let bar = match progress {
        Some(multi) if show_bar => Some(multi.add(create_download_bar(content_length.unwrap_or(0)))),
        _ => None,
    };

    let mut file = create_private_file(output_path).await?;
    let mut stream = response.bytes_stream();
    let mut downloaded: u64 = 0;

    while let Some(chunk) = stream.next().await {
        let chunk = chunk.map_err(|e| Error::Download(format!("Stream error: {}", e)))?;
        file.write_all(&chunk).await?;
        downloaded += chunk.len() as u64;

        if let Some(ref pb) = bar {
            pb.set_position(downloaded);
        }
    }

    file.flush().await?;

    if let Some(pb) = bar {
        pb.finish_and_clear();
    }

    Ok(())
}
