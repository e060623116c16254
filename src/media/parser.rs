//! Media extraction from fetched statuses.

use crate::api::types::{MediaAttachment, Status};
use crate::media::item::{MediaItem, MediaType};

/// Flatten the attachments of `statuses` into download order.
///
/// Order is status order, then attachment order within each status. The
/// index of each item is fixed here, before any download is attempted.
pub fn collect_attachments(statuses: &[Status]) -> Vec<MediaItem> {
    statuses
        .iter()
        .flat_map(|status| {
            status
                .media_attachments
                .iter()
                .map(move |attachment| (status, attachment))
        })
        .enumerate()
        .map(|(index, (status, attachment))| parse_attachment(index, status, attachment))
        .collect()
}

/// Turn one attachment into a MediaItem.
fn parse_attachment(index: usize, status: &Status, attachment: &MediaAttachment) -> MediaItem {
    let download_url = attachment.download_url();
    let extension = download_url
        .and_then(extract_extension_from_url)
        .unwrap_or_else(|| {
            MediaType::from_api(&attachment.media_type)
                .default_extension()
                .to_string()
        });

    MediaItem {
        index,
        status_id: status.id.clone(),
        media_id: attachment.id.clone(),
        download_url: download_url.map(str::to_string),
        file_extension: extension,
    }
}

/// Extract extension from URL path.
fn extract_extension_from_url(url: &str) -> Option<String> {
    // Remove query string and fragment
    let path = url.split(['?', '#']).next()?;

    // Get the last segment
    let filename = path.rsplit('/').next()?;
    let (_, ext) = filename.rsplit_once('.')?;

    // Validate it looks like an extension (1-10 chars, alphanumeric)
    if !ext.is_empty() && ext.len() <= 10 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
        Some(ext.to_lowercase())
    } else {
        None
    }
}
