//! Media item representation.

use crate::config::MediaNaming;
use crate::fs::media_filename;

/// Extension used for every attachment under legacy naming.
pub const LEGACY_EXTENSION: &str = "jpg";

/// Type of media content, as declared by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaType {
    Image,
    Gifv,
    Video,
    Audio,
    Unknown,
}

impl MediaType {
    /// Parse Mastodon's attachment `type` field.
    pub fn from_api(kind: &str) -> Self {
        match kind {
            "image" => MediaType::Image,
            "gifv" => MediaType::Gifv,
            "video" => MediaType::Video,
            "audio" => MediaType::Audio,
            _ => MediaType::Unknown,
        }
    }

    /// Fallback extension when the URL carries none.
    pub fn default_extension(&self) -> &'static str {
        match self {
            MediaType::Image => "jpg",
            MediaType::Gifv | MediaType::Video => "mp4",
            MediaType::Audio => "mp3",
            MediaType::Unknown => "bin",
        }
    }
}

/// One attachment to download, in backup order.
#[derive(Debug, Clone)]
pub struct MediaItem {
    /// Position in the flattened attachment sequence; fixes the filename.
    pub index: usize,

    /// Status the attachment belongs to.
    pub status_id: String,

    /// Attachment ID.
    pub media_id: String,

    /// Download URL, if the server has one yet.
    pub download_url: Option<String>,

    /// Extension derived from the URL or media type (without dot).
    pub file_extension: String,
}

impl MediaItem {
    /// Generate the filename for this media item.
    pub fn generate_filename(&self, naming: MediaNaming) -> String {
        match naming {
            MediaNaming::Legacy => media_filename(self.index, LEGACY_EXTENSION),
            MediaNaming::Typed => media_filename(self.index, &self.file_extension),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(index: usize, ext: &str) -> MediaItem {
        MediaItem {
            index,
            status_id: "1".to_string(),
            media_id: "m".to_string(),
            download_url: Some(format!("https://files.example/x.{}", ext)),
            file_extension: ext.to_string(),
        }
    }

    #[test]
    fn test_legacy_names_always_jpg() {
        let video = item(4, "mp4");
        assert_eq!(video.generate_filename(MediaNaming::Legacy), "media_4.jpg");
    }

    #[test]
    fn test_typed_names_use_extension() {
        let video = item(4, "mp4");
        assert_eq!(video.generate_filename(MediaNaming::Typed), "media_4.mp4");
    }

    #[test]
    fn test_media_type_from_api() {
        assert_eq!(MediaType::from_api("gifv"), MediaType::Gifv);
        assert_eq!(MediaType::from_api("audio").default_extension(), "mp3");
        assert_eq!(MediaType::from_api("weird"), MediaType::Unknown);
    }
}
