//! API response type definitions.
//!
//! Only the fields the backup uses are modelled; serde ignores the rest.

use chrono::{DateTime, Utc};
use serde::Deserialize;

use crate::error::{Error, Result};

/// Error body returned by Mastodon on non-2xx responses.
#[derive(Debug, Deserialize)]
pub struct ApiErrorBody {
    pub error: String,
    pub error_description: Option<String>,
}

/// An account, as returned by verify_credentials, followers, mutes, etc.
#[derive(Debug, Clone, Deserialize)]
pub struct Account {
    pub id: String,
    pub username: String,
    pub display_name: Option<String>,
}

/// A status (post).
#[derive(Debug, Clone, Deserialize)]
pub struct Status {
    pub id: String,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub content: String,
    pub url: Option<String>,
    #[serde(default)]
    pub uri: String,
    #[serde(default)]
    pub media_attachments: Vec<MediaAttachment>,
}

impl Status {
    /// The status id as a number, for use as a pagination cursor.
    pub fn numeric_id(&self) -> Result<u64> {
        self.id
            .parse()
            .map_err(|_| Error::Api(format!("Status id is not numeric: {}", self.id)))
    }

    /// Public URL of the status, falling back to its ActivityPub URI.
    pub fn link(&self) -> &str {
        self.url.as_deref().unwrap_or(&self.uri)
    }
}

/// A media attachment on a status.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaAttachment {
    pub id: String,
    /// `image`, `gifv`, `video`, `audio` or `unknown`.
    #[serde(rename = "type", default)]
    pub media_type: String,
    /// Null while the server is still processing the file.
    pub url: Option<String>,
    /// Original location for media federated from another instance.
    pub remote_url: Option<String>,
}

impl MediaAttachment {
    /// Where to fetch the file from, preferring the local copy.
    pub fn download_url(&self) -> Option<&str> {
        self.url.as_deref().or(self.remote_url.as_deref())
    }
}

/// A user-defined list.
#[derive(Debug, Clone, Deserialize)]
pub struct List {
    pub title: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_status() {
        let status: Status = serde_json::from_value(json!({
            "id": "109876543210",
            "created_at": "2024-03-01T12:30:00.000Z",
            "content": "<p>hello</p>",
            "url": null,
            "uri": "https://m.example/users/alice/statuses/109876543210",
            "visibility": "public",
            "media_attachments": [
                {"id": "1", "type": "image", "url": "https://files.example/a.png", "preview_url": "x"}
            ]
        }))
        .unwrap();

        assert_eq!(status.numeric_id().unwrap(), 109876543210);
        assert_eq!(status.link(), "https://m.example/users/alice/statuses/109876543210");
        assert_eq!(status.media_attachments.len(), 1);
        assert_eq!(status.media_attachments[0].media_type, "image");
    }

    #[test]
    fn test_non_numeric_id() {
        let status: Status = serde_json::from_value(json!({
            "id": "abc",
            "created_at": "2024-03-01T12:30:00Z"
        }))
        .unwrap();

        assert!(status.numeric_id().is_err());
        assert!(status.media_attachments.is_empty());
    }
}
