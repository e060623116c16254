//! Configuration structures and loading logic.

use crate::config::modes::MediaNaming;
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default root under which backup directories are created.
pub const DEFAULT_OUTPUT_DIRECTORY: &str = "./out";

/// Default number of entities requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 40;

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub mastodon: MastodonConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Instance and credential configuration.
///
/// Both fields default to empty so that a missing key is reported by
/// validation rather than as a parse error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MastodonConfig {
    /// Base URL of the instance, e.g. `https://mastodon.social`.
    #[serde(default)]
    pub api_base_url: String,

    /// OAuth access token with read scopes.
    #[serde(default)]
    pub access_token: String,
}

/// Backup options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Root directory for backups.
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Entities requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Fetch only the most recent N statuses instead of paginating through all.
    #[serde(default)]
    pub status_limit: Option<u32>,

    /// How attachment files are named.
    #[serde(default)]
    pub media_names: MediaNaming,

    /// Whether to download media attachments.
    #[serde(default = "default_true")]
    pub download_media: bool,

    /// Whether to show spinners and progress bars.
    #[serde(default = "default_true")]
    pub show_progress: bool,
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            output_directory: None,
            page_size: DEFAULT_PAGE_SIZE,
            status_limit: None,
            media_names: MediaNaming::default(),
            download_media: true,
            show_progress: true,
        }
    }
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective root directory for backups.
    pub fn output_directory(&self) -> PathBuf {
        self.options
            .output_directory
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIRECTORY))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_full_config() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[mastodon]
api_base_url = "https://mastodon.example"
access_token = "abc"

[options]
output_directory = "/tmp/backups"
page_size = 20
media_names = "typed"
download_media = false
"#
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.mastodon.api_base_url, "https://mastodon.example");
        assert_eq!(config.mastodon.access_token, "abc");
        assert_eq!(config.options.page_size, 20);
        assert_eq!(config.options.media_names, MediaNaming::Typed);
        assert!(!config.options.download_media);
        assert!(config.options.show_progress);
        assert_eq!(config.output_directory(), PathBuf::from("/tmp/backups"));
    }

    #[test]
    fn test_missing_keys_default_to_empty() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mastodon]\napi_base_url = \"https://m.example\"").unwrap();

        let config = Config::load(file.path()).unwrap();
        assert!(config.mastodon.access_token.is_empty());
        assert_eq!(config.options.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(
            config.output_directory(),
            PathBuf::from(DEFAULT_OUTPUT_DIRECTORY)
        );
    }

    #[test]
    fn test_missing_file() {
        let err = Config::load(Path::new("/nonexistent/config.toml")).unwrap_err();
        assert!(matches!(err, Error::Config(_)));
    }

    #[test]
    fn test_invalid_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[mastodon\napi_base_url = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, Error::TomlParse(_)));
    }
}
