//! Error types for the mastodon-backup application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
///
/// Everything that reaches `main` through this type is fatal. Failures scoped
/// to a single category or attachment are caught by the backup pipeline and
/// never surface here.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // API errors
    #[error("API error: {0}")]
    Api(String),

    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Rate limited by the server")]
    RateLimited,

    // Download errors
    #[error("Download failed: {0}")]
    Download(String),

    // File system errors
    #[error("Could not create backup directory {}: {source}", path.display())]
    OutputDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid filename (path traversal attempt): {0}")]
    InvalidFilename(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // HTTP errors
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    // URL parsing errors
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    /// The run completed, even if some categories or attachments failed.
    pub const SUCCESS: u8 = 0;
    /// Setup failed before any backup work started.
    pub const FATAL: u8 = 1;
}
