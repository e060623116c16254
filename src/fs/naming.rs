//! Filename generation and sanitization.

use crate::error::{Error, Result};

/// Sanitize a path component (folder or file name).
///
/// Separators and characters that are invalid on common filesystems are
/// replaced with underscores; traversal patterns and null bytes are rejected.
pub fn sanitize_path_component(name: &str) -> Result<String> {
    // Reject path traversal attempts
    if name.contains("..") {
        return Err(Error::InvalidFilename(format!(
            "Path traversal detected: '{}'",
            name
        )));
    }

    // Reject null bytes
    if name.contains('\0') {
        return Err(Error::InvalidFilename(format!(
            "Null bytes not allowed: '{}'",
            name
        )));
    }

    let sanitized: String = name
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();

    // Reject empty or whitespace-only names
    if sanitized.trim().is_empty() {
        return Err(Error::InvalidFilename(
            "Path component cannot be empty or whitespace-only".to_string(),
        ));
    }

    Ok(sanitized)
}

/// Name of the file an attachment is saved to, e.g. `media_3.jpg`.
pub fn media_filename(index: usize, extension: &str) -> String {
    format!("media_{}.{}", index, extension)
}
