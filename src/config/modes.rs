//! Media naming mode definitions.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How downloaded attachments are named on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaNaming {
    /// `media_{i}.jpg` for every attachment, whatever its type (default).
    #[default]
    Legacy,
    /// `media_{i}.{ext}` with the extension taken from the URL or media type.
    Typed,
}

impl fmt::Display for MediaNaming {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaNaming::Legacy => write!(f, "legacy"),
            MediaNaming::Typed => write!(f, "typed"),
        }
    }
}

impl FromStr for MediaNaming {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "legacy" => Ok(MediaNaming::Legacy),
            "typed" => Ok(MediaNaming::Typed),
            _ => Err(format!("Unknown media naming mode: {}", s)),
        }
    }
}
