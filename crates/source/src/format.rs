use crate::error::SourceError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// The serialization format of an events file or inline event data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventFormat {
    #[default]
    Yaml,
    Json,
    Csv,
}

impl EventFormat {
    /// Guesses the format from a file extension, if it is a known one.
    pub fn from_path(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_lowercase();
        match extension.as_str() {
            "yaml" | "yml" => Some(EventFormat::Yaml),
            "json" => Some(EventFormat::Json),
            "csv" => Some(EventFormat::Csv),
            _ => None,
        }
    }
}

impl FromStr for EventFormat {
    type Err = SourceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "yaml" => Ok(EventFormat::Yaml),
            "json" => Ok(EventFormat::Json),
            "csv" => Ok(EventFormat::Csv),
            other => Err(SourceError::UnknownFormat(other.to_string())),
        }
    }
}
