use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How an entry's video is delivered: a direct MP4 file or an embedded player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceType {
    Mp4,
    Embed,
}

impl fmt::Display for SourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceType::Mp4 => write!(f, "mp4"),
            SourceType::Embed => write!(f, "embed"),
        }
    }
}

impl FromStr for SourceType {
    type Err = UnknownSourceType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mp4" => Ok(SourceType::Mp4),
            "embed" => Ok(SourceType::Embed),
            other => Err(UnknownSourceType(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown video source type '{0}', expected 'mp4' or 'embed'")]
pub struct UnknownSourceType(pub String);

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VideoSource {
    pub source_type: SourceType,
    pub source: String,
}
