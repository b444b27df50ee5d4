use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the two series namespaces an entry belongs to.
///
/// Content documents never carry this; in file mode it comes from the
/// collection directory, in database mode from the `kind` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Show,
    Anime,
}

impl fmt::Display for SeriesKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeriesKind::Show => write!(f, "show"),
            SeriesKind::Anime => write!(f, "anime"),
        }
    }
}

impl FromStr for SeriesKind {
    type Err = UnknownSeriesKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "show" => Ok(SeriesKind::Show),
            "anime" => Ok(SeriesKind::Anime),
            other => Err(UnknownSeriesKind(other.to_string())),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown series kind '{0}', expected 'show' or 'anime'")]
pub struct UnknownSeriesKind(pub String);

/// A show or anime entry. `tv` is the catalog id, unique within its kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub tv: i64,
    pub title: String,
    pub description: String,
    pub thumbnail: String,
    pub year: i32,
    pub tags: String,
    #[serde(default)]
    pub draft: bool,
}
