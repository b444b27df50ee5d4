use serde::{Deserialize, Serialize};

use super::video::VideoSource;

/// One episode, keyed by `(tv, se, ep)` within its namespace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub ep: i64,
    pub tv: i64,
    pub se: i64,
    pub title: String,
    pub duration: String,
    #[serde(default)]
    pub draft: bool,
    pub video: VideoSource,
}
