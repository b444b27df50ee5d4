use serde::{Deserialize, Serialize};

use super::video::VideoSource;

/// A standalone film entry as authored in the content store.
///
/// `draft` defaults to false when the document omits it; every other field
/// is required and a document missing one is rejected as a whole.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub thumbnail: String,
    pub description: String,
    pub tags: String,
    #[serde(default)]
    pub draft: bool,
    pub video: VideoSource,
}
