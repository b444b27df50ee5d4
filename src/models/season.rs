use serde::{Deserialize, Serialize};

/// One season of a series, keyed by `(tv, se)` within its namespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Season {
    pub tv: i64,
    pub se: i64,
    #[serde(default)]
    pub draft: bool,
}
