use serde::Serialize;

/// Envelope for the system endpoints. The catalog endpoints return bare
/// JSON arrays and never use this.
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiResponse<T> {
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(message.into()),
        }
    }
}

/// Public projection of a movie. Declaration order is serialization order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieDto {
    pub id: i64,
    pub title: String,
    pub year: i32,
    pub thumbnail: String,
    pub description: String,
    pub tags: String,
}

/// Public projection of a show or anime.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesDto {
    pub tv: i64,
    pub title: String,
    pub year: i32,
    pub thumbnail: String,
    pub description: String,
    pub tags: String,
}

#[derive(Debug, Serialize)]
pub struct SystemStatusDto {
    pub name: &'static str,
    pub version: &'static str,
    pub source_mode: String,
    pub uptime_seconds: u64,
    pub movies: usize,
    pub shows: usize,
    pub anime: usize,
}
