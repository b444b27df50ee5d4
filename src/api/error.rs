use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::fmt;

use super::ApiResponse;
use crate::catalog::CatalogError;

/// The catalog endpoints have no structured error contract: every failure
/// below them surfaces as an opaque 500, with the cause in the logs only.
#[derive(Debug)]
pub enum ApiError {
    Catalog(CatalogError),

    InternalError(String),
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Catalog(err) => write!(f, "Catalog error: {}", err),
            ApiError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            ApiError::Catalog(err) => {
                tracing::error!("Catalog error: {}", err);
            }
            ApiError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
            }
        }

        let body = ApiResponse::<()>::error("An internal error occurred");
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::InternalError(err.to_string())
    }
}
