// src/api/schemas.rs
use serde::Serialize;
use utoipa::ToSchema;

/// Envelope for every 2xx news response. `data` is the created id, the
/// edited id, or the requested page of news.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope for every 4xx and 5xx news response, including extractor
/// rejections.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Machine-readable code such as `INVALID_TITLE`, `INVALID_CATEGORY`,
    /// `EMPTY_BODY`, `INVALID_PAGINATION` or `NEWS_NOT_FOUND`.
    #[schema(example = "NEWS_NOT_FOUND")]
    pub code: String,

    #[schema(example = "News not found")]
    pub message: String,
}
