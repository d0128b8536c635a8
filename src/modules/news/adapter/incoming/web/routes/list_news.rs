use actix_web::{get, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::IntoParams;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::news::application::domain::entities::NewsWithCategories;
use crate::modules::news::application::ports::incoming::use_cases::ListNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

pub const DEFAULT_LIMIT: i64 = 10;
pub const MIN_LIMIT: i64 = 1;
pub const MAX_LIMIT: i64 = 100;

//
// ──────────────────────────────────────────────────────────
// Query DTO
// ──────────────────────────────────────────────────────────
//

/// Signed so that negative input reaches the range check with a clear message.
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListNewsQuery {
    /// Page size, 1..=100 (default 10)
    #[param(example = 10)]
    pub limit: Option<i64>,

    /// Rows to skip, >= 0 (default 0)
    #[param(example = 0)]
    pub offset: Option<i64>,
}

impl ListNewsQuery {
    pub fn page(&self) -> Result<(u64, u64), String> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT);
        let offset = self.offset.unwrap_or(0);

        if limit < MIN_LIMIT {
            return Err(format!("limit must be greater or equal {MIN_LIMIT}"));
        }
        if limit > MAX_LIMIT {
            return Err(format!("limit must be less or equal to {MAX_LIMIT}"));
        }
        if offset < 0 {
            return Err("offset cannot be negative".to_string());
        }

        Ok((limit as u64, offset as u64))
    }
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    get,
    path = "/list",
    tag = "news",
    params(ListNewsQuery),
    responses(
        (
            status = 200,
            description = "Page of news ordered by id, each with its categories",
            body = inline(SuccessResponse<Vec<NewsWithCategories>>),
            example = json!({
                "success": true,
                "data": [
                    { "id": 1, "title": "Medicine", "content": "New treatment approved", "categories": [1, 2] },
                    { "id": 2, "title": "Sport", "content": "Final tonight", "categories": [] }
                ]
            })
        ),
        (
            status = 400,
            description = "limit or offset out of range",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "INVALID_PAGINATION", "message": "limit must be less or equal to 100" }
            })
        ),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[get("/list")]
pub async fn list_news_handler(
    query: web::Query<ListNewsQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (limit, offset) = match query.page() {
        Ok(page) => page,
        Err(msg) => {
            warn!(limit = ?query.limit, offset = ?query.offset, "Rejected pagination");
            return ApiResponse::bad_request("INVALID_PAGINATION", &msg);
        }
    };

    match data.news.list.execute(limit, offset).await {
        Ok(news) => ApiResponse::success(news),

        Err(ListNewsError::QueryFailed(e)) => {
            error!(limit, offset, error = %e, "Failed to list news");
            ApiResponse::internal_error()
        }
    }
}
