use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::news::application::domain::entities::NewsId;
use crate::modules::news::application::domain::forms::CreateNewsForm;
use crate::modules::news::application::ports::incoming::use_cases::CreateNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

//
// ──────────────────────────────────────────────────────────
// Response DTO
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct NewsIdResponse {
    /// Id of the created or edited news item
    #[schema(example = 1)]
    pub id: NewsId,
}

//
// ──────────────────────────────────────────────────────────
// Handler
// ──────────────────────────────────────────────────────────
//

#[utoipa::path(
    post,
    path = "/create",
    tag = "news",
    request_body = CreateNewsForm,
    responses(
        (
            status = 201,
            description = "News created",
            body = inline(SuccessResponse<NewsIdResponse>),
            example = json!({ "success": true, "data": { "id": 1 } })
        ),
        (
            status = 400,
            description = "Malformed body or invalid field",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "INVALID_TITLE",
                    "message": "title length must be between 1 and 255"
                }
            })
        ),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[post("/create")]
pub async fn create_news_handler(
    req: web::Json<CreateNewsForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let mut form = req.into_inner();
    form.normalize();

    if let Err(e) = form.validate() {
        warn!(error = %e, "Rejected create news input");
        return ApiResponse::bad_request(e.code(), &e.to_string());
    }

    match data.news.create.execute(form).await {
        Ok(id) => ApiResponse::created(NewsIdResponse { id }),

        Err(CreateNewsError::RepositoryError(e)) => {
            error!(error = %e, "Repository error creating news");
            ApiResponse::internal_error()
        }
    }
}
