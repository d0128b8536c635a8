use actix_web::{route, web, Responder};
use tracing::{error, warn};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::news::adapter::incoming::web::routes::NewsIdResponse;
use crate::modules::news::application::domain::entities::NewsId;
use crate::modules::news::application::domain::forms::EditNewsForm;
use crate::modules::news::application::ports::incoming::use_cases::EditNewsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[utoipa::path(
    post,
    path = "/edit/{id}",
    tag = "news",
    params(("id" = i64, Path, description = "News id", example = 1)),
    request_body = EditNewsForm,
    responses(
        (
            status = 200,
            description = "News edited; omitted fields are left untouched",
            body = inline(SuccessResponse<NewsIdResponse>),
            example = json!({ "success": true, "data": { "id": 1 } })
        ),
        (
            status = 400,
            description = "Invalid id, empty body or invalid field",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": { "code": "EMPTY_BODY", "message": "body cannot be empty" }
            })
        ),
        (status = 404, description = "News not found", body = ErrorResponse),
        (status = 500, description = "Storage failure", body = ErrorResponse)
    )
)]
#[route("/edit/{id}", method = "POST", method = "PATCH")]
pub async fn edit_news_handler(
    path: web::Path<NewsId>,
    req: web::Json<EditNewsForm>,
    data: web::Data<AppState>,
) -> impl Responder {
    let news_id = path.into_inner();
    if news_id <= 0 {
        warn!(news_id, "Rejected non-positive news id");
        return ApiResponse::bad_request("INVALID_ID", "id must be a positive integer");
    }

    let mut form = req.into_inner();
    form.normalize();

    if let Err(e) = form.validate() {
        warn!(news_id, error = %e, "Rejected edit news input");
        return ApiResponse::bad_request(e.code(), &e.to_string());
    }

    match data.news.edit.execute(news_id, form).await {
        Ok(()) => ApiResponse::success(NewsIdResponse { id: news_id }),

        Err(EditNewsError::NotFound) => ApiResponse::not_found("NEWS_NOT_FOUND", "News not found"),

        Err(EditNewsError::RepositoryError(e)) => {
            error!(news_id, error = %e, "Repository error editing news");
            ApiResponse::internal_error()
        }
    }
}
