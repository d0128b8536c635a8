use crate::api::schemas::{ErrorDetail, ErrorResponse, SuccessResponse};
use utoipa::OpenApi;

use crate::modules::news::adapter::incoming::web::routes::NewsIdResponse;
use crate::modules::news::application::domain::entities::NewsWithCategories;
use crate::modules::news::application::domain::forms::{CreateNewsForm, EditNewsForm};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "News API",
        version = "1.0.0",
        description = "Create, partially edit and page through news items with their categories"
    ),
    paths(
        crate::modules::news::adapter::incoming::web::routes::create_news::create_news_handler,
        crate::modules::news::adapter::incoming::web::routes::edit_news::edit_news_handler,
        crate::modules::news::adapter::incoming::web::routes::list_news::list_news_handler,
    ),
    components(
        schemas(
            // Response wrappers
            SuccessResponse<NewsIdResponse>,
            ErrorResponse,
            ErrorDetail,

            // News DTOs
            CreateNewsForm,
            EditNewsForm,
            NewsIdResponse,
            NewsWithCategories
        )
    ),
    tags(
        (name = "news", description = "News management endpoints"),
    )
)]
pub struct ApiDoc;
