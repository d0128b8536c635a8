use std::sync::Arc;
use std::time::Duration;

use actix_web::dev::Server;
use actix_web::{web, App, HttpServer};
use sea_orm::DatabaseConnection;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::modules::news::adapter::outgoing::NewsRepositoryPostgres;
use crate::modules::news::application::news_use_cases::NewsUseCases;
use crate::modules::news::application::service::{
    CreateNewsService, EditNewsService, ListNewsService,
};
use crate::shared::api::extractor_config::{
    custom_json_config, custom_path_config, custom_query_config,
};
use crate::{init_routes, AppState};

/// Owns what a running server needs to shut down cleanly.
pub struct ServerHandle {
    http: actix_web::dev::ServerHandle,
    db: Arc<DatabaseConnection>,
}

pub fn build_state(db: Arc<DatabaseConnection>, operation_timeout: Duration) -> AppState {
    let news_repo = NewsRepositoryPostgres::new(db, operation_timeout);

    AppState {
        news: NewsUseCases {
            create: Arc::new(CreateNewsService::new(news_repo.clone())),
            edit: Arc::new(EditNewsService::new(news_repo.clone())),
            list: Arc::new(ListNewsService::new(news_repo)),
        },
    }
}

/// Binds the listener and returns the server future together with its handle.
/// The caller drives the future; `ServerHandle::stop` ends it.
#[cfg(not(tarpaulin_include))]
pub fn start(
    config: &AppConfig,
    db: Arc<DatabaseConnection>,
) -> std::io::Result<(Server, ServerHandle)> {
    let state = build_state(Arc::clone(&db), config.database.operation_timeout());
    let db_for_server = Arc::clone(&db);
    let bind_address = config.bind_address();

    let server = HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .configure(init_routes)
    })
    .disable_signals()
    .shutdown_timeout(config.shutdown_timeout_secs)
    .bind(&bind_address)?
    .run();

    info!(address = %bind_address, "Server listening");

    let handle = ServerHandle {
        http: server.handle(),
        db,
    };

    Ok((server, handle))
}

impl ServerHandle {
    /// Stops accepting connections, drains in-flight requests up to the
    /// shutdown timeout, then closes the pool.
    #[cfg(not(tarpaulin_include))]
    pub async fn stop(self) {
        info!("Stopping HTTP server");
        self.http.stop(true).await;
        close_pool(&self.db).await;
    }
}

pub async fn close_pool(db: &DatabaseConnection) -> bool {
    match db.close_by_ref().await {
        Ok(()) => {
            info!("Database pool closed");
            true
        }
        Err(e) => {
            error!(error = %e, "Failed to close database pool");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test};
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult};
    use serde_json::{json, Value};

    use crate::modules::news::adapter::outgoing::sea_orm_entity::{news, news_categories};
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::stubs::{
        StubCreateNewsUseCase, StubEditNewsUseCase, StubListNewsUseCase,
    };

    #[actix_web::test]
    async fn test_close_pool_closes_shared_connection() {
        let db = Arc::new(MockDatabase::new(DatabaseBackend::Postgres).into_connection());
        let shared = Arc::clone(&db);

        assert!(close_pool(&shared).await);
    }

    #[actix_web::test]
    async fn test_init_routes_serves_every_news_endpoint() {
        let app_state = TestAppStateBuilder::default()
            .with_create_news(StubCreateNewsUseCase::success(9))
            .with_edit_news(StubEditNewsUseCase::success())
            .with_list_news(StubListNewsUseCase::success(vec![]))
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(custom_json_config())
                .app_data(custom_query_config())
                .app_data(custom_path_config())
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/create")
            .set_json(json!({ "title": "T", "content": "C" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::CREATED);

        let req = test::TestRequest::patch()
            .uri("/edit/9")
            .set_json(json!({ "content": "D" }))
            .to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/list").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn test_build_state_wires_postgres_repository() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            // insert news ... returning
            .append_query_results([vec![news::Model {
                id: 21,
                title: "Medicine".to_string(),
                content: "Body".to_string(),
            }]])
            // insert links
            .append_exec_results([MockExecResult {
                last_insert_id: 0,
                rows_affected: 2,
            }])
            // list: page, then links
            .append_query_results([vec![news::Model {
                id: 21,
                title: "Medicine".to_string(),
                content: "Body".to_string(),
            }]])
            .append_query_results([vec![
                news_categories::Model {
                    news_id: 21,
                    category_id: 1,
                },
                news_categories::Model {
                    news_id: 21,
                    category_id: 4,
                },
            ]])
            .into_connection();

        let state = build_state(Arc::new(db), Duration::from_secs(5));

        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(state))
                .app_data(custom_json_config())
                .configure(init_routes),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/create")
            .set_json(json!({ "title": " Medicine ", "content": "Body", "categories": [4, 1] }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(body["data"]["id"], 21);

        let req = test::TestRequest::get().uri("/list?limit=1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body["data"],
            json!([{ "id": 21, "title": "Medicine", "content": "Body", "categories": [1, 4] }])
        );
    }
}
