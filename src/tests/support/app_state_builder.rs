use crate::modules::news::application::news_use_cases::NewsUseCases;
use crate::modules::news::application::ports::incoming::use_cases::{
    CreateNewsUseCase, EditNewsUseCase, ListNewsUseCase,
};
use crate::tests::support::stubs::*;
use crate::AppState;
use actix_web::web;
use std::sync::Arc;

pub struct TestAppStateBuilder {
    news: NewsUseCases,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            news: NewsUseCases {
                create: Arc::new(StubCreateNewsUseCase::repo_error("not used in this test")),
                edit: Arc::new(StubEditNewsUseCase::not_found()),
                list: Arc::new(StubListNewsUseCase::success(vec![])),
            },
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_create_news(mut self, uc: impl CreateNewsUseCase + Send + Sync + 'static) -> Self {
        self.news.create = Arc::new(uc);
        self
    }

    pub fn with_edit_news(mut self, uc: impl EditNewsUseCase + Send + Sync + 'static) -> Self {
        self.news.edit = Arc::new(uc);
        self
    }

    pub fn with_list_news(mut self, uc: impl ListNewsUseCase + Send + Sync + 'static) -> Self {
        self.news.list = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState { news: self.news })
    }
}
