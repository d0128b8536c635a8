use async_trait::async_trait;

use crate::modules::news::application::domain::entities::{NewsId, NewsWithCategories};
use crate::modules::news::application::domain::forms::{CreateNewsForm, EditNewsForm};
use crate::modules::news::application::ports::incoming::use_cases::{
    CreateNewsError, CreateNewsUseCase, EditNewsError, EditNewsUseCase, ListNewsError,
    ListNewsUseCase,
};

/* --------------------------------------------------
 * Create
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubCreateNewsUseCase {
    result: Result<NewsId, CreateNewsError>,
}

impl StubCreateNewsUseCase {
    pub fn success(id: NewsId) -> Self {
        Self { result: Ok(id) }
    }

    pub fn repo_error(msg: &str) -> Self {
        Self {
            result: Err(CreateNewsError::RepositoryError(msg.to_string())),
        }
    }
}

#[async_trait]
impl CreateNewsUseCase for StubCreateNewsUseCase {
    async fn execute(&self, _form: CreateNewsForm) -> Result<NewsId, CreateNewsError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * Edit
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubEditNewsUseCase {
    result: Result<(), EditNewsError>,
}

impl StubEditNewsUseCase {
    pub fn success() -> Self {
        Self { result: Ok(()) }
    }

    pub fn not_found() -> Self {
        Self {
            result: Err(EditNewsError::NotFound),
        }
    }
}

#[async_trait]
impl EditNewsUseCase for StubEditNewsUseCase {
    async fn execute(&self, _news_id: NewsId, _form: EditNewsForm) -> Result<(), EditNewsError> {
        self.result.clone()
    }
}

/* --------------------------------------------------
 * List
 * -------------------------------------------------- */

#[derive(Clone)]
pub struct StubListNewsUseCase {
    result: Result<Vec<NewsWithCategories>, ListNewsError>,
}

impl StubListNewsUseCase {
    pub fn success(news: Vec<NewsWithCategories>) -> Self {
        Self { result: Ok(news) }
    }
}

#[async_trait]
impl ListNewsUseCase for StubListNewsUseCase {
    async fn execute(
        &self,
        _limit: u64,
        _offset: u64,
    ) -> Result<Vec<NewsWithCategories>, ListNewsError> {
        self.result.clone()
    }
}
