use async_trait::async_trait;

use crate::modules::news::application::domain::entities::{
    CategoryId, NewsId, NewsWithCategories,
};
use crate::modules::news::application::domain::patch_field::PatchField;

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateNewsData {
    pub title: String,
    pub content: String,

    /// None and `Some(vec![])` both insert no links.
    pub categories: Option<Vec<CategoryId>>,
}

/// The updatable columns of a news row.
/// Only `Value` fields end up in the UPDATE statement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewsChanges {
    pub title: PatchField<String>,
    pub content: PatchField<String>,
}

impl NewsChanges {
    pub fn is_empty(&self) -> bool {
        !self.title.is_value() && !self.content.is_value()
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NewsRepositoryError {
    #[error("News not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port (every call is one transaction)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait NewsRepository: Send + Sync {
    /// Page ordered by id ascending. An empty page is not an error.
    async fn get_news(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<NewsWithCategories>, NewsRepositoryError>;

    /// Insert the row and its links, returning the generated id.
    async fn create_news(&self, data: CreateNewsData) -> Result<NewsId, NewsRepositoryError>;

    /// Apply `changes` to the row and, when `categories` is a Value,
    /// replace the whole link set with it (delete-then-insert).
    /// Empty changes with Unset categories is a successful no-op.
    async fn update_news(
        &self,
        news_id: NewsId,
        changes: NewsChanges,
        categories: PatchField<Vec<CategoryId>>,
    ) -> Result<(), NewsRepositoryError>;
}
