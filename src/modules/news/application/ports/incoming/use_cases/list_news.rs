use async_trait::async_trait;

use crate::modules::news::application::domain::entities::NewsWithCategories;
use crate::modules::news::application::ports::outgoing::NewsRepositoryError;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ListNewsError {
    #[error("Query failed: {0}")]
    QueryFailed(String),
}

impl From<NewsRepositoryError> for ListNewsError {
    fn from(err: NewsRepositoryError) -> Self {
        match err {
            NewsRepositoryError::DatabaseError(msg) => ListNewsError::QueryFailed(msg),

            // Listing never reports NotFound (an empty page is valid).
            NewsRepositoryError::NotFound => ListNewsError::QueryFailed("Not found".to_string()),
        }
    }
}

//
// ──────────────────────────────────────────────────────────
// Incoming Port (Use Case)
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait ListNewsUseCase: Send + Sync {
    /// Bounds are checked by the caller.
    async fn execute(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<NewsWithCategories>, ListNewsError>;
}
