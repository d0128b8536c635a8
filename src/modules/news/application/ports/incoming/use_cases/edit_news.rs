use async_trait::async_trait;

use crate::modules::news::application::domain::entities::NewsId;
use crate::modules::news::application::domain::forms::EditNewsForm;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EditNewsError {
    #[error("News not found")]
    NotFound,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait EditNewsUseCase: Send + Sync {
    /// Expects a normalized, validated form.
    async fn execute(&self, news_id: NewsId, form: EditNewsForm) -> Result<(), EditNewsError>;
}
