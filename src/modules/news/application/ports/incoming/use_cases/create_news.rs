use async_trait::async_trait;

use crate::modules::news::application::domain::entities::NewsId;
use crate::modules::news::application::domain::forms::CreateNewsForm;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CreateNewsError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait CreateNewsUseCase: Send + Sync {
    /// Expects a normalized, validated form.
    async fn execute(&self, form: CreateNewsForm) -> Result<NewsId, CreateNewsError>;
}
