use async_trait::async_trait;

use crate::modules::news::application::domain::entities::NewsId;
use crate::modules::news::application::domain::forms::EditNewsForm;
use crate::modules::news::application::domain::patch_field::PatchField;
use crate::modules::news::application::ports::incoming::use_cases::{
    EditNewsError, EditNewsUseCase,
};
use crate::modules::news::application::ports::outgoing::{
    NewsChanges, NewsRepository, NewsRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct EditNewsService<R>
where
    R: NewsRepository,
{
    news_repository: R,
}

impl<R> EditNewsService<R>
where
    R: NewsRepository,
{
    pub fn new(news_repository: R) -> Self {
        Self { news_repository }
    }
}

#[async_trait]
impl<R> EditNewsUseCase for EditNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, news_id: NewsId, form: EditNewsForm) -> Result<(), EditNewsError> {
        let EditNewsForm {
            title,
            content,
            categories,
        } = form;

        let changes = NewsChanges {
            title: supplied_only(title),
            content: supplied_only(content),
        };

        self.news_repository
            .update_news(news_id, changes, categories)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::NotFound => EditNewsError::NotFound,
                NewsRepositoryError::DatabaseError(msg) => EditNewsError::RepositoryError(msg),
            })
    }
}

/// A column is written only when the form carried a value for it.
fn supplied_only<T>(field: PatchField<T>) -> PatchField<T> {
    match field {
        PatchField::Value(v) => PatchField::Value(v),
        PatchField::Unset | PatchField::Null => PatchField::Unset,
    }
}
