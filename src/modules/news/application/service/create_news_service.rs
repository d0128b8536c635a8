use async_trait::async_trait;

use crate::modules::news::application::domain::entities::NewsId;
use crate::modules::news::application::domain::forms::CreateNewsForm;
use crate::modules::news::application::ports::incoming::use_cases::{
    CreateNewsError, CreateNewsUseCase,
};
use crate::modules::news::application::ports::outgoing::{
    CreateNewsData, NewsRepository, NewsRepositoryError,
};

//
// ──────────────────────────────────────────────────────────
// Service
// ──────────────────────────────────────────────────────────
//

pub struct CreateNewsService<R>
where
    R: NewsRepository,
{
    news_repository: R,
}

impl<R> CreateNewsService<R>
where
    R: NewsRepository,
{
    pub fn new(news_repository: R) -> Self {
        Self { news_repository }
    }
}

#[async_trait]
impl<R> CreateNewsUseCase for CreateNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(&self, form: CreateNewsForm) -> Result<NewsId, CreateNewsError> {
        let data = CreateNewsData {
            title: form.title,
            content: form.content,
            categories: form.categories,
        };

        self.news_repository
            .create_news(data)
            .await
            .map_err(|e| match e {
                NewsRepositoryError::DatabaseError(msg) => CreateNewsError::RepositoryError(msg),
                // Create never looks up an existing row
                NewsRepositoryError::NotFound => CreateNewsError::RepositoryError(
                    "unexpected not found while creating news".to_string(),
                ),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    use crate::modules::news::application::domain::entities::{CategoryId, NewsWithCategories};
    use crate::modules::news::application::domain::patch_field::PatchField;
    use crate::modules::news::application::ports::outgoing::NewsChanges;

    #[derive(Clone)]
    struct MockNewsRepo {
        result: Result<NewsId, NewsRepositoryError>,
        received: Arc<Mutex<Option<CreateNewsData>>>,
    }

    impl MockNewsRepo {
        fn new(result: Result<NewsId, NewsRepositoryError>) -> Self {
            Self {
                result,
                received: Arc::new(Mutex::new(None)),
            }
        }
    }

    #[async_trait]
    impl NewsRepository for MockNewsRepo {
        async fn get_news(
            &self,
            _limit: u64,
            _offset: u64,
        ) -> Result<Vec<NewsWithCategories>, NewsRepositoryError> {
            unimplemented!("not needed for create_news tests")
        }

        async fn create_news(&self, data: CreateNewsData) -> Result<NewsId, NewsRepositoryError> {
            *self.received.lock().unwrap() = Some(data);
            self.result.clone()
        }

        async fn update_news(
            &self,
            _news_id: NewsId,
            _changes: NewsChanges,
            _categories: PatchField<Vec<CategoryId>>,
        ) -> Result<(), NewsRepositoryError> {
            unimplemented!("not needed for create_news tests")
        }
    }

    fn sample_form() -> CreateNewsForm {
        CreateNewsForm {
            title: "Title".to_string(),
            content: "Body".to_string(),
            categories: Some(vec![1, 2]),
        }
    }

    #[tokio::test]
    async fn test_execute_forwards_form_and_returns_id() {
        let repo = MockNewsRepo::new(Ok(42));
        let received = Arc::clone(&repo.received);
        let service = CreateNewsService::new(repo);

        let res = service.execute(sample_form()).await;

        assert_eq!(res, Ok(42));
        assert_eq!(
            received.lock().unwrap().clone(),
            Some(CreateNewsData {
                title: "Title".to_string(),
                content: "Body".to_string(),
                categories: Some(vec![1, 2]),
            })
        );
    }

    #[tokio::test]
    async fn test_execute_maps_database_error() {
        let repo = MockNewsRepo::new(Err(NewsRepositoryError::DatabaseError(
            "insert failed".to_string(),
        )));
        let service = CreateNewsService::new(repo);

        let res = service.execute(sample_form()).await;

        assert_eq!(
            res,
            Err(CreateNewsError::RepositoryError("insert failed".to_string()))
        );
    }

    #[tokio::test]
    async fn test_execute_maps_unexpected_not_found_to_repository_error() {
        let repo = MockNewsRepo::new(Err(NewsRepositoryError::NotFound));
        let service = CreateNewsService::new(repo);

        let res = service.execute(sample_form()).await;

        assert!(matches!(res, Err(CreateNewsError::RepositoryError(_))));
    }
}
