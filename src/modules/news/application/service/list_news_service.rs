use async_trait::async_trait;

use crate::modules::news::application::domain::entities::NewsWithCategories;
use crate::modules::news::application::ports::incoming::use_cases::{
    ListNewsError, ListNewsUseCase,
};
use crate::modules::news::application::ports::outgoing::NewsRepository;

pub struct ListNewsService<R>
where
    R: NewsRepository,
{
    news_repository: R,
}

impl<R> ListNewsService<R>
where
    R: NewsRepository,
{
    pub fn new(news_repository: R) -> Self {
        Self { news_repository }
    }
}

#[async_trait]
impl<R> ListNewsUseCase for ListNewsService<R>
where
    R: NewsRepository + Send + Sync,
{
    async fn execute(
        &self,
        limit: u64,
        offset: u64,
    ) -> Result<Vec<NewsWithCategories>, ListNewsError> {
        Ok(self.news_repository.get_news(limit, offset).await?)
    }
}
