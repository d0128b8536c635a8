pub mod news_repository;

pub use news_repository::{CreateNewsData, NewsChanges, NewsRepository, NewsRepositoryError};
