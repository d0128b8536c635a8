pub mod news;
pub mod news_categories;
