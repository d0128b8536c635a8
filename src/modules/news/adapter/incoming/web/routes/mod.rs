pub mod create_news;
pub mod edit_news;
pub mod list_news;

pub use create_news::{create_news_handler, NewsIdResponse};
pub use edit_news::edit_news_handler;
pub use list_news::{list_news_handler, ListNewsQuery};
