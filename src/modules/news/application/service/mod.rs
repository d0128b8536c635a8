mod create_news_service;
mod edit_news_service;
mod list_news_service;

pub use create_news_service::CreateNewsService;
pub use edit_news_service::EditNewsService;
pub use list_news_service::ListNewsService;
