mod create_news;
mod edit_news;
mod list_news;

pub use create_news::{CreateNewsError, CreateNewsUseCase};
pub use edit_news::{EditNewsError, EditNewsUseCase};
pub use list_news::{ListNewsError, ListNewsUseCase};
