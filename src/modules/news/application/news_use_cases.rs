use std::sync::Arc;

use crate::modules::news::application::ports::incoming::use_cases::{
    CreateNewsUseCase, EditNewsUseCase, ListNewsUseCase,
};

#[derive(Clone)]
pub struct NewsUseCases {
    pub create: Arc<dyn CreateNewsUseCase + Send + Sync>,
    pub edit: Arc<dyn EditNewsUseCase + Send + Sync>,
    pub list: Arc<dyn ListNewsUseCase + Send + Sync>,
}
