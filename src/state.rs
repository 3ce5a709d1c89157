use std::sync::Arc;

use crate::{db::DbPool, repository::category::CategoryRepository, services::category::CategoryService};

// Todo lo que comparten los handlers; se construye una sola vez en el arranque
#[derive(Clone)]
pub struct AppState {
    pub categories: CategoryService,
    pub api_key: Arc<str>,
}

impl AppState {
    pub fn new(pool: DbPool, api_key: impl Into<Arc<str>>) -> Self {
        Self {
            categories: CategoryService::new(CategoryRepository::new(), pool),
            api_key: api_key.into(),
        }
    }
}
