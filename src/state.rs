use std::sync::Arc;

use crate::repository::ItemRepository;

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<dyn ItemRepository>,
}

impl AppState {
    pub fn new(repo: Arc<dyn ItemRepository>) -> Self {
        Self { repo }
    }
}
