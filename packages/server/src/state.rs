use std::sync::Arc;

use common::ContentStore;

use crate::config::AppConfig;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ContentStore>,
    pub config: AppConfig,
}
