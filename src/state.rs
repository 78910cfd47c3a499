use std::sync::Arc;

use crate::common::clock::{Clock, SystemClock};
use crate::config::settings::AppConfig;
use crate::infrastructure::db::store::EntityStore;

/// Everything a handler needs, built once at start-up and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: Arc<dyn EntityStore>,
    pub clock: Arc<dyn Clock>,
}

impl AppState {
    pub fn new(config: AppConfig, store: Arc<dyn EntityStore>) -> Self {
        Self::with_clock(config, store, Arc::new(SystemClock))
    }

    pub fn with_clock(config: AppConfig, store: Arc<dyn EntityStore>, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            store,
            clock,
        }
    }
}
