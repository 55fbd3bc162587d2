// Application state module
// Immutable per-process state shared by every connection

use std::sync::Arc;

use super::types::Config;
use crate::logger::Logger;

/// Application state
pub struct AppState {
    pub config: Config,
    pub logger: Arc<Logger>,
}

impl AppState {
    pub const fn new(config: Config, logger: Arc<Logger>) -> Self {
        Self { config, logger }
    }
}
