// Application state module
// Holds the loaded configuration and the shared store handle

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use super::types::Config;
use crate::kv::KvStore;

/// Application state shared across connections
pub struct AppState {
    pub config: Config,
    /// External durable key-value store capability
    pub kv: Arc<dyn KvStore>,

    // Cached config value for fast access without parsing
    pub cached_access_log: AtomicBool,
}

impl AppState {
    /// Create `AppState` from a loaded config and a store implementation
    pub fn new(config: Config, kv: Arc<dyn KvStore>) -> Self {
        let cached_access_log = AtomicBool::new(config.logging.access_log);
        Self {
            config,
            kv,
            cached_access_log,
        }
    }
}
