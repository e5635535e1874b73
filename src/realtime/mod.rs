//! WebSocket metrics broadcaster.
//!
//! Every connection owns its own ticker; nothing is shared between sockets
//! except the [`ConnectionRegistry`] used to report the active count.

mod metrics;
mod registry;
mod session;

pub use metrics::random_snapshot;
pub use registry::{ConnectionGuard, ConnectionRegistry};
pub use session::run_session;

use crate::config::RealtimeConfig;
use std::sync::Arc;
use std::time::Duration;

/// Shared broadcaster settings plus the live connection registry.
#[derive(Clone)]
pub struct Broadcaster {
    pub registry: ConnectionRegistry,
    pub interval: Duration,
    pub greeting: Arc<str>,
}

impl Broadcaster {
    pub fn new(cfg: &RealtimeConfig) -> Self {
        Self {
            registry: ConnectionRegistry::default(),
            interval: cfg.interval(),
            greeting: Arc::from(cfg.greeting.as_str()),
        }
    }

    pub fn active_connections(&self) -> usize {
        self.registry.active()
    }
}
