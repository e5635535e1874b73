use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Instant;
use tracing::{debug, info};
use uuid::Uuid;

/// Open sockets keyed by connection id.
#[derive(Clone, Default)]
pub struct ConnectionRegistry {
    inner: Arc<Mutex<HashMap<Uuid, Instant>>>,
}

impl ConnectionRegistry {
    /// Registers a new connection. It stays registered until the guard is dropped.
    pub fn register(&self) -> ConnectionGuard {
        let id = Uuid::new_v4();
        let active = {
            let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            map.insert(id, Instant::now());
            map.len()
        };
        if active == 1 {
            info!(connection_id = %id, "Metrics broadcaster has a client");
        }
        debug!(connection_id = %id, active, "WebSocket connection registered");
        ConnectionGuard {
            id,
            registry: self.clone(),
        }
    }

    pub fn active(&self) -> usize {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn release(&self, id: Uuid) {
        let (opened_at, active) = {
            let mut map = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            (map.remove(&id), map.len())
        };
        let lived_ms = opened_at.map_or(0, |at| at.elapsed().as_millis());
        debug!(connection_id = %id, active, lived_ms, "WebSocket connection released");
        if active == 0 {
            info!("Metrics broadcaster has no clients");
        }
    }
}

/// Deregisters its connection on drop.
pub struct ConnectionGuard {
    id: Uuid,
    registry: ConnectionRegistry,
}

impl ConnectionGuard {
    pub fn id(&self) -> Uuid {
        self.id
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.registry.release(self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guards_track_the_active_count() {
        let registry = ConnectionRegistry::default();
        assert_eq!(registry.active(), 0);

        let first = registry.register();
        let second = registry.register();
        assert_ne!(first.id(), second.id());
        assert_eq!(registry.active(), 2);

        drop(first);
        assert_eq!(registry.active(), 1);
        drop(second);
        assert_eq!(registry.active(), 0);
    }

    #[test]
    fn clones_share_state() {
        let registry = ConnectionRegistry::default();
        let view = registry.clone();
        let _guard = registry.register();
        assert_eq!(view.active(), 1);
    }
}
