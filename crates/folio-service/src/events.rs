//! In-process event bus for collection invalidation.

use tokio::sync::broadcast;
use tracing::debug;

use folio_core::events::DomainEvent;

/// Broadcast channel that repositories publish collection changes on.
///
/// Views subscribe and reload when an event invalidates their copy of
/// the collection.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: broadcast::Sender<DomainEvent>,
}

impl EventBus {
    /// Create a bus buffering up to `capacity` undelivered events per subscriber.
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity.max(1));
        Self { tx }
    }

    /// Publish an event. Having no subscribers is fine.
    pub fn publish(&self, event: DomainEvent) {
        let delivered = self.tx.send(event).unwrap_or(0);
        debug!(delivered, "Published domain event");
    }

    /// Subscribe to events published from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<DomainEvent> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
