use event_emitter_rs::EventEmitter;

use super::{CatalogEvent, CatalogEventKind};

/// Queues catalog events and fans them out to registered listeners.
///
/// Listener callbacks run on the emitter's worker threads; `emit_queued`
/// joins them, so every listener has finished when it returns.
pub struct CatalogEmitter {
    event_emitter: EventEmitter,
    events_to_emit: Vec<CatalogEvent>,
}

impl Default for CatalogEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogEmitter {
    pub fn new() -> Self {
        Self {
            event_emitter: EventEmitter::new(),
            events_to_emit: Vec::new(),
        }
    }

    /// Queue an event to be emitted once the current mutation completes.
    pub fn enqueue(&mut self, event: CatalogEvent) {
        self.events_to_emit.push(event);
    }

    /// Register a listener. Returns an id usable with `remove`.
    pub fn on<F>(&mut self, kind: CatalogEventKind, listener: F) -> String
    where
        F: Fn(String) + Send + Sync + 'static,
    {
        self.event_emitter.on(kind.as_str(), listener)
    }

    /// Remove a listener by id. Returns false if it was not registered.
    pub fn remove(&mut self, listener_id: &str) -> bool {
        self.event_emitter.remove_listener(listener_id).is_some()
    }

    /// Emit all queued events in order, waiting for each batch of listeners.
    pub fn emit_queued(&mut self) {
        let events: Vec<_> = self.events_to_emit.drain(..).collect();
        for event in events {
            let handles = self.event_emitter.emit(event.kind.as_str(), event.data);
            for handle in handles {
                if handle.join().is_err() {
                    tracing::warn!(event = %event.kind, "catalog listener panicked");
                }
            }
        }
    }

    /// Number of events queued for emission.
    pub fn queued_len(&self) -> usize {
        self.events_to_emit.len()
    }
}
