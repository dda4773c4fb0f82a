use std::sync::{Arc, Mutex, MutexGuard};
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;
use crate::gateway::logs::publisher::LogPublisher;

// MemoryPublisher queues events until drained; clones share the same queue so the
// presentation layer can keep one handle while the catalog owns another. Every event
// is also reported to the logs.
#[derive(Debug, Clone, Default)]
pub struct MemoryPublisher {
    pending: Arc<Mutex<Vec<DomainEvent>>>,
    logs: LogPublisher,
}

impl MemoryPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes and returns the events published since the last drain.
    pub fn drain(&self) -> Result<Vec<DomainEvent>, LibraryError> {
        Ok(self.lock()?.drain(..).collect())
    }

    pub fn pending(&self) -> Result<usize, LibraryError> {
        Ok(self.lock()?.len())
    }

    fn lock(&self) -> Result<MutexGuard<'_, Vec<DomainEvent>>, LibraryError> {
        self.pending.lock().map_err(|err| LibraryError::runtime(
            format!("publisher lock poisoned {:?}", err).as_str(), None))
    }
}

impl EventPublisher for MemoryPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        self.logs.publish(event)?;
        self.lock()?.push(event.clone());
        Ok(())
    }
}
