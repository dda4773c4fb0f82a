use tracing::info;
use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;
use crate::gateway::events::EventPublisher;

// LogPublisher reports each catalog change through tracing
#[derive(Debug, Clone, Default)]
pub struct LogPublisher {}

impl LogPublisher {
    pub fn new() -> Self {
        Self {}
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError> {
        info!(event_id = event.event_id.as_str(), group = event.group.as_str(), key = event.key.as_str(),
            kind = ?event.kind, "{}", event.name);
        Ok(())
    }
}
