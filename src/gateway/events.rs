use crate::core::events::DomainEvent;
use crate::core::library::LibraryError;

// EventPublisher delivers catalog change events, the presentation layer re-renders on each one
pub trait EventPublisher: Send {
    fn publish(&self, event: &DomainEvent) -> Result<(), LibraryError>;
}
