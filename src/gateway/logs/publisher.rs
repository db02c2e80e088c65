use crate::core::events::DomainEvent;
use crate::core::library::LibraryResult;
use crate::gateway::events::EventPublisher;
use crate::utils::date::format_timestamp;

// LogPublisher writes every domain event as a structured tracing record.
#[derive(Debug)]
pub(crate) struct LogPublisher {
    topic: String,
}

impl LogPublisher {
    pub(crate) fn new(topic: &str) -> Self {
        Self {
            topic: topic.to_string(),
        }
    }
}

impl EventPublisher for LogPublisher {
    fn publish(&self, event: &DomainEvent) -> LibraryResult<()> {
        let metadata = serde_json::to_string(&event.metadata)?;
        tracing::info!(
            topic = self.topic.as_str(),
            event_id = event.event_id.as_str(),
            name = event.name.as_str(),
            group = event.group.as_str(),
            key = event.key.as_str(),
            kind = ?event.kind,
            metadata = metadata.as_str(),
            data = event.json_data.as_str(),
            at = format_timestamp(event.created_at).as_str(),
            "domain event");
        Ok(())
    }
}

#[derive(Debug)]
pub(crate) struct NoopPublisher;

impl EventPublisher for NoopPublisher {
    fn publish(&self, _event: &DomainEvent) -> LibraryResult<()> {
        Ok(())
    }
}
