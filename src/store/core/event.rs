use serde::{Deserialize, Serialize};
use uuid::Uuid;
use chrono::{DateTime, Utc};

// ============================================================================
// Event Envelope - Metadata delivered to store listeners
// ============================================================================

/// Generic Event Envelope - wraps an applied domain event with metadata
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EventEnvelope<E> {
    pub event_id: Uuid,
    /// Position of this event in the store's history (starts at 1)
    pub sequence_number: u64,
    pub event_type: String,
    pub event_data: E,
    pub timestamp: DateTime<Utc>,
}

impl<E: DomainEvent> EventEnvelope<E> {
    pub fn new(sequence_number: u64, event_data: E) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            sequence_number,
            event_type: event_data.event_type().to_string(),
            event_data,
            timestamp: Utc::now(),
        }
    }
}

/// Generic Domain Event trait
///
/// Store events are enums, so the type name is resolved per variant.
pub trait DomainEvent: Serialize + for<'de> Deserialize<'de> + Clone + Send + Sync {
    fn event_type(&self) -> &'static str;
}
