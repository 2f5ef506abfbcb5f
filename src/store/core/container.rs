use std::fmt;

use super::aggregate::Aggregate;
use super::event::EventEnvelope;
use super::listener::{Listener, Listeners, SubscriptionId};

// ============================================================================
// Container - Owned state + dispatch + listeners
// ============================================================================
//
// Orchestrates: Command → Aggregate → Events → apply → Listeners
//
// ============================================================================

pub struct Container<A: Aggregate> {
    state: A,
    sequence: u64,
    listeners: Listeners<A::Event>,
}

impl<A: Aggregate> Container<A> {
    pub fn new(state: A) -> Self {
        Self {
            state,
            sequence: 0,
            listeners: Listeners::new(),
        }
    }

    pub fn state(&self) -> &A {
        &self.state
    }

    /// Number of events applied since the container was created
    pub fn sequence(&self) -> u64 {
        self.sequence
    }

    /// Handle a command, apply the resulting events and notify listeners
    pub fn dispatch(&mut self, command: &A::Command) -> Vec<A::Event> {
        let events = self.state.handle_command(command);

        for event in &events {
            self.state.apply_event(event);
            self.sequence += 1;

            if !self.listeners.is_empty() {
                let envelope = EventEnvelope::new(self.sequence, event.clone());
                self.listeners.notify(&envelope);
            }
        }

        events
    }

    pub fn subscribe(&mut self, listener: impl Listener<A::Event> + 'static) -> SubscriptionId {
        self.listeners.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.listeners.unsubscribe(id)
    }
}

impl<A: Aggregate> Default for Container<A> {
    fn default() -> Self {
        Self::new(A::default())
    }
}

impl<A: Aggregate + fmt::Debug> fmt::Debug for Container<A> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Container")
            .field("state", &self.state)
            .field("sequence", &self.sequence)
            .field("listeners", &self.listeners)
            .finish()
    }
}
