use std::fmt;

use super::event::EventEnvelope;

/// Receives every event a store applies.
pub trait Listener<E>: Send + Sync {
    fn on_event(&self, envelope: &EventEnvelope<E>);
}

impl<E, F> Listener<E> for F
where
    F: Fn(&EventEnvelope<E>) + Send + Sync,
{
    fn on_event(&self, envelope: &EventEnvelope<E>) {
        self(envelope)
    }
}

/// Handle returned by `subscribe`, used to unsubscribe later.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Ordered set of listeners; notification follows subscription order.
pub struct Listeners<E> {
    next_id: u64,
    entries: Vec<(SubscriptionId, Box<dyn Listener<E>>)>,
}

impl<E> Listeners<E> {
    pub fn new() -> Self {
        Self {
            next_id: 0,
            entries: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, listener: impl Listener<E> + 'static) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, Box::new(listener)));
        id
    }

    /// Returns false when the id was not subscribed.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.entries.len();
        self.entries.retain(|(entry_id, _)| *entry_id != id);
        self.entries.len() != before
    }

    pub fn notify(&self, envelope: &EventEnvelope<E>) {
        for (_, listener) in &self.entries {
            listener.on_event(envelope);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<E> Default for Listeners<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for Listeners<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("count", &self.entries.len())
            .finish()
    }
}
