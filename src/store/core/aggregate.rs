use super::event::DomainEvent;

// ============================================================================
// Aggregate Pattern - Reducer Core
// ============================================================================
//
// Key Principles:
// 1. Commands express intent, they never touch state directly
// 2. Events describe what changed; state only changes by applying them
// 3. A command that changes nothing produces no events
// 4. State can always be rebuilt by replaying its events
//
// This is the GENERIC aggregate trait shared by every store state.
//
// ============================================================================

/// Generic Aggregate trait - every store state implements this
///
/// Type Parameters:
/// - `Event`: The domain event type applied to this state
/// - `Command`: The command type accepted by this state
pub trait Aggregate: Default + Send {
    type Event: DomainEvent;
    type Command;

    /// Decide which events a command produces (pure, no side effects)
    fn handle_command(&self, command: &Self::Command) -> Vec<Self::Event>;

    /// Apply a single event to the state
    fn apply_event(&mut self, event: &Self::Event);

    /// Rebuild state by replaying events onto the default state
    fn replay<'a, I>(events: I) -> Self
    where
        I: IntoIterator<Item = &'a Self::Event>,
        Self::Event: 'a,
    {
        let mut aggregate = Self::default();
        for event in events {
            aggregate.apply_event(event);
        }
        aggregate
    }
}
