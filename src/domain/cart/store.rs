use crate::store::core::{Container, EventEnvelope, SubscriptionId};
use super::aggregate::Cart;
use super::commands::CartCommand;
use super::events::CartEvent;
use super::value_objects::{CartItem, CartLine, Customization, LineKey, MenuItemId};

// ============================================================================
// Cart Store
// ============================================================================
//
// Typed façade over the cart container. Ephemeral: owned by the active
// session and never persisted. Every operation is total; acting on a line
// that does not exist is a silent no-op.
//
// ============================================================================

#[derive(Debug, Default)]
pub struct CartStore {
    container: Container<Cart>,
}

impl CartStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Handle a command; returns the events that were applied
    pub fn dispatch(&mut self, command: CartCommand) -> Vec<CartEvent> {
        let events = self.container.dispatch(&command);

        tracing::debug!(
            command = command.name(),
            events = events.len(),
            lines = self.container.state().lines().len(),
            "Cart command handled"
        );

        events
    }

    pub fn add_item(&mut self, item: CartItem) {
        self.dispatch(CartCommand::AddItem(item));
    }

    /// Add `quantity` units at once; zero adds nothing
    pub fn add_units(&mut self, item: CartItem, quantity: u32) {
        self.dispatch(CartCommand::AddUnits { item, quantity });
    }

    pub fn remove_item(&mut self, id: &MenuItemId, customizations: &[Customization]) {
        self.dispatch(CartCommand::RemoveItem(line_key(id, customizations)));
    }

    pub fn increase_qty(&mut self, id: &MenuItemId, customizations: &[Customization]) {
        self.dispatch(CartCommand::IncreaseQty(line_key(id, customizations)));
    }

    pub fn decrease_qty(&mut self, id: &MenuItemId, customizations: &[Customization]) {
        self.dispatch(CartCommand::DecreaseQty(line_key(id, customizations)));
    }

    pub fn clear_cart(&mut self) {
        self.dispatch(CartCommand::ClearCart);
    }

    pub fn items(&self) -> &[CartLine] {
        self.container.state().lines()
    }

    pub fn cart(&self) -> &Cart {
        self.container.state()
    }

    pub fn total_items(&self) -> u64 {
        self.container.state().total_items()
    }

    pub fn total_price(&self) -> f64 {
        self.container.state().total_price()
    }

    pub fn subscribe<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: Fn(&EventEnvelope<CartEvent>) + Send + Sync + 'static,
    {
        self.container.subscribe(listener)
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.container.unsubscribe(id)
    }
}

fn line_key(id: &MenuItemId, customizations: &[Customization]) -> LineKey {
    LineKey::new(id.clone(), customizations.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn item(id: &str, price: f64, customizations: Vec<Customization>) -> CartItem {
        CartItem {
            id: MenuItemId::new(id),
            name: id.to_uppercase(),
            price,
            image_url: format!("https://cdn.example/{id}.png"),
            customizations,
        }
    }

    #[test]
    fn test_same_item_twice_merges() {
        let mut store = CartStore::new();
        let toppings = vec![Customization::topping("Cheese", 1.0)];

        store.add_item(item("burger", 10.0, toppings.clone()));
        store.add_item(item("burger", 10.0, toppings));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 2);
    }

    #[test]
    fn test_different_customizations_make_distinct_lines() {
        let mut store = CartStore::new();

        store.add_item(item("burger", 10.0, vec![Customization::topping("Cheese", 1.0)]));
        store.add_item(item("burger", 10.0, vec![Customization::topping("Bacon", 1.5)]));
        store.add_item(item("burger", 10.0, vec![]));

        assert_eq!(store.items().len(), 3);
        assert_eq!(store.total_items(), 3);
    }

    #[test]
    fn test_empty_customizations_match_each_other() {
        let mut store = CartStore::new();
        store.add_item(item("pizza", 12.0, vec![]));
        store.add_item(item("pizza", 12.0, vec![]));

        assert_eq!(store.items().len(), 1);
        assert_eq!(store.items()[0].quantity, 2);
    }

    #[test]
    fn test_decrease_qty() {
        let mut store = CartStore::new();
        let id = MenuItemId::new("burger");

        store.add_item(item("burger", 10.0, vec![]));
        store.increase_qty(&id, &[]);
        assert_eq!(store.items()[0].quantity, 2);

        store.decrease_qty(&id, &[]);
        assert_eq!(store.items()[0].quantity, 1);

        store.decrease_qty(&id, &[]);
        assert!(store.items().is_empty());

        // Missing line: no-op, no panic
        store.decrease_qty(&id, &[]);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_total_price_scales_customizations_by_quantity() {
        let mut store = CartStore::new();
        let custom = vec![
            Customization::topping("Cheese", 1.0),
            Customization::side("Fries", 2.0),
        ];

        store.add_item(item("burger", 10.0, custom.clone()));
        store.add_item(item("burger", 10.0, custom));

        assert_eq!(store.total_price(), 26.0);
    }

    #[test]
    fn test_total_items_across_ids() {
        let mut store = CartStore::new();
        store.add_item(item("burger", 10.0, vec![]));
        store.add_item(item("burger", 10.0, vec![]));
        store.add_item(item("wrap", 8.0, vec![]));
        store.add_item(item("soda", 2.0, vec![]));

        assert_eq!(store.total_items(), 4);

        store.clear_cart();
        assert_eq!(store.total_items(), 0);
        assert_eq!(store.total_price(), 0.0);
    }

    #[test]
    fn test_remove_item_only_matching_line() {
        let mut store = CartStore::new();
        let cheese = vec![Customization::topping("Cheese", 1.0)];

        store.add_item(item("burger", 10.0, cheese.clone()));
        store.add_item(item("burger", 10.0, vec![]));
        store.remove_item(&MenuItemId::new("burger"), &cheese);

        assert_eq!(store.items().len(), 1);
        assert!(store.items()[0].customizations.is_empty());
    }

    #[test]
    fn test_listeners_see_applied_events() {
        let mut store = CartStore::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        let sink = seen.clone();
        let id = store.subscribe(move |envelope: &EventEnvelope<CartEvent>| {
            sink.lock()
                .unwrap()
                .push((envelope.sequence_number, envelope.event_type.clone()));
        });

        store.add_item(item("burger", 10.0, vec![]));
        store.add_item(item("burger", 10.0, vec![]));
        store.increase_qty(&MenuItemId::new("missing"), &[]);
        store.clear_cart();

        assert!(store.unsubscribe(id));
        store.add_item(item("wrap", 8.0, vec![]));

        let seen = seen.lock().unwrap();
        assert_eq!(
            *seen,
            vec![
                (1, "CartLineAdded".to_string()),
                (2, "CartQuantityChanged".to_string()),
                (3, "CartCleared".to_string()),
            ]
        );
    }
}
