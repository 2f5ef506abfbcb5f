use serde::{Deserialize, Serialize};

use crate::store::core::Aggregate;
use super::commands::CartCommand;
use super::events::CartEvent;
use super::value_objects::{CartItem, CartLine, Customization, MenuItemId};

// ============================================================================
// Cart Aggregate - Line items of the order in progress
// ============================================================================
//
// Invariant: no two lines share an item id AND an equal customization set.
// Every quantity is >= 1; a line whose quantity would drop to 0 is removed.
//
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn find(&self, id: &MenuItemId, customizations: &[Customization]) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.matches(id, customizations))
    }

    /// Sum of quantities across all lines
    pub fn total_items(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Σ quantity × (base price + customization prices), unrounded
    pub fn total_price(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    fn add_units(&self, item: &CartItem, quantity: u32) -> Vec<CartEvent> {
        if quantity == 0 {
            return vec![];
        }

        match self.find(&item.id, &item.customizations) {
            Some(line) => vec![CartEvent::QuantityChanged {
                key: line.key(),
                quantity: line.quantity.saturating_add(quantity),
            }],
            None => {
                let mut line = CartLine::from_item(item.clone());
                line.quantity = quantity;
                vec![CartEvent::LineAdded(line)]
            }
        }
    }
}

impl Aggregate for Cart {
    type Event = CartEvent;
    type Command = CartCommand;

    fn handle_command(&self, command: &Self::Command) -> Vec<Self::Event> {
        match command {
            CartCommand::AddItem(item) => self.add_units(item, 1),
            CartCommand::AddUnits { item, quantity } => self.add_units(item, *quantity),

            CartCommand::RemoveItem(key) => self
                .find(&key.id, &key.customizations)
                .map(|line| vec![CartEvent::LineRemoved(line.key())])
                .unwrap_or_default(),

            CartCommand::IncreaseQty(key) => self
                .find(&key.id, &key.customizations)
                .map(|line| {
                    vec![CartEvent::QuantityChanged {
                        key: line.key(),
                        quantity: line.quantity.saturating_add(1),
                    }]
                })
                .unwrap_or_default(),

            CartCommand::DecreaseQty(key) => match self.find(&key.id, &key.customizations) {
                Some(line) if line.quantity <= 1 => vec![CartEvent::LineRemoved(line.key())],
                Some(line) => vec![CartEvent::QuantityChanged {
                    key: line.key(),
                    quantity: line.quantity - 1,
                }],
                None => vec![],
            },

            CartCommand::ClearCart if self.lines.is_empty() => vec![],
            CartCommand::ClearCart => vec![CartEvent::Cleared],
        }
    }

    fn apply_event(&mut self, event: &Self::Event) {
        match event {
            CartEvent::LineAdded(line) => {
                self.lines.push(line.clone());
            }
            CartEvent::QuantityChanged { key, quantity } => {
                if let Some(line) = self
                    .lines
                    .iter_mut()
                    .find(|line| line.matches(&key.id, &key.customizations))
                {
                    line.quantity = *quantity;
                }
            }
            CartEvent::LineRemoved(key) => {
                self.lines
                    .retain(|line| !line.matches(&key.id, &key.customizations));
            }
            CartEvent::Cleared => {
                self.lines.clear();
            }
        }
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cart::LineKey;

    fn burger(customizations: Vec<Customization>) -> CartItem {
        CartItem {
            id: MenuItemId::new("burger"),
            name: "Classic Burger".to_string(),
            price: 10.0,
            image_url: "https://cdn.example/burger.png".to_string(),
            customizations,
        }
    }

    fn key(customizations: Vec<Customization>) -> LineKey {
        LineKey::new(MenuItemId::new("burger"), customizations)
    }

    fn dispatch(cart: &mut Cart, command: CartCommand) -> Vec<CartEvent> {
        let events = cart.handle_command(&command);
        for event in &events {
            cart.apply_event(event);
        }
        events
    }

    #[test]
    fn test_add_new_line() {
        let cart = Cart::default();
        let events = cart.handle_command(&CartCommand::AddItem(burger(vec![])));

        assert_eq!(events.len(), 1);
        assert!(matches!(&events[0], CartEvent::LineAdded(line) if line.quantity == 1));
    }

    #[test]
    fn test_add_existing_line_emits_quantity_change() {
        let mut cart = Cart::default();
        dispatch(&mut cart, CartCommand::AddItem(burger(vec![])));

        let events = cart.handle_command(&CartCommand::AddItem(burger(vec![])));
        assert!(matches!(
            &events[0],
            CartEvent::QuantityChanged { quantity: 2, .. }
        ));
    }

    #[test]
    fn test_add_units_is_one_event() {
        let mut cart = Cart::default();

        let events = dispatch(
            &mut cart,
            CartCommand::AddUnits {
                item: burger(vec![]),
                quantity: 1_000_000,
            },
        );
        assert_eq!(events.len(), 1);
        assert_eq!(cart.lines()[0].quantity, 1_000_000);

        let events = dispatch(
            &mut cart,
            CartCommand::AddUnits {
                item: burger(vec![]),
                quantity: 5,
            },
        );
        assert!(matches!(
            &events[0],
            CartEvent::QuantityChanged { quantity: 1_000_005, .. }
        ));
    }

    #[test]
    fn test_add_zero_units_is_noop() {
        let cart = Cart::default();
        let command = CartCommand::AddUnits {
            item: burger(vec![]),
            quantity: 0,
        };
        assert!(cart.handle_command(&command).is_empty());
    }

    #[test]
    fn test_increase_missing_line_is_noop() {
        let cart = Cart::default();
        assert!(cart.handle_command(&CartCommand::IncreaseQty(key(vec![]))).is_empty());
        assert!(cart.handle_command(&CartCommand::RemoveItem(key(vec![]))).is_empty());
        assert!(cart.handle_command(&CartCommand::DecreaseQty(key(vec![]))).is_empty());
    }

    #[test]
    fn test_decrease_to_zero_removes_line() {
        let mut cart = Cart::default();
        dispatch(&mut cart, CartCommand::AddItem(burger(vec![])));

        let events = dispatch(&mut cart, CartCommand::DecreaseQty(key(vec![])));
        assert!(matches!(&events[0], CartEvent::LineRemoved(_)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_removal_uses_set_equality() {
        let mut cart = Cart::default();
        let picked = vec![
            Customization::topping("Cheese", 1.0),
            Customization::side("Fries", 2.0),
        ];
        dispatch(&mut cart, CartCommand::AddItem(burger(picked)));

        let reversed = vec![
            Customization::side("Fries", 2.0),
            Customization::topping("Cheese", 1.0),
        ];
        dispatch(&mut cart, CartCommand::RemoveItem(key(reversed)));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_clear_empty_cart_is_noop() {
        let cart = Cart::default();
        assert!(cart.handle_command(&CartCommand::ClearCart).is_empty());
    }

    #[test]
    fn test_quantity_saturates() {
        let mut cart = Cart::default();
        dispatch(&mut cart, CartCommand::AddItem(burger(vec![])));
        cart.apply_event(&CartEvent::QuantityChanged {
            key: key(vec![]),
            quantity: u32::MAX,
        });

        dispatch(&mut cart, CartCommand::IncreaseQty(key(vec![])));
        assert_eq!(cart.lines()[0].quantity, u32::MAX);
    }

    #[test]
    fn test_replay_matches_live_state() {
        let mut cart = Cart::default();
        let mut history = Vec::new();

        history.extend(dispatch(&mut cart, CartCommand::AddItem(burger(vec![]))));
        history.extend(dispatch(
            &mut cart,
            CartCommand::AddItem(burger(vec![Customization::topping("Bacon", 1.5)])),
        ));
        history.extend(dispatch(&mut cart, CartCommand::IncreaseQty(key(vec![]))));
        history.extend(dispatch(
            &mut cart,
            CartCommand::DecreaseQty(key(vec![Customization::topping("Bacon", 1.5)])),
        ));

        assert_eq!(Cart::replay(&history), cart);
        assert_eq!(cart.total_items(), 2);
    }
}
