use crate::domain::cart::{CartItem, Customization, CustomizationKind};
use super::value_objects::MenuItem;

// ============================================================================
// Customization Picker - Item detail selection
// ============================================================================
//
// Holds the toppings/sides chosen for one menu item and the quantity to add.
// Selections are keyed by name within their kind; toggling a selected name
// removes it.
//
// ============================================================================

#[derive(Debug, Clone, PartialEq)]
pub struct CustomizationPicker {
    item: MenuItem,
    toppings: Vec<Customization>,
    sides: Vec<Customization>,
    quantity: u32,
}

impl CustomizationPicker {
    pub fn new(item: MenuItem) -> Self {
        Self {
            item,
            toppings: Vec::new(),
            sides: Vec::new(),
            quantity: 1,
        }
    }

    pub fn item(&self) -> &MenuItem {
        &self.item
    }

    /// Select or deselect; returns whether the customization is now selected
    pub fn toggle(&mut self, customization: Customization) -> bool {
        let selected = match customization.kind {
            CustomizationKind::Topping => &mut self.toppings,
            CustomizationKind::Side => &mut self.sides,
        };

        match selected.iter().position(|c| c.name == customization.name) {
            Some(index) => {
                selected.remove(index);
                false
            }
            None => {
                selected.push(customization);
                true
            }
        }
    }

    pub fn is_selected(&self, kind: CustomizationKind, name: &str) -> bool {
        let selected = match kind {
            CustomizationKind::Topping => &self.toppings,
            CustomizationKind::Side => &self.sides,
        };
        selected.iter().any(|c| c.name == name)
    }

    /// Toppings first, then sides, each in selection order
    pub fn selected(&self) -> Vec<Customization> {
        self.toppings.iter().chain(&self.sides).cloned().collect()
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn set_quantity(&mut self, quantity: u32) {
        self.quantity = quantity.max(1);
    }

    pub fn increment(&mut self) {
        self.quantity = self.quantity.saturating_add(1);
    }

    pub fn decrement(&mut self) {
        self.quantity = self.quantity.saturating_sub(1).max(1);
    }

    pub fn unit_price(&self) -> f64 {
        self.item.price
            + self
                .toppings
                .iter()
                .chain(&self.sides)
                .map(|c| c.price)
                .sum::<f64>()
    }

    pub fn total_price(&self) -> f64 {
        self.unit_price() * f64::from(self.quantity)
    }

    /// Cart candidate with the base price; customization prices stay separate
    pub fn to_cart_item(&self) -> CartItem {
        CartItem {
            id: self.item.id.clone(),
            name: self.item.name.clone(),
            price: self.item.price,
            image_url: self.item.image_url.clone(),
            customizations: self.selected(),
        }
    }
}
