use super::value_objects::{CartItem, LineKey};

// ============================================================================
// Cart Commands - Represent user intent
// ============================================================================

#[derive(Debug, Clone)]
pub enum CartCommand {
    AddItem(CartItem),
    /// Add `quantity` units of one item in a single step
    AddUnits { item: CartItem, quantity: u32 },
    RemoveItem(LineKey),
    IncreaseQty(LineKey),
    DecreaseQty(LineKey),
    ClearCart,
}

impl CartCommand {
    pub fn name(&self) -> &'static str {
        match self {
            CartCommand::AddItem(_) => "add_item",
            CartCommand::AddUnits { .. } => "add_units",
            CartCommand::RemoveItem(_) => "remove_item",
            CartCommand::IncreaseQty(_) => "increase_qty",
            CartCommand::DecreaseQty(_) => "decrease_qty",
            CartCommand::ClearCart => "clear_cart",
        }
    }
}
