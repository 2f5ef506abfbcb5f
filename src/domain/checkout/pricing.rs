use serde::{Deserialize, Serialize};

use crate::domain::cart::Cart;

pub const DEFAULT_DELIVERY_FEE: f64 = 5.0;
pub const DEFAULT_DISCOUNT: f64 = 0.5;

/// Flat adjustments applied on top of the cart subtotal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricingPolicy {
    pub delivery_fee: f64,
    pub discount: f64,
}

impl Default for PricingPolicy {
    fn default() -> Self {
        Self {
            delivery_fee: DEFAULT_DELIVERY_FEE,
            discount: DEFAULT_DISCOUNT,
        }
    }
}

impl PricingPolicy {
    pub fn summarize(&self, cart: &Cart) -> CheckoutSummary {
        let subtotal = cart.total_price();

        CheckoutSummary {
            total_items: cart.total_items(),
            subtotal,
            delivery_fee: self.delivery_fee,
            discount: self.discount,
            total: subtotal + self.delivery_fee - self.discount,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutSummary {
    pub total_items: u64,
    pub subtotal: f64,
    pub delivery_fee: f64,
    pub discount: f64,
    /// Amount charged: subtotal + delivery fee - discount
    pub total: f64,
}
