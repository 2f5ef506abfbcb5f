use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Cart Value Objects
// ============================================================================

/// Menu item identifier (the backend document `$id`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MenuItemId(String);

impl MenuItemId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MenuItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CustomizationKind {
    Topping,
    Side,
}

/// Optional add-on with its own unit price
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customization {
    #[serde(default)]
    pub name: String,
    pub price: f64,
    #[serde(rename = "type")]
    pub kind: CustomizationKind,
}

impl Customization {
    pub fn topping(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            kind: CustomizationKind::Topping,
        }
    }

    pub fn side(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
            kind: CustomizationKind::Side,
        }
    }
}

/// Whether two customization selections are the same set.
///
/// Equal length, and the names match rank by rank once both sides are sorted.
/// Insertion order does not matter.
pub fn same_customizations(a: &[Customization], b: &[Customization]) -> bool {
    if a.len() != b.len() {
        return false;
    }

    let mut left: Vec<&str> = a.iter().map(|c| c.name.as_str()).collect();
    let mut right: Vec<&str> = b.iter().map(|c| c.name.as_str()).collect();
    left.sort_unstable();
    right.sort_unstable();

    left == right
}

/// Identifies one cart line: menu item + customization set
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineKey {
    pub id: MenuItemId,
    #[serde(default)]
    pub customizations: Vec<Customization>,
}

impl LineKey {
    pub fn new(id: MenuItemId, customizations: Vec<Customization>) -> Self {
        Self { id, customizations }
    }
}

/// Candidate line handed to `add_item`; quantity starts at 1 in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default)]
    pub customizations: Vec<Customization>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub id: MenuItemId,
    pub name: String,
    /// Base unit price, customizations excluded
    pub price: f64,
    pub image_url: String,
    #[serde(default)]
    pub customizations: Vec<Customization>,
    pub quantity: u32,
}

impl CartLine {
    pub fn from_item(item: CartItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            price: item.price,
            image_url: item.image_url,
            customizations: item.customizations,
            quantity: 1,
        }
    }

    pub fn matches(&self, id: &MenuItemId, customizations: &[Customization]) -> bool {
        self.id == *id && same_customizations(&self.customizations, customizations)
    }

    pub fn key(&self) -> LineKey {
        LineKey::new(self.id.clone(), self.customizations.clone())
    }

    pub fn customization_total(&self) -> f64 {
        self.customizations.iter().map(|c| c.price).sum()
    }

    /// Base price plus every customization, for one unit
    pub fn unit_price(&self) -> f64 {
        self.price + self.customization_total()
    }

    pub fn line_total(&self) -> f64 {
        f64::from(self.quantity) * self.unit_price()
    }
}
