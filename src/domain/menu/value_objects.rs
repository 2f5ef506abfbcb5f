use serde::{Deserialize, Serialize};

use crate::domain::cart::MenuItemId;

/// Menu entry as returned by the backend's menu collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    #[serde(rename = "$id")]
    pub id: MenuItemId,
    pub name: String,
    pub price: f64,
    pub image_url: String,
    #[serde(default)]
    pub description: Option<String>,
}
