use serde::{Deserialize, Serialize};

/// Used when a profile has no delivery address on file.
pub const DEFAULT_DELIVERY_ADDRESS: &str = "123 Main Street, Springfield, IL 62704";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "$id")]
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

impl UserProfile {
    /// Address to deliver to: the profile's own if set, otherwise `fallback`
    pub fn delivery_address<'a>(&'a self, fallback: &'a str) -> &'a str {
        match self.address.as_deref().map(str::trim) {
            Some(address) if !address.is_empty() => address,
            _ => fallback,
        }
    }
}
