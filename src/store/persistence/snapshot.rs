use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use super::errors::StorageError;

/// Current layout version written with every snapshot.
pub const SNAPSHOT_VERSION: u32 = 0;

/// Persisted form of a store state: `{"state": ..., "version": 0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredSnapshot<T> {
    pub state: T,
    pub version: u32,
}

impl<T> StoredSnapshot<T> {
    pub fn new(state: T) -> Self {
        Self {
            state,
            version: SNAPSHOT_VERSION,
        }
    }
}

impl<T: Serialize> StoredSnapshot<T> {
    pub fn to_json(&self) -> Result<String, StorageError> {
        Ok(serde_json::to_string(self)?)
    }
}

impl<T: DeserializeOwned> StoredSnapshot<T> {
    pub fn from_json(json: &str) -> Result<Self, StorageError> {
        Ok(serde_json::from_str(json)?)
    }
}
