//! # SDK Configuration
//!
//! Naming and verb conventions applied when state machines are derived from
//! metadata. Missing fields take their defaults.

use crate::error::ModelError;
use interaction_core::Verb;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SdkConfig {
    /// The verb that retrieves a single entity.
    pub method_get_entity: Verb,
    /// Appended to the entity name to form the collection-state name when the
    /// metadata does not name the collection itself.
    pub collection_suffix: String,
}

impl Default for SdkConfig {
    fn default() -> Self {
        Self {
            method_get_entity: Verb::Get,
            collection_suffix: "s".to_string(),
        }
    }
}

impl SdkConfig {
    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }
}
