//! # Entity Data Model catalog
//!
//! The rich, external metadata form. Entity sets name collections, entity
//! types declare keys and typed properties, and property types come from
//! the catalog's own [`EdmSimpleType`] enumeration.

use crate::error::ModelError;
use crate::template::{build_template, UriParameterType, UriTemplate};
use serde::{Deserialize, Serialize};

/// Primitive property types of the catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EdmSimpleType {
    #[serde(rename = "Edm.Binary")]
    Binary,
    #[serde(rename = "Edm.Boolean")]
    Boolean,
    #[serde(rename = "Edm.Byte")]
    Byte,
    #[serde(rename = "Edm.DateTime")]
    DateTime,
    #[serde(rename = "Edm.DateTimeOffset")]
    DateTimeOffset,
    #[serde(rename = "Edm.Decimal")]
    Decimal,
    #[serde(rename = "Edm.Double")]
    Double,
    #[serde(rename = "Edm.Guid")]
    Guid,
    #[serde(rename = "Edm.Int16")]
    Int16,
    #[serde(rename = "Edm.Int32")]
    Int32,
    #[serde(rename = "Edm.Int64")]
    Int64,
    #[serde(rename = "Edm.Single")]
    Single,
    #[serde(rename = "Edm.String")]
    String,
    #[serde(rename = "Edm.Time")]
    Time,
}

impl UriParameterType for EdmSimpleType {
    fn is_quoted(&self) -> bool {
        matches!(self, EdmSimpleType::DateTime | EdmSimpleType::String)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmProperty {
    pub name: String,
    #[serde(rename = "type")]
    pub edm_type: EdmSimpleType,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmEntityType {
    pub name: String,
    #[serde(default)]
    pub keys: Vec<String>,
    #[serde(default)]
    pub properties: Vec<EdmProperty>,
}

impl EdmEntityType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            keys: Vec::new(),
            properties: Vec::new(),
        }
    }

    pub fn with_key(mut self, name: impl Into<String>, edm_type: EdmSimpleType) -> Self {
        let name = name.into();
        self.keys.push(name.clone());
        self.with_property(name, edm_type)
    }

    pub fn with_property(mut self, name: impl Into<String>, edm_type: EdmSimpleType) -> Self {
        self.properties.push(EdmProperty {
            name: name.into(),
            edm_type,
        });
        self
    }

    pub fn find_declared_property(&self, name: &str) -> Option<&EdmProperty> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// The key-segment template for this type. An undeclared key is unquoted.
    pub fn uri_template(&self) -> UriTemplate {
        let keys: Vec<(&str, Option<EdmSimpleType>)> = self
            .keys
            .iter()
            .map(|key| {
                let edm_type = self.find_declared_property(key).map(|p| p.edm_type);
                (key.as_str(), edm_type)
            })
            .collect();
        build_template(&keys)
    }
}

/// A named collection of one entity type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmEntitySet {
    pub name: String,
    pub entity_type: EdmEntityType,
}

impl EdmEntitySet {
    pub fn new(name: impl Into<String>, entity_type: EdmEntityType) -> Self {
        Self {
            name: name.into(),
            entity_type,
        }
    }
}

/// The catalog root: entity sets in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdmDataServices {
    pub entity_sets: Vec<EdmEntitySet>,
}

impl EdmDataServices {
    pub fn new(entity_sets: impl IntoIterator<Item = EdmEntitySet>) -> Self {
        Self {
            entity_sets: entity_sets.into_iter().collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }
}
