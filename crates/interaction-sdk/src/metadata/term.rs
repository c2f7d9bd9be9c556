//! # Entity Metadata (term vocabulary)
//!
//! The framework's own, small metadata form: an entity name, its ordered key
//! fields, and a [`TermValueType`] per field.

use crate::error::ModelError;
use crate::template::{build_template, UriParameterType, UriTemplate};
use serde::{Deserialize, Serialize};

/// Field type tags of the term vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TermValueType {
    Text,
    EncryptedText,
    Date,
    Timestamp,
    Image,
    Number,
    IntegerNumber,
    Boolean,
    /// Anything without a more specific tag.
    Simple,
}

impl UriParameterType for TermValueType {
    fn is_quoted(&self) -> bool {
        matches!(
            self,
            TermValueType::Text
                | TermValueType::EncryptedText
                | TermValueType::Date
                | TermValueType::Timestamp
                | TermValueType::Image
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMetadata {
    pub name: String,
    #[serde(rename = "type", default)]
    pub term_type: Option<TermValueType>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntityMetadata {
    pub entity_name: String,
    /// Key field names in declaration order.
    #[serde(default)]
    pub id_fields: Vec<String>,
    #[serde(default)]
    pub fields: Vec<FieldMetadata>,
}

impl EntityMetadata {
    pub fn new(entity_name: impl Into<String>) -> Self {
        Self {
            entity_name: entity_name.into(),
            id_fields: Vec::new(),
            fields: Vec::new(),
        }
    }

    /// Adds a key field, appended after any existing keys.
    pub fn with_key(mut self, name: impl Into<String>, term_type: TermValueType) -> Self {
        let name = name.into();
        self.id_fields.push(name.clone());
        self.with_field(name, term_type)
    }

    pub fn with_field(mut self, name: impl Into<String>, term_type: TermValueType) -> Self {
        self.fields.push(FieldMetadata {
            name: name.into(),
            term_type: Some(term_type),
        });
        self
    }

    /// The type tag of `field`, if the field is declared and tagged.
    pub fn term_value_type(&self, field: &str) -> Option<TermValueType> {
        self.fields
            .iter()
            .find(|f| f.name == field)
            .and_then(|f| f.term_type)
    }

    /// The key-segment template for this entity.
    pub fn uri_template(&self) -> UriTemplate {
        let keys: Vec<(&str, Option<TermValueType>)> = self
            .id_fields
            .iter()
            .map(|key| (key.as_str(), self.term_value_type(key)))
            .collect();
        build_template(&keys)
    }
}

/// A metadata source: entities in enumeration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    pub entities: Vec<EntityMetadata>,
}

impl Metadata {
    pub fn new(entities: impl IntoIterator<Item = EntityMetadata>) -> Self {
        Self {
            entities: entities.into_iter().collect(),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, ModelError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn entity(&self, entity_name: &str) -> Option<&EntityMetadata> {
        self.entities.iter().find(|e| e.entity_name == entity_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn untagged_field_has_no_type() {
        let json = r#"{
            "entity_name": "Flight",
            "id_fields": ["code"],
            "fields": [{ "name": "code" }]
        }"#;
        let entity: EntityMetadata = serde_json::from_str(json).unwrap();
        assert_eq!(entity.term_value_type("code"), None);
        assert_eq!(entity.uri_template().to_string(), "{id}");
    }

    #[test]
    fn catalog_keeps_enumeration_order() {
        let json = r#"{ "entities": [
            { "entity_name": "Zebra" },
            { "entity_name": "Aardvark", "id_fields": ["tag"],
              "fields": [{ "name": "tag", "type": "ENCRYPTED_TEXT" }] }
        ]}"#;
        let metadata = Metadata::from_json(json).unwrap();
        let names: Vec<&str> = metadata
            .entities
            .iter()
            .map(|e| e.entity_name.as_str())
            .collect();
        assert_eq!(names, ["Zebra", "Aardvark"]);
        assert_eq!(
            metadata.entity("Aardvark").unwrap().term_value_type("tag"),
            Some(TermValueType::EncryptedText)
        );
    }

    #[test]
    fn malformed_catalog_is_an_error() {
        assert!(matches!(
            Metadata::from_json("{ not json"),
            Err(ModelError::Catalog(_))
        ));
    }
}
