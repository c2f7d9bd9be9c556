//! # URI Template Builder
//!
//! Turns an entity's ordered key fields into the parameter part of its
//! entity-state URI template.
//!
//! - One key: the parameter is always named `id`.
//! - Several keys: each parameter is named after its field, comma-separated
//!   in declaration order.
//! - No keys: the template is empty.
//!
//! Parameters whose field type needs literal quoting in the target protocol
//! are wrapped in single quotes. Which types those are is decided by the
//! metadata vocabulary through [`UriParameterType`].
//!
//! ```rust
//! use interaction_sdk::metadata::TermValueType;
//! use interaction_sdk::template::build_template;
//!
//! let template = build_template(&[
//!     ("year", Some(TermValueType::Date)),
//!     ("serial", Some(TermValueType::Simple)),
//! ]);
//! assert_eq!(template.to_string(), "'{year}',{serial}");
//! ```

use std::fmt::{self, Display};

/// A field type that knows whether its URI parameter must be quoted.
pub trait UriParameterType {
    fn is_quoted(&self) -> bool;
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TemplateSegment {
    Literal(String),
    Parameter { name: String, quoted: bool },
}

/// An ordered sequence of literal and parameter segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct UriTemplate {
    segments: Vec<TemplateSegment>,
}

impl UriTemplate {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn segments(&self) -> &[TemplateSegment] {
        &self.segments
    }

    /// Parameter segments as `(name, quoted)` pairs, in order.
    pub fn parameters(&self) -> impl Iterator<Item = (&str, bool)> + '_ {
        self.segments.iter().filter_map(|segment| match segment {
            TemplateSegment::Parameter { name, quoted } => Some((name.as_str(), *quoted)),
            TemplateSegment::Literal(_) => None,
        })
    }

    pub fn parameter_names(&self) -> Vec<&str> {
        self.parameters().map(|(name, _)| name).collect()
    }
}

impl Display for UriTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            match segment {
                TemplateSegment::Literal(text) => f.write_str(text)?,
                TemplateSegment::Parameter { name, quoted: true } => write!(f, "'{{{name}}}'")?,
                TemplateSegment::Parameter {
                    name,
                    quoted: false,
                } => write!(f, "{{{name}}}")?,
            }
        }
        Ok(())
    }
}

/// Builds the key-parameter template from ordered `(field, type)` pairs.
///
/// A field with no type is never quoted.
pub fn build_template<T: UriParameterType>(keys: &[(&str, Option<T>)]) -> UriTemplate {
    let single = keys.len() == 1;
    let mut segments = Vec::with_capacity(keys.len() * 2);
    for (index, (field, field_type)) in keys.iter().enumerate() {
        if index > 0 {
            segments.push(TemplateSegment::Literal(",".to_string()));
        }
        let name = if single { "id" } else { *field };
        segments.push(TemplateSegment::Parameter {
            name: name.to_string(),
            quoted: field_type.as_ref().is_some_and(UriParameterType::is_quoted),
        });
    }
    UriTemplate { segments }
}
