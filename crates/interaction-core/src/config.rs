//! # Resource Configuration
//!
//! Construction-time choices for a resource and its command controller.
//! Every field has a default, so a partial JSON or YAML document
//! deserializes cleanly.

use serde::{Deserialize, Serialize};

/// What happens when a (verb, path) pair is registered twice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingPolicy {
    /// Fail with `DuplicateBinding`.
    #[default]
    Reject,
    /// Replace the earlier binding.
    Override,
}

/// How a resource answers an OPTIONS request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionsPolicy {
    /// Always report `404 Not Found`.
    #[default]
    NotFound,
    /// Report `200 OK` with the verbs currently permitted.
    AdvertiseAllowed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub binding_policy: BindingPolicy,
    pub options_policy: OptionsPolicy,
}
