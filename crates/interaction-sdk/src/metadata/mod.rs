//! Metadata sources the interaction model is built from.
//!
//! - [`term`] - the framework's own vocabulary ([`Metadata`], [`EntityMetadata`]).
//! - [`edm`] - an external Entity Data Model catalog ([`EdmDataServices`]).
//!
//! Both feed the same template builder through
//! [`UriParameterType`](crate::template::UriParameterType); only the type
//! vocabulary differs.

pub mod edm;
pub mod term;

pub use edm::*;
pub use term::*;
