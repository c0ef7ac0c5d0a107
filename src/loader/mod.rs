//! Filter definition loading.
//!
//! Handles JSON parsing, shape validation and defaults, producing the
//! immutable [`FilterDefinition`](crate::domain::FilterDefinition) the engine evaluates.

mod service;
mod types;
mod validation;

pub use service::DefinitionLoader;
pub use types::{RawAction, RawCriterion, RawFilterDefinition};
pub use validation::validate;
