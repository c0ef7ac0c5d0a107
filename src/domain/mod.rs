//! Domain layer containing core filtering logic.
//!
//! This module contains:
//! - Event records and the dynamically typed value model
//! - Target path resolution
//! - Comparator commands and their registry
//! - Criteria evaluation and the keep/drop action
//! - Logger with rotation

pub mod action;
pub mod commands;
pub mod criteria;
mod definition;
mod error;
pub mod logger;
pub mod path;
mod types;
mod value;

pub use action::{ActionCommand, ActionSpec};
pub use commands::{Command, CommandRegistry};
pub use criteria::{CriterionSpec, LogicalOperator};
pub use definition::FilterDefinition;
pub use error::FilterError;
pub use path::TargetPath;
pub use types::{EvaluationContext, Event, ROOT_KEY};
pub use value::Value;
