//! event-filter: declarative keep/drop filtering of structured event records.
//!
//! A filter definition is an ordered list of criteria (target path, command,
//! operands, negation, and an optional `and`/`or` link to the next criterion)
//! plus an action (`remove` or `return`) applied to the match result.
//!
//! ```
//! use event_filter::{Event, FilterEngine};
//!
//! let mut engine = FilterEngine::new();
//! engine
//!     .load_str(r#"{
//!         "criteria": [{"target": "event.data.level", "command": ">=", "values": [3]}],
//!         "action": {"command": "return"}
//!     }"#)
//!     .unwrap();
//!
//! let event = Event::from_json_str(
//!     r#"{"id": 1, "timestamp": "2018-06-12T16:06:19Z", "duration": 0, "data": {"level": 4}}"#,
//! )
//! .unwrap();
//! assert!(engine.apply(event).unwrap().is_some());
//! ```

pub mod config;
pub mod domain;
pub mod loader;
pub mod service;

pub use domain::{
    ActionCommand, ActionSpec, Command, CommandRegistry, CriterionSpec, EvaluationContext, Event,
    FilterDefinition, FilterError, LogicalOperator, TargetPath, Value,
};
pub use loader::DefinitionLoader;
pub use service::{FilterEngine, FilterService, Format};
