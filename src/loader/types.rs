//! Raw filter definition shapes, as written in JSON.

use serde::Deserialize;

use crate::domain::{FilterError, Value};

/// Filter definition before validation.
///
/// ```json
/// {
///   "criteria": [
///     {"target": "event.data.incognito", "command": "equals", "values": ["True"], "logical_operator": "and"},
///     {"target": "event.timestamp", "command": "includes", "values": ["2017"], "negate": true}
///   ],
///   "action": {"command": "remove"}
/// }
/// ```
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawFilterDefinition {
    /// Ordered criteria
    pub criteria: Vec<RawCriterion>,

    /// Action applied to the match result
    pub action: RawAction,
}

/// Criterion before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawCriterion {
    /// Dot-separated path starting with `event`
    pub target: String,

    /// Command name
    pub command: String,

    /// Operands
    pub values: Vec<Value>,

    /// "and" or "or"; absent ends the chain
    #[serde(default)]
    pub logical_operator: Option<String>,

    /// Invert the command result
    #[serde(default)]
    pub negate: bool,
}

/// Action before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAction {
    /// "remove" or "return"
    pub command: String,

    /// Reserved action parameters
    #[serde(default)]
    pub values: Vec<Value>,
}

impl RawFilterDefinition {
    /// Deserialize the raw shape from parsed JSON, reporting shape errors as validation errors.
    pub fn from_value(value: serde_json::Value) -> Result<Self, FilterError> {
        serde_json::from_value(value).map_err(|e| FilterError::validation(e.to_string()))
    }
}
