//! Core domain types for event records.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::{FilterError, Value};

/// Root key every target path starts with.
pub const ROOT_KEY: &str = "event";

/// Event record received for filtering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Event {
    /// Event identifier
    pub id: i64,

    /// Event timestamp (kept verbatim, never parsed)
    pub timestamp: String,

    /// Event duration
    pub duration: i64,

    /// Arbitrary event payload
    pub data: BTreeMap<String, Value>,
}

impl Event {
    /// Build an event from already-parsed JSON, reporting shape errors as validation errors.
    pub fn from_value(value: serde_json::Value) -> Result<Self, FilterError> {
        serde_json::from_value(value).map_err(|e| FilterError::validation(format!("event: {}", e)))
    }

    /// Parse an event from a JSON string.
    pub fn from_json_str(input: &str) -> Result<Self, FilterError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        Self::from_value(value)
    }

    /// Convert the event into a mapping value with its four top-level fields.
    pub fn to_value(&self) -> Value {
        let mut fields = BTreeMap::new();
        fields.insert("id".to_string(), Value::Integer(self.id));
        fields.insert(
            "timestamp".to_string(),
            Value::String(self.timestamp.clone()),
        );
        fields.insert("duration".to_string(), Value::Integer(self.duration));
        fields.insert("data".to_string(), Value::Mapping(self.data.clone()));
        Value::Mapping(fields)
    }
}

/// An event wrapped under [`ROOT_KEY`], so that target paths read `event.<field>...`.
///
/// Built once per evaluation and shared by every criterion.
#[derive(Debug, Clone)]
pub struct EvaluationContext {
    root: Value,
}

impl EvaluationContext {
    /// Wrap an event under the root key.
    pub fn wrap(event: &Event) -> Self {
        let mut root = BTreeMap::new();
        root.insert(ROOT_KEY.to_string(), event.to_value());
        Self {
            root: Value::Mapping(root),
        }
    }

    /// The root mapping, `{ "event": ... }`.
    pub fn root(&self) -> &Value {
        &self.root
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_from_value() {
        let event = Event::from_value(json!({
            "id": 1,
            "timestamp": "2018-06-12T16:06:19.567000+00:00",
            "duration": 0,
            "data": {"incognito": "True"}
        }))
        .unwrap();

        assert_eq!(event.id, 1);
        assert_eq!(event.duration, 0);
        assert_eq!(event.data["incognito"], Value::from("True"));
    }

    #[test]
    fn test_event_missing_field_is_validation_error() {
        let err = Event::from_value(json!({"id": 1, "timestamp": "t", "data": {}})).unwrap_err();
        assert!(matches!(err, FilterError::Validation(_)));
        assert!(err.to_string().contains("duration"));
    }

    #[test]
    fn test_event_rejects_unknown_field() {
        let err = Event::from_value(json!({
            "id": 1, "timestamp": "t", "duration": 0, "data": {}, "extra": true
        }))
        .unwrap_err();
        assert!(matches!(err, FilterError::Validation(_)));
    }

    #[test]
    fn test_event_wrong_type_is_validation_error() {
        let err = Event::from_value(json!({
            "id": "one", "timestamp": "t", "duration": 0, "data": {}
        }))
        .unwrap_err();
        assert!(matches!(err, FilterError::Validation(_)));
    }

    #[test]
    fn test_event_from_invalid_json() {
        let err = Event::from_json_str("{not json").unwrap_err();
        assert!(matches!(err, FilterError::Json(_)));
    }

    #[test]
    fn test_context_wraps_under_root_key() {
        let event = Event {
            id: 7,
            timestamp: "t".to_string(),
            duration: 3,
            data: BTreeMap::new(),
        };
        let context = EvaluationContext::wrap(&event);
        let root = context.root().as_mapping().unwrap();
        assert_eq!(root.len(), 1);

        let wrapped = root[ROOT_KEY].as_mapping().unwrap();
        assert_eq!(wrapped["id"], Value::Integer(7));
        assert_eq!(wrapped["duration"], Value::Integer(3));
        assert_eq!(wrapped["timestamp"], Value::from("t"));
        assert_eq!(wrapped["data"], Value::Mapping(BTreeMap::new()));
    }
}
