//! Membership command.

use super::Command;
use crate::domain::{FilterError, Value};

/// `includes`: the operand is contained in the target.
///
/// - string target: substring (operand must be a string)
/// - sequence target: element equality
/// - mapping target: key presence (operand must be a string)
pub struct IncludesCommand;

impl Command for IncludesCommand {
    fn name(&self) -> &str {
        "includes"
    }

    fn evaluate(&self, target: &Value, operand: &Value) -> Result<bool, FilterError> {
        match (target, operand) {
            (Value::String(haystack), Value::String(needle)) => Ok(haystack.contains(needle.as_str())),
            (Value::Sequence(items), _) => Ok(items.contains(operand)),
            (Value::Mapping(entries), Value::String(key)) => Ok(entries.contains_key(key)),
            _ => Err(FilterError::IncompatibleOperands {
                command: self.name().to_string(),
                target: target.type_name(),
                operand: operand.type_name(),
            }),
        }
    }
}
