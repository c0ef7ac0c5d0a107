//! Command trait definition.

use crate::domain::{FilterError, Value};

/// Trait for named binary predicates.
pub trait Command: Send + Sync {
    /// Name the command is registered and referenced under.
    fn name(&self) -> &str;

    /// Apply the predicate to the resolved target value and the operand.
    fn evaluate(&self, target: &Value, operand: &Value) -> Result<bool, FilterError>;
}
