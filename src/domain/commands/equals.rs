//! Structural equality command.

use super::Command;
use crate::domain::{FilterError, Value};

/// `equals`: type-sensitive structural equality.
pub struct EqualsCommand;

impl Command for EqualsCommand {
    fn name(&self) -> &str {
        "equals"
    }

    fn evaluate(&self, target: &Value, operand: &Value) -> Result<bool, FilterError> {
        Ok(target == operand)
    }
}
