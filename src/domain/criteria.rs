//! Criteria evaluation with negation and short-circuit chaining.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use super::commands::CommandRegistry;
use super::path::{self, TargetPath};
use super::{EvaluationContext, FilterError, Value};

/// Operator chaining a criterion to the rest of the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOperator {
    And,
    Or,
}

impl FromStr for LogicalOperator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "and" => Ok(LogicalOperator::And),
            "or" => Ok(LogicalOperator::Or),
            other => Err(FilterError::UnsupportedLogicalOperator(other.to_string())),
        }
    }
}

impl fmt::Display for LogicalOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOperator::And => f.write_str("and"),
            LogicalOperator::Or => f.write_str("or"),
        }
    }
}

/// A single comparison rule.
#[derive(Debug, Clone, PartialEq)]
pub struct CriterionSpec {
    /// Path of the value to compare, starting with `event`
    pub target: TargetPath,

    /// Name of a registered command
    pub command: String,

    /// Operands; current commands only use the first one
    pub values: Vec<Value>,

    /// Chaining to the next criterion; `None` ends the chain here
    pub logical_operator: Option<LogicalOperator>,

    /// Invert the command result
    pub negate: bool,
}

impl CriterionSpec {
    /// Evaluate this criterion alone, negation included.
    fn evaluate(
        &self,
        context: &EvaluationContext,
        registry: &CommandRegistry,
    ) -> Result<bool, FilterError> {
        let target_val = path::resolve(context, &self.target)?;
        let operand = &self.values[0];

        let matched = registry.evaluate_command(&self.command, target_val, operand)?;
        let matched = apply_negation(matched, self.negate);

        debug!(
            target = %self.target,
            command = %self.command,
            value = %target_val,
            operand = %operand,
            negate = self.negate,
            matched,
            "Criterion evaluated"
        );

        Ok(matched)
    }
}

/// Invert `matched` when `negate` is set.
pub fn apply_negation(matched: bool, negate: bool) -> bool {
    matched != negate
}

/// Evaluate an ordered list of criteria against a context.
///
/// Each criterion is combined with the rest of the list through its own
/// operator: `c0 and (c1 or (c2 ...))`. There is no precedence or grouping.
/// The chain stops at the last criterion or at the first one without an
/// operator, and as soon as an `and` meets `false` or an `or` meets `true`.
/// Criteria after the stopping point are never resolved.
///
/// `criteria` must come from a [`FilterDefinition`](super::FilterDefinition),
/// which guarantees a non-empty list where every criterion has a value.
pub(crate) fn matches(
    criteria: &[CriterionSpec],
    context: &EvaluationContext,
    registry: &CommandRegistry,
) -> Result<bool, FilterError> {
    let last = criteria.len() - 1;
    let mut index = 0;
    loop {
        let criterion = &criteria[index];
        let matched = criterion.evaluate(context, registry)?;

        let operator = match criterion.logical_operator {
            Some(operator) if index < last => operator,
            _ => return Ok(matched),
        };

        match (operator, matched) {
            (LogicalOperator::And, false) | (LogicalOperator::Or, true) => {
                debug!(
                    index,
                    operator = %operator,
                    skipped = last - index,
                    "Short-circuit"
                );
                return Ok(matched);
            }
            _ => index += 1,
        }
    }
}
