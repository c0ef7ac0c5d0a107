//! Filter definition validation.

use tracing::warn;

use super::RawFilterDefinition;
use crate::domain::{
    ActionCommand, ActionSpec, CommandRegistry, CriterionSpec, FilterDefinition, FilterError,
    LogicalOperator, TargetPath,
};

/// Validate a raw definition against `registry` and build the immutable definition.
///
/// Stops at the first violated constraint. Emptiness of the criteria list and
/// of each `values` list is left to [`FilterDefinition::new`].
pub fn validate(
    raw: RawFilterDefinition,
    registry: &CommandRegistry,
) -> Result<FilterDefinition, FilterError> {
    let last = raw.criteria.len().saturating_sub(1);
    let mut criteria = Vec::with_capacity(raw.criteria.len());

    for (i, criterion) in raw.criteria.into_iter().enumerate() {
        let target = TargetPath::parse(&criterion.target)
            .map_err(|e| match e {
                FilterError::Validation(message) => {
                    FilterError::validation(format!("criteria[{}]: {}", i, message))
                }
                other => other,
            })?;

        if !registry.contains(&criterion.command) {
            return Err(FilterError::UnknownCommand(criterion.command));
        }

        let logical_operator = criterion
            .logical_operator
            .as_deref()
            .map(str::parse::<LogicalOperator>)
            .transpose()?;

        if logical_operator.is_none() && i < last {
            warn!(
                "criteria[{}] has no logical_operator; criteria[{}..={}] are never evaluated",
                i,
                i + 1,
                last
            );
        }

        criteria.push(CriterionSpec {
            target,
            command: criterion.command,
            values: criterion.values,
            logical_operator,
            negate: criterion.negate,
        });
    }

    let command: ActionCommand = raw.action.command.parse()?;
    let action = ActionSpec {
        command,
        values: raw.action.values,
    };

    FilterDefinition::new(criteria, action)
}
