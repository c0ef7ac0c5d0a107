//! Validated, immutable filter definition.

use tracing::debug;

use super::action::{self, ActionSpec};
use super::commands::CommandRegistry;
use super::criteria::{self, CriterionSpec};
use super::{EvaluationContext, Event, FilterError};

/// Criteria plus the action applied to their result.
///
/// Holds no interior mutability, so one definition can be shared across
/// threads and evaluated concurrently.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterDefinition {
    criteria: Vec<CriterionSpec>,
    action: ActionSpec,
}

impl FilterDefinition {
    /// Create a definition.
    ///
    /// # Errors
    ///
    /// Returns a validation error if `criteria` is empty or a criterion has no values.
    pub fn new(criteria: Vec<CriterionSpec>, action: ActionSpec) -> Result<Self, FilterError> {
        if criteria.is_empty() {
            return Err(FilterError::validation("criteria cannot be empty"));
        }
        if let Some(i) = criteria.iter().position(|c| c.values.is_empty()) {
            return Err(FilterError::validation(format!(
                "criteria[{}]: values cannot be empty",
                i
            )));
        }

        Ok(Self { criteria, action })
    }

    pub fn criteria(&self) -> &[CriterionSpec] {
        &self.criteria
    }

    pub fn action(&self) -> &ActionSpec {
        &self.action
    }

    /// Whether the criteria match the event.
    pub fn matches(&self, registry: &CommandRegistry, event: &Event) -> Result<bool, FilterError> {
        let context = EvaluationContext::wrap(event);
        criteria::matches(&self.criteria, &context, registry)
    }

    /// Evaluate the criteria and apply the action, returning the kept event.
    pub fn apply(
        &self,
        registry: &CommandRegistry,
        event: Event,
    ) -> Result<Option<Event>, FilterError> {
        let matched = self.matches(registry, &event)?;
        let id = event.id;
        let output = action::apply(matched, &self.action, event);

        debug!(
            event_id = id,
            matched,
            action = %self.action.command,
            kept = output.is_some(),
            "Filter applied"
        );

        Ok(output)
    }
}
