//! Post-match action deciding whether an event is kept.

use std::fmt;
use std::str::FromStr;

use super::{Event, FilterError, Value};

/// What to do with an event whose criteria matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionCommand {
    /// Drop matching events, keep the rest
    Remove,
    /// Keep matching events, drop the rest
    Return,
}

impl FromStr for ActionCommand {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "remove" => Ok(ActionCommand::Remove),
            "return" => Ok(ActionCommand::Return),
            other => Err(FilterError::UnsupportedAction(other.to_string())),
        }
    }
}

impl fmt::Display for ActionCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ActionCommand::Remove => f.write_str("remove"),
            ActionCommand::Return => f.write_str("return"),
        }
    }
}

/// Configured action.
#[derive(Debug, Clone, PartialEq)]
pub struct ActionSpec {
    pub command: ActionCommand,

    /// Reserved for action parameters; unused by `remove` and `return`
    pub values: Vec<Value>,
}

impl ActionSpec {
    pub fn new(command: ActionCommand) -> Self {
        Self {
            command,
            values: Vec::new(),
        }
    }
}

/// Map the match result and the action to the emitted event, if any.
pub fn apply(matched: bool, action: &ActionSpec, event: Event) -> Option<Event> {
    match (matched, action.command) {
        (true, ActionCommand::Return) | (false, ActionCommand::Remove) => Some(event),
        (true, ActionCommand::Remove) | (false, ActionCommand::Return) => None,
    }
}
