//! Command registry implementation.

use std::collections::HashMap;
use std::fmt;

use super::{Command, Comparison, EqualsCommand, IncludesCommand, OrderingCommand};
use crate::domain::{FilterError, Value};

/// Named comparators available to criteria.
pub struct CommandRegistry {
    commands: HashMap<String, Box<dyn Command>>,
}

impl CommandRegistry {
    /// Create a registry with the built-in commands:
    /// `equals`, `includes`, `>`, `>=`, `<`, `<=`.
    pub fn new() -> Self {
        let mut registry = Self::empty();

        registry.register(Box::new(EqualsCommand));
        registry.register(Box::new(IncludesCommand));
        for comparison in Comparison::ALL {
            registry.register(Box::new(OrderingCommand::new(comparison)));
        }

        registry
    }

    /// Create a registry without any command.
    pub fn empty() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Register a command under its name, returning the command it replaces.
    pub fn register(&mut self, command: Box<dyn Command>) -> Option<Box<dyn Command>> {
        self.commands.insert(command.name().to_string(), command)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Registered command names, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.commands.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Apply the named command to a target value and an operand.
    pub fn evaluate_command(
        &self,
        name: &str,
        target: &Value,
        operand: &Value,
    ) -> Result<bool, FilterError> {
        let command = self
            .commands
            .get(name)
            .ok_or_else(|| FilterError::UnknownCommand(name.to_string()))?;

        command.evaluate(target, operand)
    }
}

impl Default for CommandRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for CommandRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandRegistry")
            .field("commands", &self.names())
            .finish()
    }
}
