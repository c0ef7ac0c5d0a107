//! Loader service for filter definitions from JSON values, strings and files.

use std::fs;
use std::path::Path;

use tracing::debug;

use super::{validate, RawFilterDefinition};
use crate::domain::{CommandRegistry, FilterDefinition, FilterError};

/// Loads filter definitions, checking commands against a registry.
pub struct DefinitionLoader<'a> {
    registry: &'a CommandRegistry,
}

impl<'a> DefinitionLoader<'a> {
    pub fn new(registry: &'a CommandRegistry) -> Self {
        Self { registry }
    }

    /// Load from already-parsed JSON.
    pub fn load_value(&self, value: serde_json::Value) -> Result<FilterDefinition, FilterError> {
        let raw = RawFilterDefinition::from_value(value)?;
        let definition = validate(raw, self.registry)?;

        debug!(
            criteria = definition.criteria().len(),
            action = %definition.action().command,
            "Loaded filter definition"
        );

        Ok(definition)
    }

    /// Load from a JSON string.
    pub fn load_str(&self, input: &str) -> Result<FilterDefinition, FilterError> {
        let value: serde_json::Value = serde_json::from_str(input)?;
        self.load_value(value)
    }

    /// Load from a JSON file.
    pub fn load_file(&self, path: &Path) -> Result<FilterDefinition, FilterError> {
        debug!("Reading filter definition: {}", path.display());
        let content = fs::read_to_string(path)?;
        self.load_str(&content)
    }
}
