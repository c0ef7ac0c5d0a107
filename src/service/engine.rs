//! Filter engine holding the command registry and the loaded definition.

use std::path::Path;

use tracing::info;

use crate::domain::{Command, CommandRegistry, Event, FilterDefinition, FilterError};
use crate::loader::DefinitionLoader;

/// Evaluates events against the currently loaded filter definition.
///
/// Loading takes `&mut self` and evaluation takes `&self`, so a definition
/// can never be replaced while an evaluation borrows the engine.
#[derive(Debug, Default)]
pub struct FilterEngine {
    registry: CommandRegistry,
    definition: Option<FilterDefinition>,
}

impl FilterEngine {
    /// Create an engine with the built-in commands and no definition.
    pub fn new() -> Self {
        Self::with_registry(CommandRegistry::new())
    }

    pub fn with_registry(registry: CommandRegistry) -> Self {
        Self {
            registry,
            definition: None,
        }
    }

    pub fn registry(&self) -> &CommandRegistry {
        &self.registry
    }

    /// Register an additional command for definitions loaded afterwards.
    pub fn register(&mut self, command: Box<dyn Command>) {
        self.registry.register(command);
    }

    /// Replace the loaded definition.
    pub fn load(&mut self, definition: FilterDefinition) {
        info!(
            criteria = definition.criteria().len(),
            action = %definition.action().command,
            "Filter definition loaded"
        );
        self.definition = Some(definition);
    }

    /// Load a definition from already-parsed JSON.
    ///
    /// On error the previously loaded definition is kept.
    pub fn load_value(&mut self, value: serde_json::Value) -> Result<(), FilterError> {
        let definition = DefinitionLoader::new(&self.registry).load_value(value)?;
        self.load(definition);
        Ok(())
    }

    /// Load a definition from a JSON string.
    pub fn load_str(&mut self, input: &str) -> Result<(), FilterError> {
        let definition = DefinitionLoader::new(&self.registry).load_str(input)?;
        self.load(definition);
        Ok(())
    }

    /// Load a definition from a JSON file.
    pub fn load_file(&mut self, path: &Path) -> Result<(), FilterError> {
        let definition = DefinitionLoader::new(&self.registry).load_file(path)?;
        self.load(definition);
        Ok(())
    }

    pub fn is_loaded(&self) -> bool {
        self.definition.is_some()
    }

    /// The loaded definition.
    pub fn definition(&self) -> Result<&FilterDefinition, FilterError> {
        self.definition.as_ref().ok_or(FilterError::NotLoaded)
    }

    /// Whether the loaded criteria match the event.
    pub fn matches(&self, event: &Event) -> Result<bool, FilterError> {
        self.definition()?.matches(&self.registry, event)
    }

    /// Apply the loaded filter, returning the event if it is kept.
    pub fn apply(&self, event: Event) -> Result<Option<Event>, FilterError> {
        self.definition()?.apply(&self.registry, event)
    }
}
