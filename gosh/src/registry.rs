//! Command registry: name to handler lookup.

use std::collections::HashMap;

use tracing::debug;

use crate::command::Command;
use crate::commands::register_builtins;
use crate::config::ShellConfig;

/// Mapping from command name to its handler.
///
/// Populated once at startup and passed to the shell. Registering a name that
/// already exists replaces the earlier handler.
#[derive(Default)]
pub struct Registry {
    commands: HashMap<&'static str, Box<dyn Command>>,
}

impl Registry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding every builtin command.
    pub fn with_builtins(config: &ShellConfig) -> Self {
        let mut registry = Self::new();
        register_builtins(&mut registry, config);
        debug!(commands = registry.len(), "registered builtins");
        registry
    }

    pub fn register(&mut self, command: Box<dyn Command>) {
        let name = command.name();
        if self.commands.insert(name, command).is_some() {
            debug!(name, "replaced existing command");
        }
    }

    /// Exact, case-sensitive lookup.
    pub fn lookup(&self, name: &str) -> Option<&dyn Command> {
        self.commands.get(name).map(Box::as_ref)
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.commands.keys().copied().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
