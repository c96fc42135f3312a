//! Named command table.
//!
//! Commands must be loaded before they can be dispatched, the same way a
//! drawing host only answers the names a plugin registered at init and stops
//! answering them once they are unloaded. Lookups ignore case.

use dimplace_core::command::{self, CommandName, CommandResponse};
use dimplace_core::curve::CurveTable;
use serde_json::Value;
use std::collections::BTreeMap;
use tracing::{debug, info};

#[derive(Debug, Default, Clone)]
pub struct CommandRegistry {
    commands: BTreeMap<String, (String, CommandName)>,
}

impl CommandRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with every dimension command loaded under its own name.
    pub fn standard() -> Self {
        let mut registry = Self::new();
        for command in CommandName::ALL {
            registry.load(command.as_str(), command);
        }
        registry
    }

    /// Returns false if `name` was already loaded; the existing entry is kept.
    pub fn load(&mut self, name: &str, command: CommandName) -> bool {
        let key = name.to_ascii_lowercase();
        if self.commands.contains_key(&key) {
            debug!("Command '{}' already loaded", name);
            return false;
        }
        info!("Loaded command '{}' -> {}", name, command);
        self.commands.insert(key, (name.to_string(), command));
        true
    }

    pub fn unload(&mut self, name: &str) -> bool {
        let removed = self.commands.remove(&name.to_ascii_lowercase()).is_some();
        if removed {
            info!("Unloaded command '{}'", name);
        }
        removed
    }

    pub fn get(&self, name: &str) -> Option<CommandName> {
        self.commands.get(&name.to_ascii_lowercase()).map(|(_, command)| *command)
    }

    /// Loaded names as registered, in case-insensitive order.
    pub fn names(&self) -> Vec<String> {
        self.commands.values().map(|(name, _)| name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn dispatch(&self, name: &str, params: &Value, curves: &CurveTable) -> CommandResponse {
        match self.get(name) {
            Some(command) => command::run(command, params, curves).into(),
            None => CommandResponse::failed(format!("Command not loaded: {}", name)),
        }
    }
}
