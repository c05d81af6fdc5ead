//! In-memory module registry

use std::collections::HashMap;

use async_trait::async_trait;
use commit_opts::ConventionModule;

use crate::error::{Error, Result};
use crate::resolver::ModuleResolver;

/// Registry mapping module names to convention modules.
///
/// Provides registration, lookup by name, and a pre-populated set of
/// built-in conventions via [`ModuleRegistry::with_builtins`].
#[derive(Debug, Clone, Default)]
pub struct ModuleRegistry {
    modules: HashMap<String, ConventionModule>,
}

impl ModuleRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self {
            modules: HashMap::new(),
        }
    }

    /// Create a registry pre-populated with the built-in conventions.
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, module) in crate::builtins::builtin_modules() {
            registry.register(name, module);
        }
        registry
    }

    /// Register a module under a name.
    ///
    /// If the name was already registered, the previous module is replaced.
    pub fn register(&mut self, name: impl Into<String>, module: ConventionModule) {
        self.modules.insert(name.into(), module);
    }

    /// Get a module by name.
    pub fn get(&self, name: &str) -> Option<&ConventionModule> {
        self.modules.get(name)
    }

    /// Check if a module is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.modules.contains_key(name)
    }

    /// Get the number of registered modules.
    pub fn len(&self) -> usize {
        self.modules.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.modules.is_empty()
    }

    /// List all registered module names (sorted).
    pub fn list(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.modules.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

#[async_trait]
impl ModuleResolver for ModuleRegistry {
    async fn lookup(&self, name: &str) -> Result<ConventionModule> {
        self.modules
            .get(name)
            .cloned()
            .ok_or_else(|| Error::ModuleNotFound {
                name: name.to_string(),
            })
    }
}
