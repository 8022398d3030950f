//! Target registry
//!
//! A fixed mapping from target name to an ordered sequence of command lines,
//! populated once at startup and immutable thereafter.

use crate::config::Manifest;
use crate::error::{RegistryError, RegistryResult};
use std::collections::HashMap;

/// A named, ordered sequence of command lines
#[derive(Debug, Clone)]
pub struct Target {
    name: String,
    usage: Option<String>,
    description: Option<String>,
    commands: Vec<String>,
}

impl Target {
    /// Create a target from its name and command lines
    pub fn new(name: impl Into<String>, commands: Vec<String>) -> Self {
        Target {
            name: name.into(),
            usage: None,
            description: None,
            commands,
        }
    }

    /// Set the usage line shown in help output
    pub fn with_usage(mut self, usage: Option<String>) -> Self {
        self.usage = usage;
        self
    }

    /// Set the longer description shown in help output
    pub fn with_description(mut self, description: Option<String>) -> Self {
        self.description = description;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// The command lines, in declared order
    pub fn commands(&self) -> &[String] {
        &self.commands
    }
}

/// Immutable mapping from target name to target
#[derive(Debug, Default)]
pub struct Registry {
    targets: HashMap<String, Target>,
}

impl Registry {
    /// Create an empty registry
    pub fn new() -> Self {
        Registry {
            targets: HashMap::new(),
        }
    }

    /// Build a registry from a parsed manifest
    pub fn from_manifest(manifest: &Manifest) -> RegistryResult<Self> {
        let mut registry = Registry::new();
        for (name, spec) in &manifest.targets {
            let target = Target::new(name.clone(), spec.run.clone())
                .with_usage(spec.usage.clone())
                .with_description(spec.description.clone());
            registry.register(target)?;
        }
        Ok(registry)
    }

    /// Register a target, failing if the name is already taken
    pub fn register(&mut self, target: Target) -> RegistryResult<()> {
        if self.targets.contains_key(target.name()) {
            return Err(RegistryError::DuplicateTarget(target.name().to_string()));
        }
        self.targets.insert(target.name().to_string(), target);
        Ok(())
    }

    /// Look up a target by name
    pub fn resolve(&self, name: &str) -> RegistryResult<&Target> {
        self.targets
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTarget(name.to_string()))
    }

    /// Registered target names, sorted for deterministic listings
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.targets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Registered targets, sorted by name
    pub fn targets(&self) -> Vec<&Target> {
        let mut targets: Vec<&Target> = self.targets.values().collect();
        targets.sort_unstable_by_key(|t| t.name());
        targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }
}
