//! Method registry: the instruction table of one interpreter.
//!
//! A registry is built by merging [`MethodGroup`]s in order. When two groups
//! define the same name, the later definition wins. There is no global
//! registry; every interpreter owns its own, and extending it is an explicit
//! call.

use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::library;
use crate::MethodDefinition;

/// A named bundle of method definitions, e.g. the stock math library.
#[derive(Clone, Debug, Default)]
pub struct MethodGroup {
    name: String,
    entries: Vec<(String, MethodDefinition)>,
}

impl MethodGroup {
    pub fn new(name: impl Into<String>) -> Self {
        MethodGroup {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    /// Add a method to the group.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, method: MethodDefinition) -> Self {
        self.entries.push((name.into(), method));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Registry mapping instruction names to method definitions.
///
/// Definitions are stored behind `Arc`, so cloning a registry and resolving
/// instructions against it never copies handlers.
#[derive(Clone, Debug, Default)]
pub struct MethodRegistry {
    methods: FxHashMap<String, Arc<MethodDefinition>>,
}

impl MethodRegistry {
    /// An empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge `groups` in order into a new registry.
    pub fn merge(groups: impl IntoIterator<Item = MethodGroup>) -> Self {
        let mut registry = Self::new();
        for group in groups {
            registry.extend(group);
        }
        registry
    }

    /// The stock instruction set: memory, math, I/O, then control flow.
    pub fn stock() -> Self {
        Self::merge([
            library::memory(),
            library::math(),
            library::io(),
            library::control(),
        ])
    }

    /// Add every method of `group`, overriding existing names.
    pub fn extend(&mut self, group: MethodGroup) {
        tracing::debug!(group = %group.name, methods = group.len(), "merging method group");
        for (name, method) in group.entries {
            self.insert(name, method);
        }
    }

    /// Add or replace a single method.
    pub fn insert(&mut self, name: impl Into<String>, method: MethodDefinition) {
        let name = name.into();
        if self.methods.insert(name.clone(), Arc::new(method)).is_some() {
            tracing::trace!(%name, "method overridden");
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<MethodDefinition>> {
        self.methods.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.methods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Methods sorted by name.
    pub fn sorted(&self) -> Vec<(&str, &MethodDefinition)> {
        let mut entries: Vec<_> = self
            .methods
            .iter()
            .map(|(name, method)| (name.as_str(), method.as_ref()))
            .collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

#[cfg(test)]
mod tests;
