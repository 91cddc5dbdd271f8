use std::collections::HashMap;

use crate::{
    ast::Name,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        store::{DEFAULT_CONSTANTS, VariableStore},
    },
};

/// A [`VariableStore`] backed by a `HashMap`.
///
/// ## Usage
///
/// Created once per session, seeded with [`DEFAULT_CONSTANTS`], and dropped
/// with the session. Nothing is persisted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryStore {
    variables: HashMap<Name, f64>,
}

impl MemoryStore {
    /// Creates an empty store with no constants.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Creates a store seeded with [`DEFAULT_CONSTANTS`].
    ///
    /// # Example
    /// ```
    /// use linecalc::{
    ///     ast::Name,
    ///     interpreter::store::{MemoryStore, VariableStore},
    /// };
    ///
    /// let store = MemoryStore::new();
    /// assert_eq!(store.get(&Name::new("pi").unwrap()), Ok(3.14159));
    /// ```
    #[must_use]
    pub fn new() -> Self {
        let variables = DEFAULT_CONSTANTS.iter()
                                         .filter_map(|&(name, value)| {
                                             Name::new(name).map(|name| (name, value))
                                         })
                                         .collect();
        Self { variables }
    }

    /// Number of bound variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variable is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Whether `name` is bound.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.variables.contains_key(name)
    }

    /// All bindings, sorted by name for stable display.
    #[must_use]
    pub fn sorted(&self) -> Vec<(&Name, f64)> {
        let mut entries: Vec<_> = self.variables.iter().map(|(name, value)| (name, *value)).collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

impl FromIterator<(Name, f64)> for MemoryStore {
    fn from_iter<T: IntoIterator<Item = (Name, f64)>>(iter: T) -> Self {
        Self { variables: iter.into_iter().collect() }
    }
}

impl Extend<(Name, f64)> for MemoryStore {
    fn extend<T: IntoIterator<Item = (Name, f64)>>(&mut self, iter: T) {
        self.variables.extend(iter);
    }
}

impl VariableStore for MemoryStore {
    fn get(&self, name: &Name) -> EvalResult<f64> {
        self.variables
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::undefined_variable(name.as_str()))
    }

    fn set(&mut self, name: &Name, value: f64) {
        self.variables.insert(name.clone(), value);
    }

    fn remove(&mut self, name: &Name) -> EvalResult<()> {
        self.variables
            .remove(name)
            .map(|_| ())
            .ok_or_else(|| RuntimeError::undefined_variable(name.as_str()))
    }
}
