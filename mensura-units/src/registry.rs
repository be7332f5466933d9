//! Process-wide quantity registry
//!
//! Built once behind a `LazyLock` and never mutated, so unsynchronized
//! concurrent reads from any number of callers are safe.

use std::collections::HashMap;
use std::sync::LazyLock;

use thiserror::Error;

use crate::quantity::{Quantity, Unit};
use crate::units;

/// Global quantity registry
pub static QUANTITIES: LazyLock<Registry> = LazyLock::new(Registry::new);

/// Registry access failures
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A key no registered quantity carries; callers obtain keys from
    /// the registry itself, so this is a precondition violation
    #[error("unknown quantity key: {0}")]
    UnknownQuantity(String),

    /// A unit index outside the quantity's table
    #[error("unit index {index} out of range for {quantity} ({len} units)")]
    IndexOutOfRange {
        quantity: &'static str,
        index: usize,
        len: usize,
    },
}

/// Ordered collection of every quantity, keyed for lookup.
///
/// Quantity order and unit order are both part of the caller contract:
/// they drive selection lists and field indices in the UI.
pub struct Registry {
    quantities: Vec<Quantity>,
    index: HashMap<&'static str, usize>,
}

impl Registry {
    pub fn new() -> Self {
        let quantities = units::all();
        let index = quantities
            .iter()
            .enumerate()
            .map(|(position, quantity)| (quantity.key, position))
            .collect();
        let registry = Registry { quantities, index };
        tracing::debug!(quantities = registry.quantities.len(), "quantity registry built");
        registry
    }

    /// Quantity by key
    pub fn get(&self, key: &str) -> Option<&Quantity> {
        self.index.get(key).map(|&position| &self.quantities[position])
    }

    /// Quantity by key, failing with `UnknownQuantity`
    pub fn lookup(&self, key: &str) -> Result<&Quantity, RegistryError> {
        self.get(key)
            .ok_or_else(|| RegistryError::UnknownQuantity(key.to_string()))
    }

    /// Unit `index` of quantity `key`
    pub fn unit_at(&self, key: &str, index: usize) -> Result<&Unit, RegistryError> {
        self.lookup(key)?.unit(index)
    }

    /// Quantity keys in display order
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.quantities.iter().map(|q| q.key)
    }

    /// All quantities in display order
    pub fn iter(&self) -> std::slice::Iter<'_, Quantity> {
        self.quantities.iter()
    }

    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
