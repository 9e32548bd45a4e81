//! Breakpoint table: named pixel thresholds.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::error::BreakpointError;
use super::value::BreakpointValue;

/// A registry of named breakpoints.
///
/// Names are case-sensitive. Iteration follows name order so output built
/// from a table is deterministic; use [`BreakpointTable::by_pixels`] for the
/// natural small-to-large order.
///
/// # Example
///
/// ```rust
/// use mediabound::BreakpointTable;
///
/// let table = BreakpointTable::new()
///     .add("s", 400u32)
///     .add("m", 768u32)
///     .add("l", 1100u32);
///
/// assert!(table.has("m"));
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BreakpointTable {
    entries: BTreeMap<String, BreakpointValue>,
}

impl BreakpointTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Adds a named breakpoint, returning the updated table for chaining.
    ///
    /// Adding an existing name replaces its value.
    pub fn add<V: Into<BreakpointValue>>(mut self, name: &str, value: V) -> Self {
        self.entries.insert(name.to_string(), value.into());
        self
    }

    /// Returns the entry stored under `name`.
    pub fn get(&self, name: &str) -> Option<&BreakpointValue> {
        self.entries.get(name)
    }

    /// Returns true if `name` is defined.
    pub fn has(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over all entries in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BreakpointValue)> {
        self.entries.iter().map(|(name, value)| (name.as_str(), value))
    }

    /// Returns well-formed entries ordered by pixel value, then name.
    pub fn by_pixels(&self) -> Vec<(&str, i64)> {
        let mut ordered: Vec<(&str, i64)> = self
            .iter()
            .filter_map(|(name, value)| value.as_pixels().map(|px| (name, px)))
            .collect();
        ordered.sort_by(|a, b| a.1.cmp(&b.1).then_with(|| a.0.cmp(b.0)));
        ordered
    }

    /// Iterates over entries that do not hold a pixel value.
    pub fn malformed(&self) -> impl Iterator<Item = (&str, &BreakpointValue)> {
        self.iter().filter(|(_, value)| !value.is_pixels())
    }

    /// Checks that every entry holds a pixel value.
    ///
    /// Resolution performs the same check per key; call this to catch a
    /// broken table when it is loaded rather than when a key is first used.
    pub fn validate(&self) -> Result<(), BreakpointError> {
        match self.malformed().next() {
            Some((key, value)) => Err(BreakpointError::InvalidBreakpointValue {
                key: key.to_string(),
                value: value.to_string(),
            }),
            None => Ok(()),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for BreakpointTable
where
    K: Into<String>,
    V: Into<BreakpointValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        }
    }
}
