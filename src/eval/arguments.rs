//! Ordered variable bindings.

use crate::number::Decimal;

/// Ordered association of variable name to value.
///
/// Iteration follows insertion order; re-inserting a name replaces its value
/// in place.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Arguments {
    entries: Vec<(String, Decimal)>,
}

impl Arguments {
    /// Creates an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Arguments::insert`].
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Decimal>) -> Self {
        self.insert(name, value);
        self
    }

    /// Binds `name` to `value`, returning the previous value if any.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        value: impl Into<Decimal>,
    ) -> Option<Decimal> {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(known, _)| *known == name) {
            Some((_, slot)) => Some(std::mem::replace(slot, value)),
            None => {
                self.entries.push((name, value));
                None
            }
        }
    }

    /// Returns the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&Decimal> {
        self.entries
            .iter()
            .find(|(known, _)| known == name)
            .map(|(_, value)| value)
    }

    /// Number of bindings.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` when nothing is bound.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates bindings in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Decimal)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Iterates values in binding order.
    pub fn values(&self) -> impl Iterator<Item = &Decimal> {
        self.entries.iter().map(|(_, value)| value)
    }
}

impl<K: Into<String>, V: Into<Decimal>> FromIterator<(K, V)> for Arguments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut arguments = Self::new();
        for (name, value) in iter {
            arguments.insert(name, value);
        }
        arguments
    }
}
