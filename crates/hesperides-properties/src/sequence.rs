// SPDX-License-Identifier: Apache-2.0

use hesperides_model::{AbstractValuedProperty, ValuedProperty};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeSet;

/// Ordered, name-unique working set of property values built up by
/// successive scope merges. Every operation consumes the sequence and
/// returns a new one, so a sequence is never shared between requests.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PropertySequence(Vec<AbstractValuedProperty>);

// Deserialization goes through `from_properties` so a decoded sequence
// upholds name uniqueness like every other constructor.
impl<'de> Deserialize<'de> for PropertySequence {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let properties = Vec::<AbstractValuedProperty>::deserialize(deserializer)?;
        Ok(Self::from_properties(properties))
    }
}

impl PropertySequence {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a sequence from an ordered list, enforcing name uniqueness
    /// with last-write-wins.
    #[must_use]
    pub fn from_properties(properties: Vec<AbstractValuedProperty>) -> Self {
        let mut sequence = Self::new();
        for property in properties {
            match sequence.position_of(property.name()) {
                Some(index) => sequence.0[index] = property,
                None => sequence.0.push(property),
            }
        }
        sequence
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &AbstractValuedProperty> {
        self.0.iter()
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AbstractValuedProperty> {
        self.0.iter().find(|property| property.name() == name)
    }

    #[must_use]
    pub fn into_properties(self) -> Vec<AbstractValuedProperty> {
        self.0
    }

    /// Override-merge: each incoming simple value replaces the same-named
    /// entry in place, or is appended when the name is new. Repeated
    /// application is the precedence mechanism: later scopes win.
    #[must_use]
    pub fn with_overriding_valued_properties<'a, I>(mut self, incoming: I) -> Self
    where
        I: IntoIterator<Item = &'a ValuedProperty>,
    {
        for property in incoming {
            match self.position_of(&property.name) {
                Some(index) => {
                    self.0[index] = AbstractValuedProperty::Valued(property.clone());
                }
                None => self.0.push(AbstractValuedProperty::Valued(property.clone())),
            }
        }
        self
    }

    /// Fill-missing-merge: each incoming simple value is appended only when
    /// its name is absent. Never overwrites.
    #[must_use]
    pub fn with_valued_properties_if_undefined<'a, I>(mut self, incoming: I) -> Self
    where
        I: IntoIterator<Item = &'a ValuedProperty>,
    {
        for property in incoming {
            if self.position_of(&property.name).is_none() {
                self.0.push(AbstractValuedProperty::Valued(property.clone()));
            }
        }
        self
    }

    /// Drops every entry whose name is in `names`.
    #[must_use]
    pub fn without_names(mut self, names: &BTreeSet<String>) -> Self {
        self.0.retain(|property| !names.contains(property.name()));
        self
    }

    fn position_of(&self, name: &str) -> Option<usize> {
        self.0.iter().position(|property| property.name() == name)
    }
}

impl IntoIterator for PropertySequence {
    type Item = AbstractValuedProperty;
    type IntoIter = std::vec::IntoIter<AbstractValuedProperty>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl FromIterator<AbstractValuedProperty> for PropertySequence {
    fn from_iter<T: IntoIterator<Item = AbstractValuedProperty>>(iter: T) -> Self {
        Self::from_properties(iter.into_iter().collect())
    }
}
