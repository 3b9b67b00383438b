use serde::{Deserialize, Serialize};

/// Dotted prefix shared by every synthesized predefined property name.
/// User-authored property definitions must never enter this namespace.
pub const PREDEFINED_PREFIX: &str = "hesperides.";

#[must_use]
pub fn is_reserved_property_name(name: &str) -> bool {
    name.starts_with(PREDEFINED_PREFIX)
}

/// A simple name/value pair, the only shape that participates in scope
/// overriding and predefined synthesis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValuedProperty {
    pub name: String,
    pub value: String,
}

impl ValuedProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// One repetition of an iterable property: a titled block of nested values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IterablePropertyBlock {
    pub title: String,
    pub properties: Vec<AbstractValuedProperty>,
}

impl IterablePropertyBlock {
    #[must_use]
    pub fn new(title: impl Into<String>, properties: Vec<AbstractValuedProperty>) -> Self {
        Self {
            title: title.into(),
            properties,
        }
    }
}

/// A repeated configuration block: a name plus an ordered sequence of nested
/// property sets. Opaque to override/fill-missing merge logic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IterableValuedProperty {
    pub name: String,
    pub blocks: Vec<IterablePropertyBlock>,
}

impl IterableValuedProperty {
    #[must_use]
    pub fn new(name: impl Into<String>, blocks: Vec<IterablePropertyBlock>) -> Self {
        Self {
            name: name.into(),
            blocks,
        }
    }
}

/// The polymorphic property shape: simple or iterable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AbstractValuedProperty {
    Valued(ValuedProperty),
    Iterable(IterableValuedProperty),
}

impl AbstractValuedProperty {
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Valued(valued) => &valued.name,
            Self::Iterable(iterable) => &iterable.name,
        }
    }

    /// Type-discriminating accessor for the merge routines, which only ever
    /// operate on the simple variant.
    #[must_use]
    pub fn as_valued(&self) -> Option<&ValuedProperty> {
        match self {
            Self::Valued(valued) => Some(valued),
            Self::Iterable(_) => None,
        }
    }
}

impl From<ValuedProperty> for AbstractValuedProperty {
    fn from(valued: ValuedProperty) -> Self {
        Self::Valued(valued)
    }
}

impl From<IterableValuedProperty> for AbstractValuedProperty {
    fn from(iterable: IterableValuedProperty) -> Self {
        Self::Iterable(iterable)
    }
}
