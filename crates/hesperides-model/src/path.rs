// SPDX-License-Identifier: Apache-2.0

use crate::validation::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

pub const MODULE_PATH_SEPARATOR: char = '#';

/// Where a module sits in the platform's logical-group tree, stored with a
/// leading separator: `#groupA#groupB`. The bare separator `#` is the root.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, PartialOrd, Ord)]
#[serde(transparent)]
#[non_exhaustive]
pub struct ModulePath(String);

impl ModulePath {
    /// The path is stored verbatim; no whitespace normalization is applied.
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        if input.is_empty() {
            return Err(ValidationError("module path must not be empty".to_string()));
        }
        if !input.starts_with(MODULE_PATH_SEPARATOR) {
            return Err(ValidationError(format!(
                "module path must start with '{MODULE_PATH_SEPARATOR}'"
            )));
        }
        if input.len() > 1 && input[1..].split(MODULE_PATH_SEPARATOR).any(str::is_empty) {
            return Err(ValidationError(
                "module path must not contain empty logical groups".to_string(),
            ));
        }
        Ok(Self(input.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Logical groups in order, leading empty segment discarded.
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0[1..]
            .split(MODULE_PATH_SEPARATOR)
            .filter(|group| !group.is_empty())
    }

    /// The path with the reserved separator replaced by `/`.
    #[must_use]
    pub fn to_slash_path(&self) -> String {
        self.0.replace(MODULE_PATH_SEPARATOR, "/")
    }
}

impl Display for ModulePath {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
