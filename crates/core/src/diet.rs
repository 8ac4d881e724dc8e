//! Diet classification.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Diet classification of a species. Governs cohabitation compatibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Diet {
    Carnivore,
    Herbivore,
}

impl Diet {
    /// Canonical form as stored in the species registry.
    pub fn as_str(&self) -> &'static str {
        match self {
            Diet::Carnivore => "Carnivore",
            Diet::Herbivore => "Herbivore",
        }
    }

    pub fn is_carnivore(&self) -> bool {
        matches!(self, Diet::Carnivore)
    }
}

impl fmt::Display for Diet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Diet {
    type Err = CoreError;

    /// Parse a diet string from the species registry.
    ///
    /// The registry column is constrained to the two canonical values, so
    /// anything else means corrupted reference data, not caller input.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Carnivore" => Ok(Diet::Carnivore),
            "Herbivore" => Ok(Diet::Herbivore),
            other => Err(CoreError::Internal(format!(
                "unknown diet '{other}' in species registry"
            ))),
        }
    }
}
