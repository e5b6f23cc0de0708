//! Core types for the reference registry.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Bucket key used when a member matched a region by name or alias but no city.
pub const UNSPECIFIED_CITY: &str = "unspecified-city";

/// Administrative level of a region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RegionKind {
    Municipality,
    Province,
    Autonomous,
    Special,
}

impl fmt::Display for RegionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Municipality => write!(f, "municipality"),
            Self::Province => write!(f, "province"),
            Self::Autonomous => write!(f, "autonomous"),
            Self::Special => write!(f, "special"),
        }
    }
}

/// A top-level administrative unit with its cities and alternate names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Region {
    pub name: String,
    pub kind: RegionKind,
    /// Cities in declaration order. Unique across the whole registry.
    #[serde(default)]
    pub cities: Vec<String>,
    /// Short names and abbreviations, matched only by exact equality.
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Region {
    pub fn new(name: impl Into<String>, kind: RegionKind) -> Self {
        Self {
            name: name.into(),
            kind,
            cities: Vec::new(),
            aliases: Vec::new(),
        }
    }

    pub fn with_cities<I, S>(mut self, cities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.cities.extend(cities.into_iter().map(Into::into));
        self
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases.extend(aliases.into_iter().map(Into::into));
        self
    }
}

/// Registry construction errors. All of them are configuration mistakes and
/// fatal at startup.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryConflictError {
    /// Two regions (or one region twice) claim the same city.
    #[error("city '{city}' is claimed by both '{first}' and '{second}'")]
    DuplicateCity {
        city: String,
        first: String,
        second: String,
    },

    #[error("region '{0}' is declared more than once")]
    DuplicateRegion(String),

    /// A region, city, alias or foreign city name is blank.
    #[error("empty {0} name in registry configuration")]
    EmptyName(&'static str),

    #[error("'{0}' is reserved for the unspecified-city bucket")]
    ReservedName(String),
}
