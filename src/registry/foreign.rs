//! Flat list of foreign cities, matched by substring in configuration order.

use super::builtin;
use super::types::RegistryConflictError;
use std::collections::HashSet;

#[derive(Debug, Clone, Default)]
pub struct ForeignCityRegistry {
    cities: Vec<String>,
}

impl ForeignCityRegistry {
    /// Build from a configuration list. Repeated names keep their first
    /// position; names are trimmed and blank names are rejected.
    pub fn new<I, S>(cities: I) -> Result<Self, RegistryConflictError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = HashSet::new();
        let mut ordered = Vec::new();
        for city in cities {
            let city: String = city.into();
            let city = city.trim().to_string();
            if city.is_empty() {
                return Err(RegistryConflictError::EmptyName("foreign city"));
            }
            if seen.insert(city.clone()) {
                ordered.push(city);
            }
        }
        Ok(Self { cities: ordered })
    }

    pub fn builtin() -> Result<Self, RegistryConflictError> {
        Self::new(builtin::builtin_foreign_cities())
    }

    /// First configured city found as a substring of `text`.
    pub fn contains_in(&self, text: &str) -> Option<&str> {
        self.cities
            .iter()
            .find(|city| text.contains(city.as_str()))
            .map(String::as_str)
    }

    pub fn cities(&self) -> &[String] {
        &self.cities
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}
