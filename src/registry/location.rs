//! Region/city registry with a derived city index.
//!
//! Built once from a region table and never mutated. Construction validates
//! that every city belongs to exactly one region.

use super::builtin;
use super::types::{Region, RegistryConflictError, UNSPECIFIED_CITY};
use std::collections::HashMap;
use tracing::debug;

/// A city and the region that owns it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CityEntry {
    pub city: String,
    pub region: String,
}

/// Immutable region/city reference data.
#[derive(Debug, Clone)]
pub struct LocationRegistry {
    regions: Vec<Region>,
    /// city → index into `regions`
    city_index: HashMap<String, usize>,
    /// canonical name or alias → index into `regions`, first declaration wins
    name_index: HashMap<String, usize>,
    by_length: Vec<CityEntry>,
}

impl LocationRegistry {
    /// Build a registry from a region table.
    ///
    /// Fails eagerly on duplicate city claims, duplicate region names, blank
    /// names, and cities named like the unspecified-city bucket. Surrounding
    /// whitespace on every name is trimmed first, since member strings are
    /// compared after normalization.
    pub fn new(regions: Vec<Region>) -> Result<Self, RegistryConflictError> {
        let regions: Vec<Region> = regions.into_iter().map(trim_names).collect();
        let mut city_index: HashMap<String, usize> = HashMap::new();
        let mut name_index: HashMap<String, usize> = HashMap::new();
        let mut region_names: HashMap<&str, usize> = HashMap::new();

        for (idx, region) in regions.iter().enumerate() {
            if region.name.is_empty() {
                return Err(RegistryConflictError::EmptyName("region"));
            }
            if region_names.insert(region.name.as_str(), idx).is_some() {
                return Err(RegistryConflictError::DuplicateRegion(region.name.clone()));
            }

            for city in &region.cities {
                if city.is_empty() {
                    return Err(RegistryConflictError::EmptyName("city"));
                }
                if city == UNSPECIFIED_CITY {
                    return Err(RegistryConflictError::ReservedName(city.clone()));
                }
                if let Some(&owner) = city_index.get(city) {
                    return Err(RegistryConflictError::DuplicateCity {
                        city: city.clone(),
                        first: regions[owner].name.clone(),
                        second: region.name.clone(),
                    });
                }
                city_index.insert(city.clone(), idx);
            }
        }

        // Names are indexed in declaration order so an alias that shadows a
        // later region's name resolves to the earlier region.
        for (idx, region) in regions.iter().enumerate() {
            name_index.entry(region.name.clone()).or_insert(idx);
            for alias in &region.aliases {
                if alias.is_empty() {
                    return Err(RegistryConflictError::EmptyName("alias"));
                }
                let owner = *name_index.entry(alias.clone()).or_insert(idx);
                if owner != idx {
                    debug!(
                        alias = %alias,
                        kept = %regions[owner].name,
                        ignored = %region.name,
                        "alias already resolves to an earlier region"
                    );
                }
            }
        }

        let mut by_length: Vec<CityEntry> = city_index
            .iter()
            .map(|(city, &idx)| CityEntry {
                city: city.clone(),
                region: regions[idx].name.clone(),
            })
            .collect();
        by_length.sort_by(|a, b| {
            b.city
                .chars()
                .count()
                .cmp(&a.city.chars().count())
                .then_with(|| a.city.cmp(&b.city))
        });

        debug!(
            regions = regions.len(),
            cities = by_length.len(),
            "location registry built"
        );

        Ok(Self {
            regions,
            city_index,
            name_index,
            by_length,
        })
    }

    /// Registry over the built-in region table.
    pub fn builtin() -> Result<Self, RegistryConflictError> {
        Self::new(builtin::builtin_regions())
    }

    /// All cities, longest name first, ties broken by name ascending.
    ///
    /// Substring matching must walk this order so that a longer, more
    /// specific name is tested before any shorter name it contains.
    pub fn cities_by_descending_length(&self) -> &[CityEntry] {
        &self.by_length
    }

    /// Exact lookup on a region's canonical name or one of its aliases.
    pub fn region_by_exact_name_or_alias(&self, text: &str) -> Option<&Region> {
        self.name_index.get(text).map(|&idx| &self.regions[idx])
    }

    pub fn region_of_city(&self, city: &str) -> Option<&Region> {
        self.city_index.get(city).map(|&idx| &self.regions[idx])
    }

    /// Region by canonical name only.
    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }

    /// Regions in declaration order.
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    pub fn len(&self) -> usize {
        self.regions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.regions.is_empty()
    }
}

fn trim_names(region: Region) -> Region {
    let trim_all = |names: Vec<String>| -> Vec<String> {
        names.into_iter().map(|n| n.trim().to_string()).collect()
    };
    Region {
        name: region.name.trim().to_string(),
        kind: region.kind,
        cities: trim_all(region.cities),
        aliases: trim_all(region.aliases),
    }
}
