//! Reference registry: regions with their cities and aliases, plus the flat
//! foreign city list.
//!
//! Both registries are built once at startup and shared read-only.

pub mod builtin;
pub mod foreign;
pub mod location;
pub mod types;

pub use builtin::{
    builtin_foreign_cities, builtin_regions, default_admin_keywords, DEFAULT_ADMIN_KEYWORDS,
};
pub use foreign::ForeignCityRegistry;
pub use location::{CityEntry, LocationRegistry};
pub use types::{Region, RegionKind, RegistryConflictError, UNSPECIFIED_CITY};
