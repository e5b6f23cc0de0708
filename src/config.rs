//! TOML configuration for the reference data.
//!
//! Lookup order: explicit path → `$ROSTER_ATLAS_CONFIG` → `~/.roster-atlas/config.toml`
//! → built-in defaults. Every section is optional.

use crate::classifier::{AdminKeywords, Classifier};
use crate::error::{AtlasError, Result};
use crate::registry::{self, ForeignCityRegistry, LocationRegistry, Region};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

pub const CONFIG_ENV_VAR: &str = "ROSTER_ATLAS_CONFIG";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AtlasConfig {
    /// Replaces the built-in admin keywords when present.
    #[serde(default)]
    pub admin_keywords: Option<Vec<String>>,

    /// Replaces the built-in foreign city list when present. Order matters.
    #[serde(default)]
    pub foreign_cities: Option<Vec<String>>,

    /// Extra regions, appended after the built-in table unless
    /// `replace_builtin_regions` is set.
    #[serde(default)]
    pub regions: Vec<Region>,

    #[serde(default)]
    pub replace_builtin_regions: bool,
}

impl AtlasConfig {
    /// Resolve and load the configuration.
    ///
    /// A missing explicit or env-provided file is an error; a missing default
    /// file just means built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
            return Self::load_from(Path::new(&path));
        }
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from(&path),
            _ => {
                debug!("no config file found, using built-in reference data");
                Ok(Self::default())
            }
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| AtlasError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&content)?;
        info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    fn default_path() -> Option<PathBuf> {
        dirs::home_dir().map(|home| home.join(".roster-atlas").join("config.toml"))
    }

    /// The region table this config describes.
    pub fn region_table(&self) -> Vec<Region> {
        let mut regions = if self.replace_builtin_regions {
            Vec::new()
        } else {
            registry::builtin_regions()
        };
        regions.extend(self.regions.iter().cloned());
        regions
    }

    /// Build and validate all reference data. Conflicts are fatal.
    pub fn build_classifier(&self) -> Result<Classifier> {
        let location = LocationRegistry::new(self.region_table())?;

        let foreign = match &self.foreign_cities {
            Some(cities) => ForeignCityRegistry::new(cities.iter().cloned())?,
            None => ForeignCityRegistry::builtin()?,
        };

        let admin = match &self.admin_keywords {
            Some(keywords) => AdminKeywords::new(keywords),
            None => AdminKeywords::new(registry::DEFAULT_ADMIN_KEYWORDS),
        };

        info!(
            regions = location.len(),
            cities = location.cities_by_descending_length().len(),
            foreign = foreign.len(),
            admin_keywords = admin.len(),
            "reference data ready"
        );
        Ok(Classifier::new(admin, location, foreign))
    }
}
