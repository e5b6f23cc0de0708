//! Member classification — the ordered rule chain.
//!
//! Rule order: admin keyword → city substring (longest first) → region
//! name/alias in the second `-` field → foreign city → unknown.
//! First match wins; there is no backtracking.

use crate::normalize::normalize;
use crate::registry::{ForeignCityRegistry, LocationRegistry, UNSPECIFIED_CITY};
use rayon::prelude::*;
use serde::Serialize;
use std::fmt;
use tracing::trace;

/// The single category a member resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "category", rename_all = "snake_case")]
pub enum MemberClassification {
    Admin,
    /// `city` is a registry city or [`UNSPECIFIED_CITY`].
    Located { region: String, city: String },
    Foreign { city: String },
    Unknown,
}

impl MemberClassification {
    pub fn located_unspecified(region: impl Into<String>) -> Self {
        Self::Located {
            region: region.into(),
            city: UNSPECIFIED_CITY.to_string(),
        }
    }
}

impl fmt::Display for MemberClassification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Located { region, city } if city == UNSPECIFIED_CITY => {
                write!(f, "{} (city unspecified)", region)
            }
            Self::Located { region, city } => write!(f, "{} / {}", region, city),
            Self::Foreign { city } => write!(f, "foreign ({})", city),
            Self::Unknown => write!(f, "unknown"),
        }
    }
}

/// Admin keyword set.
///
/// Keywords containing ASCII letters match case-insensitively; all others
/// match as-is. Blank keywords are ignored, since they would match everything.
#[derive(Debug, Clone, Default)]
pub struct AdminKeywords {
    latin: Vec<String>,
    native: Vec<String>,
}

impl AdminKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut latin = Vec::new();
        let mut native = Vec::new();
        for kw in keywords {
            let kw = kw.as_ref().trim();
            if kw.is_empty() {
                continue;
            }
            if kw.chars().any(|c| c.is_ascii_alphabetic()) {
                latin.push(kw.to_lowercase());
            } else {
                native.push(kw.to_string());
            }
        }
        Self { latin, native }
    }

    pub fn matches(&self, text: &str) -> bool {
        if self.native.iter().any(|kw| text.contains(kw.as_str())) {
            return true;
        }
        if self.latin.is_empty() {
            return false;
        }
        let lowered = text.to_lowercase();
        self.latin.iter().any(|kw| lowered.contains(kw.as_str()))
    }

    pub fn len(&self) -> usize {
        self.latin.len() + self.native.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Classify one normalized member string. Total over all inputs.
pub fn classify(
    normalized: &str,
    admin_keywords: &AdminKeywords,
    registry: &LocationRegistry,
    foreign: &ForeignCityRegistry,
) -> MemberClassification {
    if admin_keywords.matches(normalized) {
        return MemberClassification::Admin;
    }

    if let Some(entry) = registry
        .cities_by_descending_length()
        .iter()
        .find(|e| normalized.contains(e.city.as_str()))
    {
        return MemberClassification::Located {
            region: entry.region.clone(),
            city: entry.city.clone(),
        };
    }

    if let Some(region) = second_field(normalized)
        .and_then(|field| registry.region_by_exact_name_or_alias(field))
    {
        return MemberClassification::located_unspecified(region.name.clone());
    }

    if let Some(city) = foreign.contains_in(normalized) {
        return MemberClassification::Foreign {
            city: city.to_string(),
        };
    }

    trace!(member = normalized, "no rule matched");
    MemberClassification::Unknown
}

/// The trimmed second `-`-separated field, if there are at least two.
fn second_field(text: &str) -> Option<&str> {
    text.split('-').nth(1).map(str::trim)
}

/// The three read-only inputs of the rule chain, bundled for reuse across a run.
#[derive(Debug, Clone)]
pub struct Classifier {
    admin_keywords: AdminKeywords,
    registry: LocationRegistry,
    foreign: ForeignCityRegistry,
}

impl Classifier {
    pub fn new(
        admin_keywords: AdminKeywords,
        registry: LocationRegistry,
        foreign: ForeignCityRegistry,
    ) -> Self {
        Self {
            admin_keywords,
            registry,
            foreign,
        }
    }

    pub fn registry(&self) -> &LocationRegistry {
        &self.registry
    }

    pub fn foreign(&self) -> &ForeignCityRegistry {
        &self.foreign
    }

    pub fn admin_keywords(&self) -> &AdminKeywords {
        &self.admin_keywords
    }

    /// Classify an already-normalized string.
    pub fn classify(&self, normalized: &str) -> MemberClassification {
        classify(normalized, &self.admin_keywords, &self.registry, &self.foreign)
    }

    /// Normalize then classify. Returns the normalized form alongside.
    pub fn classify_raw(&self, raw: &str) -> (String, MemberClassification) {
        let member = normalize(raw);
        let classification = self.classify(&member);
        (member, classification)
    }

    /// Classify a batch in input order.
    pub fn classify_all<S: AsRef<str>>(&self, raw: &[S]) -> Vec<(String, MemberClassification)> {
        raw.iter().map(|m| self.classify_raw(m.as_ref())).collect()
    }

    /// Classify a batch across the rayon pool. Output order matches input.
    pub fn classify_all_parallel<S>(&self, raw: &[S]) -> Vec<(String, MemberClassification)>
    where
        S: AsRef<str> + Sync,
    {
        raw.par_iter().map(|m| self.classify_raw(m.as_ref())).collect()
    }
}
