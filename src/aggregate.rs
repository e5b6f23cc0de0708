//! Aggregation of classified members into the hierarchical report model.
//!
//! Buckets are filled in a single pass in input order. Presentation order is
//! applied by the `*_sorted` accessors and by serialization:
//! regions by `(-total, name)`, cities by `(-count, name)` with the
//! unspecified-city bucket always first when present.

use crate::classifier::MemberClassification;
use crate::registry::UNSPECIFIED_CITY;
use serde::ser::{Serialize, Serializer};
use std::cmp::Reverse;
use std::collections::HashMap;

/// Members placed under one region, split by city.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RegionBucket {
    total: usize,
    cities: HashMap<String, Vec<String>>,
}

impl RegionBucket {
    /// Members across all city buckets, the unspecified bucket included.
    pub fn total(&self) -> usize {
        self.total
    }

    pub fn city(&self, city: &str) -> Option<&[String]> {
        self.cities.get(city).map(Vec::as_slice)
    }

    /// Members matched by region name or alias only.
    pub fn unspecified(&self) -> Option<&[String]> {
        self.city(UNSPECIFIED_CITY)
    }

    /// City buckets in presentation order.
    pub fn cities_sorted(&self) -> Vec<(&str, &[String])> {
        let mut named: Vec<(&str, &[String])> = self
            .cities
            .iter()
            .filter(|(city, _)| city.as_str() != UNSPECIFIED_CITY)
            .map(|(city, members)| (city.as_str(), members.as_slice()))
            .collect();
        named.sort_by_key(|&(city, members)| (Reverse(members.len()), city));

        let mut ordered = Vec::with_capacity(named.len() + 1);
        if let Some(members) = self.unspecified().filter(|m| !m.is_empty()) {
            ordered.push((UNSPECIFIED_CITY, members));
        }
        ordered.extend(named);
        ordered
    }

    fn push(&mut self, city: String, member: String) {
        self.cities.entry(city).or_default().push(member);
        self.total += 1;
    }
}

/// The result of one analysis run.
///
/// Every bucket holds members in their normalized form, the string the
/// classifier actually saw, not the raw input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReportModel {
    admin: Vec<String>,
    regions: HashMap<String, RegionBucket>,
    foreign: Vec<String>,
    unknown: Vec<String>,
}

impl ReportModel {
    pub fn admin(&self) -> &[String] {
        &self.admin
    }

    pub fn foreign(&self) -> &[String] {
        &self.foreign
    }

    pub fn unknown(&self) -> &[String] {
        &self.unknown
    }

    pub fn region(&self, name: &str) -> Option<&RegionBucket> {
        self.regions.get(name)
    }

    /// Regions in presentation order: highest total first, then by name.
    pub fn regions_sorted(&self) -> Vec<(&str, &RegionBucket)> {
        let mut regions: Vec<(&str, &RegionBucket)> = self
            .regions
            .iter()
            .map(|(name, bucket)| (name.as_str(), bucket))
            .collect();
        regions.sort_by_key(|&(name, bucket)| (Reverse(bucket.total), name));
        regions
    }

    /// Sum of all region totals.
    pub fn located_total(&self) -> usize {
        self.regions.values().map(|b| b.total).sum()
    }

    /// Every member counted exactly once.
    pub fn total(&self) -> usize {
        self.admin.len() + self.located_total() + self.foreign.len() + self.unknown.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total() == 0
    }
}

/// Single-pass builder for [`ReportModel`]. Stores members exactly as given;
/// callers pass the normalized string.
#[derive(Debug, Default)]
pub struct Aggregator {
    model: ReportModel,
}

impl Aggregator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, member: impl Into<String>, classification: MemberClassification) {
        let member = member.into();
        match classification {
            MemberClassification::Admin => self.model.admin.push(member),
            MemberClassification::Located { region, city } => self
                .model
                .regions
                .entry(region)
                .or_default()
                .push(city, member),
            MemberClassification::Foreign { .. } => self.model.foreign.push(member),
            MemberClassification::Unknown => self.model.unknown.push(member),
        }
    }

    pub fn finish(self) -> ReportModel {
        self.model
    }
}

/// Build a report from classifications in input order.
///
/// Each item pairs the member string to store with its classification. The
/// pipeline feeds `Classifier::classify_all` output here, so buckets hold
/// normalized members.
pub fn aggregate<I, S>(classifications: I) -> ReportModel
where
    I: IntoIterator<Item = (S, MemberClassification)>,
    S: Into<String>,
{
    let mut aggregator = Aggregator::new();
    for (member, classification) in classifications {
        aggregator.add(member, classification);
    }
    aggregator.finish()
}

// ─── Serialization (presentation order) ─────────────────────────

#[derive(serde::Serialize)]
struct ReportView<'a> {
    total: usize,
    admin: &'a [String],
    regions: Vec<RegionView<'a>>,
    foreign: &'a [String],
    unknown: &'a [String],
}

#[derive(serde::Serialize)]
struct RegionView<'a> {
    name: &'a str,
    total: usize,
    cities: Vec<CityView<'a>>,
}

#[derive(serde::Serialize)]
struct CityView<'a> {
    name: &'a str,
    unspecified: bool,
    members: &'a [String],
}

impl Serialize for ReportModel {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let view = ReportView {
            total: self.total(),
            admin: &self.admin,
            regions: self
                .regions_sorted()
                .into_iter()
                .map(|(name, bucket)| RegionView {
                    name,
                    total: bucket.total,
                    cities: bucket
                        .cities_sorted()
                        .into_iter()
                        .map(|(city, members)| CityView {
                            name: city,
                            unspecified: city == UNSPECIFIED_CITY,
                            members,
                        })
                        .collect(),
                })
                .collect(),
            foreign: &self.foreign,
            unknown: &self.unknown,
        };
        view.serialize(serializer)
    }
}
