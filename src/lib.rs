//! Roster Atlas — classifies chat-group member names by region and builds a
//! deterministic, hierarchical headcount report.

pub mod aggregate;
pub mod analysis;
pub mod classifier;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod normalize;
pub mod registry;
pub mod report;
pub mod server;

pub use aggregate::{aggregate, Aggregator, RegionBucket, ReportModel};
pub use analysis::{analyze, Schedule};
pub use classifier::{classify, AdminKeywords, Classifier, MemberClassification};
pub use config::AtlasConfig;
pub use error::{AtlasError, Result};
pub use normalize::normalize;
