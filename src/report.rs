//! Report rendering: the plain-text roster report and the numeric summary
//! consumed by chart renderers.

use crate::aggregate::ReportModel;
use crate::registry::UNSPECIFIED_CITY;
use serde::Serialize;

/// Category totals plus per-region totals in presentation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub total: usize,
    pub admin: usize,
    pub located: usize,
    pub foreign: usize,
    pub unknown: usize,
    pub regions: Vec<RegionCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegionCount {
    pub name: String,
    pub total: usize,
}

impl Summary {
    pub fn from_report(report: &ReportModel) -> Self {
        Self {
            total: report.total(),
            admin: report.admin().len(),
            located: report.located_total(),
            foreign: report.foreign().len(),
            unknown: report.unknown().len(),
            regions: report
                .regions_sorted()
                .into_iter()
                .map(|(name, bucket)| RegionCount {
                    name: name.to_string(),
                    total: bucket.total(),
                })
                .collect(),
        }
    }
}

/// Render the full roster report as text.
///
/// Foreign and unknown sections are omitted when empty. Within a region the
/// unspecified-city bucket is printed first as "<region>未知城市".
pub fn render_text(report: &ReportModel) -> String {
    let mut out = String::new();

    out.push_str("=== 微信群成员分析报告 ===\n\n");
    out.push_str(&format!("该群共有成员{}人，具体构成如下：\n\n", report.total()));

    out.push_str(&format!("【马哥教育成员】（{}人）\n", report.admin().len()));
    for member in report.admin() {
        out.push_str(&format!("- {}\n", member));
    }
    out.push('\n');

    out.push_str("【地区分布情况】\n");
    for (region, bucket) in report.regions_sorted() {
        out.push_str(&format!("\n{}（共{}人）：\n", region, bucket.total()));
        for (city, members) in bucket.cities_sorted() {
            if city == UNSPECIFIED_CITY {
                out.push_str(&format!("- {}未知城市（{}人）\n", region, members.len()));
            } else {
                out.push_str(&format!("- {}（{}人）\n", city, members.len()));
            }
            for member in members {
                out.push_str(&format!("  * {}\n", member));
            }
        }
    }

    if !report.foreign().is_empty() {
        out.push_str(&format!("\n【国外成员】（{}人）\n", report.foreign().len()));
        for member in report.foreign() {
            out.push_str(&format!("- {}\n", member));
        }
    }

    if !report.unknown().is_empty() {
        out.push_str(&format!("\n【未知地区人员】（{}人）\n", report.unknown().len()));
        for member in report.unknown() {
            out.push_str(&format!("- {}\n", member));
        }
    }

    // The trailing newline of the last line is dropped, like a joined list.
    if out.ends_with('\n') {
        out.pop();
    }
    out
}
