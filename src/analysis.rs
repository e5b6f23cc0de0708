//! End-to-end run: normalize → classify → aggregate.

use crate::aggregate::{aggregate, ReportModel};
use crate::classifier::Classifier;
use tracing::info;

/// How classification is scheduled. Output is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Schedule {
    #[default]
    Sequential,
    Parallel,
}

/// Analyze a member list against the loaded reference data.
pub fn analyze<S>(classifier: &Classifier, members: &[S], schedule: Schedule) -> ReportModel
where
    S: AsRef<str> + Sync,
{
    let classified = match schedule {
        Schedule::Sequential => classifier.classify_all(members),
        Schedule::Parallel => classifier.classify_all_parallel(members),
    };
    let report = aggregate(classified);

    info!(
        members = members.len(),
        admin = report.admin().len(),
        located = report.located_total(),
        regions = report.regions_sorted().len(),
        foreign = report.foreign().len(),
        unknown = report.unknown().len(),
        "analysis complete"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::AdminKeywords;
    use crate::registry::{
        ForeignCityRegistry, LocationRegistry, Region, RegionKind, UNSPECIFIED_CITY,
    };

    fn example_classifier() -> Classifier {
        let registry = LocationRegistry::new(vec![
            Region::new("北京", RegionKind::Municipality)
                .with_cities(["北京"])
                .with_aliases(["京"]),
            Region::new("上海", RegionKind::Municipality)
                .with_cities(["上海"])
                .with_aliases(["沪"]),
            Region::new("广东", RegionKind::Province)
                .with_cities(["广州", "深圳"])
                .with_aliases(["粤"]),
        ])
        .unwrap();
        let foreign = ForeignCityRegistry::new(["纽约"]).unwrap();
        Classifier::new(AdminKeywords::new(["马哥"]), registry, foreign)
    }

    #[test]
    fn test_end_to_end_example() {
        let members = ["马哥-北京-张三", "002-广州-李四", "纽约-Tom", "某某"];
        let report = analyze(&example_classifier(), &members, Schedule::Sequential);

        assert_eq!(report.admin(), &["马哥-北京-张三"]);
        let guangdong = report.region("广东").unwrap();
        assert_eq!(guangdong.total(), 1);
        assert_eq!(guangdong.city("广州").unwrap(), &["002-广州-李四"]);
        assert!(report.region("北京").is_none());
        assert_eq!(report.foreign(), &["纽约-Tom"]);
        assert_eq!(report.unknown(), &["某某"]);
        assert_eq!(report.total(), 4);
    }

    #[test]
    fn test_alias_fallback_example() {
        let report = analyze(&example_classifier(), &["007-沪-王五"], Schedule::Sequential);
        let shanghai = report.region("上海").unwrap();
        assert_eq!(shanghai.total(), 1);
        assert_eq!(shanghai.unspecified().unwrap(), &["007-沪-王五"]);
    }

    #[test]
    fn test_buckets_hold_normalized_members() {
        let members = ["\u{FEFF}002-广州-李四  ", "纽约-\u{200B}Tom", " 某某\u{3000}"];
        let report = analyze(&example_classifier(), &members, Schedule::Sequential);
        assert_eq!(
            report.region("广东").unwrap().city("广州").unwrap(),
            &["002-广州-李四"]
        );
        assert_eq!(report.foreign(), &["纽约-Tom"]);
        assert_eq!(report.unknown(), &["某某"]);
    }

    #[test]
    fn test_blank_members_are_counted() {
        let members = ["", "   ", "\u{200B}", "某某"];
        let report = analyze(&example_classifier(), &members, Schedule::Sequential);
        assert_eq!(report.unknown().len(), 4);
        assert_eq!(report.total(), 4);
    }

    #[test]
    fn test_parallel_schedule_matches_sequential() {
        let members: Vec<String> = (0..300)
            .map(|i| match i % 6 {
                0 => format!("{}-广州-a", i),
                1 => format!("{}-深圳-b", i),
                2 => format!("{}-粤-c", i),
                3 => format!("马哥-{}", i),
                4 => format!("纽约-{}", i),
                _ => format!("?{}", i),
            })
            .collect();
        let c = example_classifier();
        let seq = analyze(&c, &members, Schedule::Sequential);
        let par = analyze(&c, &members, Schedule::Parallel);
        assert_eq!(seq, par);
        assert_eq!(seq.total(), members.len());
    }

    #[test]
    fn test_sentinel_listed_first_regardless_of_count() {
        let members = [
            "1-广州-a", "2-广州-b", "3-广州-c", "4-深圳-d", "5-粤-e",
        ];
        let report = analyze(&example_classifier(), &members, Schedule::Sequential);
        let cities: Vec<&str> = report
            .region("广东")
            .unwrap()
            .cities_sorted()
            .iter()
            .map(|(c, _)| *c)
            .collect();
        assert_eq!(cities, vec![UNSPECIFIED_CITY, "广州", "深圳"]);
    }

    #[test]
    fn test_conservation_on_builtin_data() {
        let c = crate::config::AtlasConfig::default().build_classifier().unwrap();
        let members = [
            "马哥-北京-张三",
            "002-广州-李四",
            "003-沪-王五",
            "004-乌鲁木齐-赵六",
            "005-新-钱七",
            "纽约-Tom",
            "巴黎 Alice",
            "",
            "某某",
            "006-台北-小林",
        ];
        let report = analyze(&c, &members, Schedule::Sequential);
        assert_eq!(report.total(), members.len());
        assert_eq!(report.region("新疆").unwrap().total(), 2);
        assert_eq!(report.region("台湾").unwrap().city("台北").unwrap().len(), 1);
    }

    // ─── Property tests over the built-in reference data ─────────

    mod properties {
        use super::*;
        use crate::aggregate::aggregate;
        use crate::config::AtlasConfig;
        use crate::registry::{builtin_foreign_cities, builtin_regions, default_admin_keywords};
        use once_cell::sync::Lazy;
        use proptest::prelude::*;

        static BUILTIN: Lazy<Classifier> =
            Lazy::new(|| AtlasConfig::default().build_classifier().unwrap());

        /// Region names, cities, aliases, admin keywords, foreign cities and noise.
        fn vocabulary() -> Vec<String> {
            let mut words: Vec<String> = Vec::new();
            for region in builtin_regions() {
                words.push(region.name.clone());
                words.extend(region.cities);
                words.extend(region.aliases);
            }
            words.extend(default_admin_keywords());
            words.extend(builtin_foreign_cities());
            words.extend(
                ["某某", "Tom", "007", "", " ", "\u{200B}", "\u{00A0}", "\u{3000}", "班长"]
                    .iter()
                    .map(|s| s.to_string()),
            );
            words
        }

        fn member_list() -> impl Strategy<Value = Vec<String>> {
            let member = prop::collection::vec(prop::sample::select(vocabulary()), 0..4)
                .prop_map(|parts| parts.join("-"));
            prop::collection::vec(member, 0..60)
        }

        proptest! {
            #[test]
            fn every_member_lands_in_exactly_one_bucket(members in member_list()) {
                let report = analyze(&*BUILTIN, &members, Schedule::Sequential);
                prop_assert_eq!(report.total(), members.len());
                prop_assert_eq!(
                    report.admin().len()
                        + report.located_total()
                        + report.foreign().len()
                        + report.unknown().len(),
                    members.len()
                );
            }

            #[test]
            fn aggregation_is_deterministic(members in member_list()) {
                let first = aggregate(BUILTIN.classify_all(&members));
                let second = aggregate(BUILTIN.classify_all(&members));
                prop_assert_eq!(
                    serde_json::to_string(&first).unwrap(),
                    serde_json::to_string(&second).unwrap()
                );
                prop_assert_eq!(first, second);
            }

            #[test]
            fn parallel_classification_matches_sequential(members in member_list()) {
                prop_assert_eq!(
                    BUILTIN.classify_all(&members),
                    BUILTIN.classify_all_parallel(&members)
                );
            }
        }
    }
}
