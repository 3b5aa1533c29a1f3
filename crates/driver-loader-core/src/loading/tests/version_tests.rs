#![cfg(test)]

use std::cmp::Ordering;

use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use super::common::driver;
use crate::loading::{VersionOrdering, VersionResolver};

#[test]
fn test_max_version_per_code() {
    let resolved = VersionResolver::default().resolve_max(vec![
        driver(1, "A", "v1"),
        driver(2, "A", "v2"),
        driver(3, "B", "v1"),
    ]);

    assert_eq!(resolved.len(), 2);
    assert_eq!(resolved["A"].driver_version, "v2");
    assert_eq!(resolved["B"].driver_version, "v1");
}

#[test]
fn test_resolution_ignores_input_order() {
    let mut descriptors = vec![
        driver(1, "A", "v1"),
        driver(2, "A", "v2"),
        driver(3, "B", "v1"),
        driver(4, "A", "v0"),
    ];
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..16 {
        descriptors.shuffle(&mut rng);
        let resolved = VersionResolver::default().resolve_max(descriptors.clone());
        let picked: Vec<(i64, String)> = resolved
            .values()
            .map(|d| (d.driver_id, d.coordinates()))
            .collect();
        assert_eq!(picked, vec![(2, "A@v2".to_string()), (3, "B@v1".to_string())]);
    }
}

#[test]
fn test_lexical_ordering_is_not_semantic() {
    let resolved = VersionResolver::default().resolve_max(vec![driver(1, "mysql", "10"), driver(2, "mysql", "9")]);
    assert_eq!(resolved["mysql"].driver_version, "9");

    let resolved = VersionResolver::default().resolve_max(vec![driver(1, "pg", "42.2.9"), driver(2, "pg", "42.2.14")]);
    assert_eq!(resolved["pg"].driver_version, "42.2.9");
}

#[test]
fn test_equal_versions_keep_first_seen() {
    let resolved = VersionResolver::default().resolve_max(vec![
        driver(10, "hive", "2.3.7"),
        driver(11, "hive", "2.3.7"),
    ]);
    assert_eq!(resolved["hive"].driver_id, 10);
}

#[test]
fn test_semantic_ordering_is_opt_in() {
    let resolver = VersionResolver::new(VersionOrdering::Semantic);
    let resolved = resolver.resolve_max(vec![driver(1, "pg", "42.2.9"), driver(2, "pg", "42.2.14")]);

    assert_eq!(resolver.ordering(), VersionOrdering::Semantic);
    assert_eq!(resolved["pg"].driver_version, "42.2.14");
}

#[test]
fn test_semantic_ordering_ranks_semver_above_other_tokens() {
    let ordering = VersionOrdering::Semantic;

    assert_eq!(ordering.compare("1.10.0", "1.9.0"), Ordering::Greater);
    assert_eq!(ordering.compare("1.9.0", "1.9"), Ordering::Greater);
    assert_eq!(ordering.compare("1.9", "1.10.0"), Ordering::Less);
    assert_eq!(ordering.compare("9", "10"), Ordering::Greater);
    assert_eq!(ordering.compare("1.2.3", "1.2.3"), Ordering::Equal);
    assert_eq!(VersionOrdering::Lexical.compare("1.10.0", "1.9.0"), Ordering::Less);
}

#[test]
fn test_semantic_resolution_ignores_input_order() {
    let resolver = VersionResolver::new(VersionOrdering::Semantic);
    let mut descriptors = vec![
        driver(1, "mysql", "1.10.0"),
        driver(2, "mysql", "1.9.0"),
        driver(3, "mysql", "1.9"),
        driver(4, "mysql", "latest"),
        driver(5, "hive", "2.3"),
        driver(6, "hive", "10"),
    ];
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..32 {
        descriptors.shuffle(&mut rng);
        let resolved = resolver.resolve_max(descriptors.clone());
        assert_eq!(resolved["mysql"].driver_version, "1.10.0");
        assert_eq!(resolved["hive"].driver_version, "2.3");
    }
}

#[test]
fn test_empty_input() {
    assert!(VersionResolver::default().resolve_max(Vec::new()).is_empty());
}
