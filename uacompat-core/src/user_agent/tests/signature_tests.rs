use crate::user_agent::signature::leading_major;
use crate::user_agent::{RuleRole, SIGNATURES, SignatureRule, VersionExtractor, classify_with};

#[test]
fn priorities_strictly_increase() {
    let priorities: Vec<_> = SIGNATURES.iter().map(|r| r.priority).collect();

    assert!(priorities.windows(2).all(|w| w[0] < w[1]), "{priorities:?}");
}

#[test]
fn brands_precede_every_engine() {
    let last_brand = SIGNATURES
        .iter()
        .filter(|r| r.role == RuleRole::Brand)
        .map(|r| r.priority)
        .max()
        .unwrap();
    let first_engine = SIGNATURES
        .iter()
        .filter(|r| r.role == RuleRole::Engine)
        .map(|r| r.priority)
        .min()
        .unwrap();

    assert!(last_brand < first_engine);
}

#[test]
fn markers_are_distinct() {
    let mut markers: Vec<_> = SIGNATURES.iter().flat_map(|r| r.markers.iter()).collect();
    let count = markers.len();

    markers.sort();
    markers.dedup();

    assert_eq!(markers.len(), count);
}

#[test]
fn leading_major_ignores_suffixes() {
    assert_eq!(leading_major("95.0.4638.69"), Some(95));
    assert_eq!(leading_major("14_4 like"), Some(14));
    assert_eq!(leading_major("121.0b3"), Some(121));
    assert_eq!(leading_major("beta"), None);
    assert_eq!(leading_major(""), None);
}

#[test]
fn engine_order_decides_between_markers() {
    // Arrange: the generic engine is listed first, so the derivative loses.
    let rules = vec![
        SignatureRule {
            priority: 1,
            role: RuleRole::Engine,
            markers: &["Chrome/"],
            display_name: "Chrome",
            version: VersionExtractor::Leading,
        },
        SignatureRule {
            priority: 2,
            role: RuleRole::Engine,
            markers: &["Edge/"],
            display_name: "Edge (Legacy)",
            version: VersionExtractor::Leading,
        },
    ];

    // Act
    let record = classify_with(&rules, "Chrome/70.0 Safari/537.36 Edge/18.0");

    // Assert
    assert_eq!(record.equivalent_name(), Some("Chrome"));
    assert_eq!(record.equivalent_version(), Some(70));
}

#[test]
fn extract_tries_each_marker() {
    let rule = SIGNATURES
        .iter()
        .find(|r| r.display_name == "Edge")
        .unwrap();

    assert_eq!(rule.extract("Mozilla/5.0 EdgA/100.0.1185.50"), Some(100));
    assert_eq!(rule.extract("Mozilla/5.0 EdgiOS/99.1"), Some(99));
    assert_eq!(rule.extract("Mozilla/5.0 Edge/18.1"), None);
}
