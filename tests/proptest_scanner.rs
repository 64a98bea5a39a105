//! Property-based tests for name normalization and manifest scanning.
//!
//! The scanner must never panic on arbitrary JSON and normalization must
//! be stable under repetition.

use proptest::prelude::*;
use sbomscan::{normalize_name, scanner::scan_document, Denylist};
use serde_json::{json, Value};

fn arb_json() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "\\PC{0,20}".prop_map(Value::String),
    ];
    leaf.prop_recursive(4, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..8).prop_map(Value::Array),
            prop::collection::vec(
                (
                    prop_oneof![
                        Just("sbom".to_string()),
                        Just("components".to_string()),
                        Just("packages".to_string()),
                        Just("dependencies".to_string()),
                        Just("name".to_string()),
                        Just("version".to_string()),
                        Just("versionInfo".to_string()),
                        "[a-z_/]{0,12}",
                    ],
                    inner
                ),
                0..8
            )
            .prop_map(|pairs| Value::Object(pairs.into_iter().collect())),
        ]
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn normalize_is_idempotent(s in "\\PC{0,60}") {
        let once = normalize_name(&s);
        prop_assert_eq!(normalize_name(&once), once);
    }

    #[test]
    fn normalize_with_node_modules_prefix_is_idempotent(
        prefix in "[a-zA-Z_/ ]{0,20}",
        name in "[a-zA-Z@/._ -]{0,20}",
    ) {
        let raw = format!("{}node_modules/{}", prefix, name);
        let once = normalize_name(&raw);
        prop_assert_eq!(normalize_name(&once), once.clone());
        prop_assert!(!once.contains("node_modules/"));
    }

    #[test]
    fn scan_document_doesnt_panic(doc in arb_json()) {
        let denylist = Denylist::parse("left-pad\nchalk\n");
        let outcome = scan_document(&doc, &denylist);
        prop_assert!(outcome.findings.len() <= outcome.packages_checked);
    }

    #[test]
    fn sbom_wrapper_is_transparent(names in prop::collection::vec("[a-z-]{1,10}", 0..10)) {
        let denylist: Denylist = names.iter().step_by(2).collect();
        let components: Vec<Value> = names
            .iter()
            .map(|n| json!({"name": n, "version": "1.0.0"}))
            .collect();
        let plain = json!({"components": components});
        let wrapped = json!({"sbom": plain.clone()});

        let a = scan_document(&plain, &denylist).findings;
        let b = scan_document(&wrapped, &denylist).findings;
        prop_assert_eq!(a, b);
    }
}
