//! The catalogue report is the payload an external sink receives, so its
//! serialized shape is a contract. Reports are constructed by hand here to
//! keep the check independent of harness logic.

use chrono::{TimeZone, Utc};
use wordstats_kata::runner::{CatalogueReport, VariantOutcome};

fn sample_report() -> CatalogueReport {
    CatalogueReport {
        generated_at: Utc.with_ymd_and_hms(2025, 1, 15, 10, 30, 0).unwrap(),
        assertions: 18,
        reference_failures: vec![],
        variants: vec![
            VariantOutcome {
                variant: "off-by-one-truncation".to_string(),
                failed_assertions: vec!["eleven_character_words_truncate".to_string()],
            },
            VariantOutcome {
                variant: "shared-table".to_string(),
                failed_assertions: vec![],
            },
        ],
    }
}

#[test]
fn report_serializes_with_stable_key_order() {
    let json = sample_report().to_json().unwrap();

    let generated_at = json.find("\"generated_at\"").expect("missing generated_at");
    let assertions = json.find("\"assertions\"").expect("missing assertions");
    let reference = json
        .find("\"reference_failures\"")
        .expect("missing reference_failures");
    let variants = json.find("\"variants\"").expect("missing variants");

    assert!(generated_at < assertions);
    assert!(assertions < reference);
    assert!(reference < variants);
}

#[test]
fn report_timestamp_is_informational_and_rfc3339() {
    let json = sample_report().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let stamp = value["generated_at"].as_str().unwrap();
    assert!(stamp.starts_with("2025-01-15T10:30:00"));
}

#[test]
fn report_roundtrips_through_json() {
    let report = sample_report();
    let json = report.to_json().unwrap();
    let parsed: CatalogueReport = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed.assertions, 18);
    assert_eq!(parsed.variants.len(), 2);
    assert_eq!(parsed.variants[0].variant, "off-by-one-truncation");
    assert_eq!(
        parsed.variants[0].failed_assertions,
        vec!["eleven_character_words_truncate".to_string()]
    );
}

#[test]
fn report_helpers_summarize_kills() {
    let report = sample_report();

    assert!(report.suite_is_valid());
    assert_eq!(report.escaped(), vec!["shared-table"]);
    assert_eq!(report.fail_counts(), vec![1, 0]);
    assert!(report.variants[0].killed());
    assert!(!report.variants[1].killed());
}
