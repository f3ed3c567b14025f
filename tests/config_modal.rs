//! Integration tests for the configuration viewer modal bundle.
//!
//! These tests pin down the exported bundle's exact shape: its key set,
//! each literal value, the stability of repeated reads, and the round trip
//! through the plain key-value representation.

use serde_json::json;
use sxbundle::{config_modal, LengthUnit, LineStyle, StyleBundle, StyleValue};

#[test]
fn test_bundle_has_exactly_the_expected_keys() {
    let keys: Vec<_> = config_modal().keys().collect();
    assert_eq!(
        keys,
        vec![
            "position",
            "top",
            "left",
            "transform",
            "width",
            "bgcolor",
            "border",
            "boxShadow",
            "p",
            "height",
            "display",
            "minHeight",
            "flexDirection",
        ]
    );
}

#[test]
fn test_bundle_serializes_to_the_exact_literals() {
    let json = serde_json::to_value(config_modal()).unwrap();
    assert_eq!(
        json,
        json!({
            "position": "absolute",
            "top": "50%",
            "left": "50%",
            "transform": "translate(-50%, -50%)",
            "width": 800,
            "bgcolor": "background.paper",
            "border": "1px solid border.DEFAULT",
            "boxShadow": 24,
            "p": 4,
            "height": "90%",
            "display": "flex",
            "minHeight": "570px",
            "flexDirection": "column",
        })
    );
}

#[test]
fn test_repeated_reads_return_the_same_bundle() {
    let first = config_modal();
    let second = config_modal();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first, second);
}

#[test]
fn test_individual_field_scenarios() {
    let styles = config_modal();
    assert_eq!(styles.get("position").unwrap().as_keyword(), Some("absolute"));
    assert_eq!(
        styles.get("minHeight"),
        Some(&StyleValue::length(570.0, LengthUnit::Px))
    );
    assert_eq!(styles.get("minHeight").unwrap().to_string(), "570px");
    assert_eq!(styles.get("boxShadow").unwrap().as_scalar(), Some(24.0));
    assert_eq!(
        styles.get("border"),
        Some(&StyleValue::border(1.0, LineStyle::Solid, "border.DEFAULT"))
    );
}

#[test]
fn test_mutating_a_clone_leaves_the_export_untouched() {
    let copy = config_modal()
        .clone()
        .set("width", StyleValue::scalar(100.0))
        .set("zIndex", StyleValue::scalar(10.0));

    assert_eq!(copy.get("width"), Some(&StyleValue::scalar(100.0)));
    assert_eq!(copy.len(), 14);

    let original = config_modal();
    assert_eq!(original.get("width"), Some(&StyleValue::scalar(800.0)));
    assert_eq!(original.len(), 13);
    assert!(!original.has("zIndex"));
}

#[test]
fn test_round_trip_through_plain_representation() {
    let text = serde_json::to_string(config_modal()).unwrap();
    let restored: StyleBundle = serde_json::from_str(&text).unwrap();
    assert_eq!(&restored, config_modal());

    // A second pass yields the identical text, so the shape is stable.
    assert_eq!(serde_json::to_string(&restored).unwrap(), text);
}
