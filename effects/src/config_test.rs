#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn defaults_match_stock_page() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.chrome.header_px, 50.0);
    assert_eq!(cfg.chrome.back_to_top_px, 500.0);
    assert_eq!(cfg.reveal_threshold, 0.1);
    assert_eq!(cfg.skill_threshold, 0.5);
    assert_eq!(cfg.toast.lifetime_ms(), 3_600.0);
    assert_eq!(cfg.pipeline_period_ms, 3_000);
    assert_eq!(cfg.service_worker.as_deref(), Some("/sw.js"));
    assert_eq!(cfg.form_endpoint, None);
    assert_eq!(cfg.prefetch.len(), 1);
}

#[test]
fn empty_object_yields_defaults() {
    assert_eq!(PageConfig::from_json("{}"), Ok(PageConfig::default()));
}

#[test]
fn partial_override_keeps_other_defaults() {
    let cfg = PageConfig::from_json(
        r#"{
            "form_endpoint": "https://formspree.io/f/abc",
            "toast": { "display_ms": 5000 },
            "chrome": { "back_to_top_px": 800 },
            "service_worker": null
        }"#,
    )
    .unwrap_or_default();
    assert_eq!(cfg.form_endpoint.as_deref(), Some("https://formspree.io/f/abc"));
    assert_eq!(cfg.toast.display_ms, 5_000.0);
    assert_eq!(cfg.toast.slide_in_ms, 300.0);
    assert_eq!(cfg.chrome.back_to_top_px, 800.0);
    assert_eq!(cfg.chrome.header_px, 50.0);
    assert_eq!(cfg.service_worker, None);
}

#[test]
fn malformed_json_is_config_error() {
    assert!(matches!(PageConfig::from_json("{not json"), Err(FeatureError::Config(_))));
}

#[test]
fn out_of_range_values_rejected() {
    assert!(matches!(PageConfig::from_json(r#"{"reveal_threshold": 1.5}"#), Err(FeatureError::Config(_))));
    assert!(matches!(PageConfig::from_json(r#"{"toast": {"display_ms": -1}}"#), Err(FeatureError::Config(_))));
    assert!(matches!(PageConfig::from_json(r#"{"pipeline_period_ms": 0}"#), Err(FeatureError::Config(_))));
}

#[test]
fn reference_offset_prefers_measured_header() {
    let cfg = PageConfig::default();
    assert_eq!(cfg.reference_offset(Some(80.0)), 180.0);
    assert_eq!(cfg.reference_offset(None), 170.0);
    assert_eq!(cfg.reference_offset(Some(0.0)), 170.0);
    assert_eq!(cfg.header_height(Some(64.0)), 64.0);
}
