use super::*;

#[test]
fn missing_block_uses_defaults() {
    assert_eq!(resolve_config(None), PageConfig::default());
}

#[test]
fn blank_block_uses_defaults() {
    assert_eq!(resolve_config(Some("  \n ")), PageConfig::default());
}

#[test]
fn override_block_is_applied() {
    let cfg = resolve_config(Some(r#"{ "form_endpoint": "https://example.com/f", "pipeline_period_ms": 1500 }"#));
    assert_eq!(cfg.form_endpoint.as_deref(), Some("https://example.com/f"));
    assert_eq!(cfg.pipeline_period_ms, 1_500);
    assert_eq!(cfg.typing, PageConfig::default().typing);
}

#[test]
fn malformed_block_falls_back() {
    assert_eq!(resolve_config(Some("{ not json")), PageConfig::default());
}

#[test]
fn out_of_range_block_falls_back() {
    assert_eq!(resolve_config(Some(r#"{ "reveal_threshold": 4 }"#)), PageConfig::default());
}
