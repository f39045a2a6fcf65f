use super::*;

#[test]
fn success_range_is_2xx() {
    assert_eq!(ProbeOutcome::from_status(Some(200)), ProbeOutcome::Available);
    assert_eq!(ProbeOutcome::from_status(Some(204)), ProbeOutcome::Available);
    assert_eq!(ProbeOutcome::from_status(Some(304)), ProbeOutcome::Missing);
    assert_eq!(ProbeOutcome::from_status(Some(404)), ProbeOutcome::Missing);
    assert_eq!(ProbeOutcome::from_status(None), ProbeOutcome::Failed);
}

#[test]
fn only_available_allows_download() {
    assert!(ProbeOutcome::Available.allows_download());
    assert!(!ProbeOutcome::Missing.allows_download());
    assert!(!ProbeOutcome::Failed.allows_download());
}

#[test]
fn missing_asset_is_informational() {
    let (text, kind) = ProbeOutcome::Missing.notice();
    assert_eq!(kind, ToastKind::Info);
    assert!(text.contains("unavailable"));
}

#[test]
fn network_failure_is_informational_too() {
    let (text, kind) = ProbeOutcome::Failed.notice();
    assert_eq!(kind, ToastKind::Info);
    assert!(text.contains("Download error"));
}
