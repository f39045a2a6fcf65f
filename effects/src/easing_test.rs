#![allow(clippy::float_cmp)]

use super::*;

#[test]
fn ease_out_cubic_endpoints_and_clamp() {
    assert_eq!(ease_out_cubic(0.0), 0.0);
    assert_eq!(ease_out_cubic(1.0), 1.0);
    assert_eq!(ease_out_cubic(-2.0), 0.0);
    assert_eq!(ease_out_cubic(3.0), 1.0);
    assert!((ease_out_cubic(0.5) - 0.875).abs() < 1e-9);
}

#[test]
fn count_up_reaches_target_and_stops() {
    let bar = CountUp::new(85.0, 1_500.0);
    assert_eq!(bar.value_at(0.0), 0.0);
    assert!(bar.value_at(750.0) > 42.5);
    assert_eq!(bar.value_at(1_500.0), 85.0);
    assert_eq!(bar.value_at(9_000.0), 85.0);
    assert!(bar.is_running(1_499.0));
    assert!(!bar.is_running(1_500.0));
}

#[test]
fn zero_duration_jumps_to_target() {
    let counter = CountUp::new(12.0, 0.0);
    assert_eq!(counter.value_at(0.0), 12.0);
    assert!(!counter.is_running(0.0));
}

#[test]
fn parse_target_accepts_percent_suffix() {
    assert_eq!(parse_target("85"), Some(85.0));
    assert_eq!(parse_target(" 90% "), Some(90.0));
    assert_eq!(parse_target("lots"), None);
    assert_eq!(parse_target("NaN"), None);
}

#[test]
fn format_count_floors() {
    assert_eq!(format_count(41.99), "41");
    assert_eq!(format_count(120.0), "120");
}
