use super::*;

fn notifier() -> Notifier {
    Notifier::new(ToastTimings::default())
}

#[test]
fn notify_at_appends_in_order() {
    let n = notifier();
    n.notify_at("one", ToastKind::Info, 0.0);
    n.notify_at("two", ToastKind::Success, 5.0);
    let shown = n.snapshot_at(10.0);
    assert_eq!(shown.len(), 2);
    assert_eq!(shown[0].message, "one");
    assert_eq!(shown[1].kind, ToastKind::Success);
}

#[test]
fn toast_expires_after_lifetime() {
    let n = notifier();
    n.notify_at("bye", ToastKind::Info, 1_000.0);
    n.tick_at(1_000.0 + 3_599.0);
    assert_eq!(n.len(), 1);
    n.tick_at(1_000.0 + 3_600.0);
    assert!(n.is_empty());
}

#[test]
fn dismiss_at_shortens_lifetime() {
    let n = notifier();
    let id = n.notify_at("close me", ToastKind::Error, 0.0);
    assert!(n.dismiss_at(id, 400.0));
    assert_eq!(n.snapshot_at(400.0)[0].phase, ToastPhase::Leaving);
    n.tick_at(700.0);
    assert!(n.is_empty());
}

#[test]
fn notify_outside_browser_records_toast() {
    let n = notifier();
    n.notify("hello", ToastKind::Info);
    assert_eq!(n.len(), 1);
}

#[test]
fn each_schedule_takes_over_the_tick_chain() {
    let n = notifier();
    n.notify("one", ToastKind::Info);
    let first = n.chain.get_value();
    assert!(n.owns_chain(first));

    n.notify("two", ToastKind::Info);
    let second = n.chain.get_value();
    assert!(!n.owns_chain(first));
    assert!(n.owns_chain(second));

    let id = n.notify_at("three", ToastKind::Info, 0.0);
    n.dismiss(id);
    assert!(!n.owns_chain(second));
}
