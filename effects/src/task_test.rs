use super::*;

#[test]
fn start_is_exclusive_while_active() {
    let mut flag = TaskFlag::default();
    assert_eq!(flag.start(), Some(1));
    assert_eq!(flag.start(), None);
    assert!(flag.is_active());
}

#[test]
fn stop_ends_current_generation() {
    let mut flag = TaskFlag::default();
    let g = flag.start().unwrap_or_default();
    assert!(flag.is_current(g));
    flag.stop();
    assert!(!flag.is_current(g));
}

#[test]
fn restart_invalidates_stale_chain() {
    let mut flag = TaskFlag::default();
    let old = flag.start().unwrap_or_default();
    flag.stop();
    let new = flag.start().unwrap_or_default();
    assert_ne!(old, new);
    assert!(!flag.is_current(old));
    assert!(flag.is_current(new));
}
