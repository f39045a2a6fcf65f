use super::*;

fn feed(matcher: &mut KonamiMatcher, keys: &[&str]) -> Vec<bool> {
    keys.iter().map(|k| matcher.push(k)).collect()
}

#[test]
fn full_sequence_fires_on_last_key() {
    let mut m = KonamiMatcher::default();
    let fired = feed(&mut m, &SEQUENCE);
    assert_eq!(fired.iter().filter(|f| **f).count(), 1);
    assert_eq!(fired.last(), Some(&true));
}

#[test]
fn letters_match_case_insensitively() {
    let mut m = KonamiMatcher::default();
    let mut keys = SEQUENCE[..8].to_vec();
    keys.extend(["B", "A"]);
    assert_eq!(feed(&mut m, &keys).last(), Some(&true));
}

#[test]
fn extra_leading_up_still_matches() {
    let mut m = KonamiMatcher::default();
    let mut keys = vec!["ArrowUp"];
    keys.extend(SEQUENCE);
    assert_eq!(feed(&mut m, &keys).last(), Some(&true));
}

#[test]
fn interrupted_sequence_does_not_fire() {
    let mut m = KonamiMatcher::default();
    let mut keys = SEQUENCE[..5].to_vec();
    keys.push("x");
    keys.extend(&SEQUENCE[5..]);
    assert!(feed(&mut m, &keys).iter().all(|f| !f));
}

#[test]
fn sequence_fires_again_after_completion() {
    let mut m = KonamiMatcher::default();
    feed(&mut m, &SEQUENCE);
    assert_eq!(feed(&mut m, &SEQUENCE).last(), Some(&true));
}
