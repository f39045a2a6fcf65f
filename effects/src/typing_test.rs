use super::*;

fn speeds() -> TypingSpeeds {
    TypingSpeeds { type_ms: 10, delete_ms: 5, hold_ms: 100, gap_ms: 50 }
}

fn run(typing: &mut TypingLoop, generation: Generation, steps: usize) -> Vec<TypingStep> {
    (0..steps).filter_map(|_| typing.step(generation)).collect()
}

#[test]
fn types_holds_deletes_and_moves_on() {
    let mut typing = TypingLoop::new(vec!["ab".to_owned(), "xyz".to_owned()], speeds());
    let g = typing.start().unwrap_or_default();
    let steps = run(&mut typing, g, 6);
    let got = steps.iter().map(|s| (s.text.as_str(), s.delay_ms)).collect::<Vec<_>>();
    assert_eq!(
        got,
        vec![("a", 10), ("ab", 100), ("a", 5), ("", 50), ("x", 10), ("xy", 10)]
    );
}

#[test]
fn wraps_around_to_first_phrase() {
    let mut typing = TypingLoop::new(vec!["a".to_owned(), "b".to_owned()], speeds());
    let g = typing.start().unwrap_or_default();
    let texts = run(&mut typing, g, 6).into_iter().map(|s| s.text).collect::<Vec<_>>();
    assert_eq!(texts, vec!["a", "", "b", "", "a", ""]);
}

#[test]
fn stop_ends_the_chain() {
    let mut typing = TypingLoop::new(vec!["hello".to_owned()], speeds());
    let g = typing.start().unwrap_or_default();
    assert!(typing.step(g).is_some());
    typing.stop();
    assert!(typing.step(g).is_none());
    assert_eq!(typing.current_text(), "h");
}

#[test]
fn restart_resumes_where_it_left_off_and_kills_old_chain() {
    let mut typing = TypingLoop::new(vec!["hello".to_owned()], speeds());
    let old = typing.start().unwrap_or_default();
    typing.step(old);
    typing.stop();
    let new = typing.start().unwrap_or_default();
    assert!(typing.step(old).is_none());
    assert_eq!(typing.step(new).map(|s| s.text), Some("he".to_owned()));
}

#[test]
fn unicode_phrases_step_by_character() {
    let mut typing = TypingLoop::new(vec!["héllo".to_owned()], speeds());
    let g = typing.start().unwrap_or_default();
    let texts = run(&mut typing, g, 2).into_iter().map(|s| s.text).collect::<Vec<_>>();
    assert_eq!(texts, vec!["h", "hé"]);
}

#[test]
fn empty_phrase_list_never_starts() {
    let mut typing = TypingLoop::new(vec![" ".to_owned()], speeds());
    assert_eq!(typing.start(), None);
    assert!(!typing.is_active());
}

#[test]
fn parse_phrases_accepts_json_or_plain_text() {
    assert_eq!(parse_phrases(r#"["Rust", "WebAssembly"]"#), vec!["Rust".to_owned(), "WebAssembly".to_owned()]);
    assert_eq!(parse_phrases("Backend engineer"), vec!["Backend engineer".to_owned()]);
    assert!(parse_phrases("  ").is_empty());
}
