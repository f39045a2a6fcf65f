use super::*;

#[test]
fn advance_cycles_through_nodes() {
    let mut cycle = PipelineCycle::new(3);
    let g = cycle.start().unwrap_or_default();
    let seen = (0..7).filter_map(|_| cycle.advance(g)).collect::<Vec<_>>();
    assert_eq!(seen, vec![0, 1, 2, 0, 1, 2, 0]);
}

#[test]
fn hidden_tab_pauses_and_visible_resumes_in_place() {
    let mut cycle = PipelineCycle::new(4);
    let g = cycle.start().unwrap_or_default();
    cycle.advance(g);
    cycle.advance(g);
    cycle.stop();
    assert_eq!(cycle.advance(g), None);

    let resumed = cycle.start().unwrap_or_default();
    assert_eq!(cycle.advance(resumed), Some(2));
}

#[test]
fn double_start_does_not_spawn_second_chain() {
    let mut cycle = PipelineCycle::new(2);
    assert!(cycle.start().is_some());
    assert!(cycle.start().is_none());
}

#[test]
fn empty_pipeline_never_runs() {
    let mut cycle = PipelineCycle::new(0);
    assert_eq!(cycle.start(), None);
    assert_eq!(cycle.advance(1), None);
}
