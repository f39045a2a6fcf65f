//! Skill bars and number counters that count up once when scrolled into view.

use std::cell::RefCell;
use std::rc::Rc;

use effects::easing::{CountUp, format_count, parse_target};
use effects::registry::{Activation, FeatureResult};
use effects::reveal::{RevealAction, RevealTracker};
use web_sys::Element;

use super::FeatureContext;
use crate::util::dom;

#[derive(Clone, Copy)]
enum Render {
    /// Drive `style.width` in percent.
    Width,
    /// Drive the element's text.
    Text,
}

pub fn init_skill_bars(ctx: &FeatureContext) -> FeatureResult {
    bind(ctx, ".skill-progress", "data-progress", ctx.config.skill_duration_ms, Render::Width)
}

pub fn init_counters(ctx: &FeatureContext) -> FeatureResult {
    bind(ctx, "[data-count]", "data-count", ctx.config.counter_duration_ms, Render::Text)
}

fn bind(ctx: &FeatureContext, selector: &str, attribute: &'static str, duration_ms: f64, render: Render) -> FeatureResult {
    let targets = dom::query_all(&ctx.document, selector)
        .into_iter()
        .filter(|el| el.get_attribute(attribute).as_deref().and_then(parse_target).is_some())
        .collect::<Vec<_>>();
    if targets.is_empty() {
        return Ok(Activation::Skipped("no animated progress elements"));
    }

    let mut tracker = RevealTracker::new(ctx.config.skill_threshold);
    for id in 0..targets.len() {
        tracker.observe(id);
    }
    let tracker = Rc::new(RefCell::new(tracker));

    for el in &targets {
        draw(el, render, 0.0);
    }

    let watched = targets.clone();
    dom::observe_intersections(
        &targets,
        ctx.config.skill_threshold,
        &ctx.config.skill_root_margin,
        move |observer, entry| {
            let el = entry.target();
            let Some(id) = watched.iter().position(|t| *t == el) else {
                return;
            };
            let action = tracker
                .borrow_mut()
                .on_entry(id, entry.is_intersecting(), entry.intersection_ratio());
            if !matches!(action, RevealAction::Reveal { .. }) {
                return;
            }
            observer.unobserve(&el);
            let Some(target) = el.get_attribute(attribute).as_deref().and_then(parse_target) else {
                return;
            };
            animate(el, render, CountUp::new(target, duration_ms));
        },
    )?;

    Ok(Activation::Active)
}

fn animate(el: Element, render: Render, count: CountUp) {
    let mut started: Option<f64> = None;
    dom::run_frames(move |ts| {
        let start = *started.get_or_insert(ts);
        let elapsed = ts - start;
        draw(&el, render, count.value_at(elapsed));
        count.is_running(elapsed)
    });
}

fn draw(el: &Element, render: Render, value: f64) {
    match render {
        Render::Width => dom::set_style(el, "width", &format!("{value}%")),
        Render::Text => el.set_text_content(Some(&format_count(value))),
    }
}
