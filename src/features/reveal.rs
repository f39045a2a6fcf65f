//! Scroll-triggered reveals for `.animate-on-scroll` elements.
//!
//! Elements that also carry `animate-stagger` cascade by their position
//! among siblings.

use std::cell::RefCell;
use std::rc::Rc;

use effects::registry::{Activation, FeatureResult};
use effects::reveal::{RevealAction, RevealTracker};

use super::FeatureContext;
use crate::util::dom;

const TARGETS: &str = ".animate-on-scroll";
const STAGGER_CLASS: &str = "animate-stagger";
const REVEALED_CLASS: &str = "animated";

pub fn init(ctx: &FeatureContext) -> FeatureResult {
    let targets = dom::query_all(&ctx.document, TARGETS);
    if targets.is_empty() {
        return Ok(Activation::Skipped("no .animate-on-scroll elements"));
    }

    let mut tracker = RevealTracker::new(ctx.config.reveal_threshold);
    for (id, el) in targets.iter().enumerate() {
        if dom::has_class(el, STAGGER_CLASS) {
            tracker.observe_staggered(id, dom::sibling_index(el));
        } else {
            tracker.observe(id);
        }
    }
    let tracker = Rc::new(RefCell::new(tracker));

    let watched = targets.clone();
    dom::observe_intersections(
        &targets,
        ctx.config.reveal_threshold,
        &ctx.config.reveal_root_margin,
        move |observer, entry| {
            let el = entry.target();
            let Some(id) = watched.iter().position(|t| *t == el) else {
                return;
            };
            let action = tracker
                .borrow_mut()
                .on_entry(id, entry.is_intersecting(), entry.intersection_ratio());
            if let RevealAction::Reveal { delay_ms } = action {
                if delay_ms > 0.0 {
                    dom::set_style(&el, "transition-delay", &format!("{delay_ms}ms"));
                }
                dom::set_class(&el, REVEALED_CLASS, true);
                observer.unobserve(&el);
            }
        },
    )?;

    Ok(Activation::Active)
}
