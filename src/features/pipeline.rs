//! Pipeline diagram: one `.node` is `active` at a time, advancing on a timer
//! while the tab is visible.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use effects::pipeline::PipelineCycle;
use effects::registry::{Activation, FeatureResult};
use effects::task::Generation;
use gloo_events::EventListener;
use gloo_timers::future::sleep;
use web_sys::{Document, Element};

use super::FeatureContext;
use crate::util::dom;

struct Pipeline {
    nodes: Vec<Element>,
    cycle: RefCell<PipelineCycle>,
    period: Duration,
}

impl Pipeline {
    fn resume(self: &Rc<Self>) {
        let Some(generation) = self.cycle.borrow_mut().start() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(Rc::clone(self).run(generation));
    }

    fn pause(&self) {
        self.cycle.borrow_mut().stop();
    }

    async fn run(self: Rc<Self>, generation: Generation) {
        loop {
            let Some(active) = self.cycle.borrow_mut().advance(generation) else {
                log::debug!("pipeline chain {generation} ended");
                return;
            };
            for (i, node) in self.nodes.iter().enumerate() {
                dom::set_class(node, "active", i == active);
            }
            sleep(self.period).await;
        }
    }
}

/// Call `on_hidden` when the tab is hidden and `on_visible` when it returns.
pub(super) fn follow_visibility(document: &Document, on_visible: impl Fn() + 'static, on_hidden: impl Fn() + 'static) {
    let doc = document.clone();
    EventListener::new(document, "visibilitychange", move |_| {
        if doc.hidden() {
            on_hidden();
        } else {
            on_visible();
        }
    })
    .forget();
}

pub fn init(ctx: &FeatureContext) -> FeatureResult {
    let nodes = dom::query_all(&ctx.document, ".node");
    if nodes.is_empty() {
        return Ok(Activation::Skipped("no pipeline nodes"));
    }

    let pipeline = Rc::new(Pipeline {
        cycle: RefCell::new(PipelineCycle::new(nodes.len())),
        nodes,
        period: Duration::from_millis(u64::from(ctx.config.pipeline_period_ms)),
    });

    let visible = Rc::clone(&pipeline);
    let hidden = Rc::clone(&pipeline);
    follow_visibility(&ctx.document, move || visible.resume(), move || hidden.pause());

    if !ctx.document.hidden() {
        pipeline.resume();
    }
    Ok(Activation::Active)
}
