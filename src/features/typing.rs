//! Typing effect for `[data-typing]` elements.
//!
//! Each element types its phrases, holds, deletes, and moves on forever. All
//! loops pause while the tab is hidden and pick up where they left off.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use effects::registry::{Activation, FeatureResult};
use effects::task::Generation;
use effects::typing::{TypingLoop, parse_phrases};
use gloo_timers::future::sleep;
use web_sys::Element;

use super::FeatureContext;
use super::pipeline::follow_visibility;
use crate::util::dom;

struct Typewriter {
    el: Element,
    typing: RefCell<TypingLoop>,
}

impl Typewriter {
    fn resume(self: &Rc<Self>) {
        let Some(generation) = self.typing.borrow_mut().start() else {
            return;
        };
        wasm_bindgen_futures::spawn_local(Rc::clone(self).run(generation));
    }

    fn pause(&self) {
        self.typing.borrow_mut().stop();
    }

    async fn run(self: Rc<Self>, generation: Generation) {
        loop {
            let Some(step) = self.typing.borrow_mut().step(generation) else {
                return;
            };
            self.el.set_text_content(Some(&step.text));
            sleep(Duration::from_millis(u64::from(step.delay_ms))).await;
        }
    }
}

pub fn init(ctx: &FeatureContext) -> FeatureResult {
    let writers = dom::query_all(&ctx.document, "[data-typing]")
        .into_iter()
        .filter_map(|el| {
            let phrases = parse_phrases(&el.get_attribute("data-typing").unwrap_or_default());
            if phrases.is_empty() {
                return None;
            }
            el.set_text_content(Some(""));
            Some(Rc::new(Typewriter { el, typing: RefCell::new(TypingLoop::new(phrases, ctx.config.typing)) }))
        })
        .collect::<Vec<_>>();
    if writers.is_empty() {
        return Ok(Activation::Skipped("no [data-typing] phrases"));
    }

    let writers = Rc::new(writers);
    let visible = Rc::clone(&writers);
    let hidden = Rc::clone(&writers);
    follow_visibility(
        &ctx.document,
        move || visible.iter().for_each(Typewriter::resume),
        move || hidden.iter().for_each(|w| w.pause()),
    );

    if !ctx.document.hidden() {
        writers.iter().for_each(Typewriter::resume);
    }
    Ok(Activation::Active)
}
