//! Decorative motion: the `.cursor-follower` dot and `[data-parallax]` layers.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use effects::consts::CURSOR_EASE;
use effects::motion::{CursorFollower, Point, parallax_offset, parse_speed};
use effects::registry::{Activation, FeatureResult};
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

use super::FeatureContext;
use crate::util::dom;

struct Follower {
    el: Element,
    easing: RefCell<CursorFollower>,
    /// A frame loop is running.
    running: Cell<bool>,
}

impl Follower {
    fn aim(self: &Rc<Self>, target: Point) {
        self.easing.borrow_mut().aim(target);
        if self.running.replace(true) {
            return;
        }
        let follower = Rc::clone(self);
        dom::run_frames(move |_| {
            let (position, settled) = {
                let mut easing = follower.easing.borrow_mut();
                (easing.step(), easing.settled())
            };
            dom::set_style(&follower.el, "transform", &format!("translate({}px, {}px)", position.x, position.y));
            if settled {
                follower.running.set(false);
            }
            !settled
        });
    }
}

pub fn init_cursor(ctx: &FeatureContext) -> FeatureResult {
    let Some(el) = dom::query(&ctx.document, ".cursor-follower") else {
        return Ok(Activation::Skipped("no .cursor-follower"));
    };
    let follower =
        Rc::new(Follower { el, easing: RefCell::new(CursorFollower::new(CURSOR_EASE)), running: Cell::new(false) });

    EventListener::new(&ctx.document, "mousemove", move |event| {
        if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
            follower.aim(Point::new(f64::from(mouse.client_x()), f64::from(mouse.client_y())));
        }
    })
    .forget();

    Ok(Activation::Active)
}

pub fn init_parallax(ctx: &FeatureContext) -> FeatureResult {
    let layers = dom::query_all(&ctx.document, "[data-parallax]")
        .into_iter()
        .map(|el| {
            let speed = parse_speed(&el.get_attribute("data-parallax").unwrap_or_default());
            (el, speed)
        })
        .collect::<Vec<_>>();
    if layers.is_empty() {
        return Ok(Activation::Skipped("no [data-parallax] elements"));
    }

    let window = ctx.window.clone();
    EventListener::new(&ctx.window, "scroll", move |_| {
        let scroll_y = dom::scroll_y(&window);
        for (el, speed) in &layers {
            dom::set_style(el, "transform", &format!("translateY({}px)", parallax_offset(scroll_y, *speed)));
        }
    })
    .forget();

    Ok(Activation::Active)
}
