//! Theme toggle: body class, `theme-color` meta tag, stored preference.

use std::cell::RefCell;
use std::rc::Rc;

use effects::consts::THEME_PRESS_MS;
use effects::registry::{Activation, FeatureError, FeatureResult};
use effects::theme::{Theme, ThemeState};
use gloo_events::EventListener;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, MediaQueryListEvent};

use super::FeatureContext;
use crate::util::dom;
use crate::util::storage::LocalStore;

const DARK_QUERY: &str = "(prefers-color-scheme: dark)";

pub fn init(ctx: &FeatureContext) -> FeatureResult {
    let body: Element = ctx
        .document
        .body()
        .ok_or_else(|| FeatureError::MissingElement("body".to_owned()))?
        .into();

    let system_dark = ctx
        .window
        .match_media(DARK_QUERY)
        .ok()
        .flatten()
        .is_some_and(|mq| mq.matches());
    let state = Rc::new(RefCell::new(ThemeState::resolve(LocalStore, system_dark)));
    apply(&ctx.document, &body, state.borrow().current());

    if let Ok(Some(mq)) = ctx.window.match_media(DARK_QUERY) {
        let state = Rc::clone(&state);
        let document = ctx.document.clone();
        let body = body.clone();
        EventListener::new(&mq, "change", move |event| {
            let dark = event.dyn_ref::<MediaQueryListEvent>().is_some_and(MediaQueryListEvent::matches);
            let followed = state.borrow_mut().follow_system(dark);
            if let Some(theme) = followed {
                apply(&document, &body, theme);
            }
        })
        .forget();
    }

    let Some(toggle) = dom::query(&ctx.document, "#theme-toggle") else {
        return Ok(Activation::Skipped("no #theme-toggle"));
    };
    let document = ctx.document.clone();
    let button = toggle.clone();
    EventListener::new(&toggle, "click", move |_| {
        let theme = state.borrow_mut().toggle();
        apply(&document, &body, theme);
        press_feedback(&button);
    })
    .forget();

    Ok(Activation::Active)
}

fn apply(document: &Document, body: &Element, theme: Theme) {
    dom::set_class(body, theme.toggled().body_class(), false);
    dom::set_class(body, theme.body_class(), true);
    if let Some(meta) = dom::query(document, r#"meta[name="theme-color"]"#) {
        if let Err(e) = meta.set_attribute("content", theme.meta_color()) {
            log::debug!("theme-color update failed: {}", dom::describe(&e));
        }
    }
}

fn press_feedback(button: &Element) {
    dom::set_style(button, "transform", "scale(0.9)");
    let button = button.clone();
    Timeout::new(THEME_PRESS_MS, move || dom::set_style(&button, "transform", "scale(1)")).forget();
}
