use std::cell::RefCell;

use effects::konami::KonamiMatcher;
use effects::registry::{Activation, FeatureError, FeatureResult};
use effects::toast::ToastKind;
use gloo_events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{Element, KeyboardEvent};

use super::FeatureContext;
use crate::util::dom;

const KONAMI_CLASS: &str = "konami";

pub fn init(ctx: &FeatureContext) -> FeatureResult {
    let body: Element = ctx
        .document
        .body()
        .ok_or_else(|| FeatureError::MissingElement("body".to_owned()))?
        .into();
    let matcher = RefCell::new(KonamiMatcher::default());
    let notifier = ctx.notifier;

    EventListener::new(&ctx.document, "keydown", move |event| {
        let Some(key) = event.dyn_ref::<KeyboardEvent>().map(KeyboardEvent::key) else {
            return;
        };
        if !matcher.borrow_mut().push(&key) {
            return;
        }
        let on = !dom::has_class(&body, KONAMI_CLASS);
        dom::set_class(&body, KONAMI_CLASS, on);
        log::info!("konami mode {}", if on { "on" } else { "off" });
        notifier.notify(
            if on { "Konami code activated! You found the secret." } else { "Konami mode off." },
            ToastKind::Info,
        );
    })
    .forget();

    Ok(Activation::Active)
}
