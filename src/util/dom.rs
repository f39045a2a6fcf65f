//! Thin `web-sys` helpers shared by the feature units.
//!
//! SYSTEM CONTEXT
//! ==============
//! Feature units bind to an existing static page. These helpers keep the
//! `JsValue` error plumbing and the element lookups in one place so each unit
//! reads as a list of bindings.

use std::cell::RefCell;
use std::rc::Rc;

use effects::registry::FeatureError;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollToOptions, Window,
};

/// Render a JS exception for logs.
pub fn describe(err: &JsValue) -> String {
    if let Some(text) = err.as_string() {
        return text;
    }
    if let Some(error) = err.dyn_ref::<js_sys::Error>() {
        return String::from(error.message());
    }
    format!("{err:?}")
}

pub fn js_error(err: JsValue) -> FeatureError {
    FeatureError::Dom(describe(&err))
}

pub fn query(doc: &Document, selector: &str) -> Option<Element> {
    doc.query_selector(selector).ok().flatten()
}

/// Look up an element a unit cannot work without.
pub fn require(doc: &Document, selector: &str) -> Result<Element, FeatureError> {
    query(doc, selector).ok_or_else(|| FeatureError::MissingElement(selector.to_owned()))
}

pub fn query_all(doc: &Document, selector: &str) -> Vec<Element> {
    let Ok(list) = doc.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

/// Elements matching `selector` inside `root`.
pub fn query_all_in(root: &Element, selector: &str) -> Vec<Element> {
    let Ok(list) = root.query_selector_all(selector) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect()
}

pub fn set_class(el: &Element, class: &str, on: bool) {
    let list = el.class_list();
    let result = if on { list.add_1(class) } else { list.remove_1(class) };
    if let Err(e) = result {
        log::debug!("class {class} update failed: {}", describe(&e));
    }
}

pub fn has_class(el: &Element, class: &str) -> bool {
    el.class_list().contains(class)
}

pub fn set_style(el: &Element, property: &str, value: &str) {
    let Some(html) = el.dyn_ref::<HtmlElement>() else {
        return;
    };
    if let Err(e) = html.style().set_property(property, value) {
        log::debug!("style {property} update failed: {}", describe(&e));
    }
}

pub fn clear_style(el: &Element, property: &str) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        if let Err(e) = html.style().remove_property(property) {
            log::debug!("style {property} removal failed: {}", describe(&e));
        }
    }
}

pub fn offset_top(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>().map_or(0.0, |h| f64::from(h.offset_top()))
}

pub fn offset_height(el: &Element) -> f64 {
    el.dyn_ref::<HtmlElement>().map_or(0.0, |h| f64::from(h.offset_height()))
}

pub fn scroll_y(window: &Window) -> f64 {
    window.scroll_y().unwrap_or(0.0)
}

pub fn smooth_scroll_to(window: &Window, top: f64) {
    let options = ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

/// Index of `el` among its parent's element children.
pub fn sibling_index(el: &Element) -> usize {
    let mut index = 0;
    let mut cursor = el.previous_element_sibling();
    while let Some(prev) = cursor {
        index += 1;
        cursor = prev.previous_element_sibling();
    }
    index
}

/// Call `frame` on every animation frame until it returns `false`.
pub fn run_frames(mut frame: impl FnMut(f64) -> bool + 'static) {
    let Some(window) = web_sys::window() else {
        return;
    };
    let holder: Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>> = Rc::new(RefCell::new(None));
    let holder_for_cb = Rc::clone(&holder);
    let window_for_cb = window.clone();
    let cb = Closure::wrap(Box::new(move |ts: f64| {
        if !frame(ts) {
            holder_for_cb.borrow_mut().take();
            return;
        }
        let requested = holder_for_cb
            .borrow()
            .as_ref()
            .map(|cb| window_for_cb.request_animation_frame(cb.as_ref().unchecked_ref()));
        if let Some(Err(e)) = requested {
            log::warn!("requestAnimationFrame failed: {}", describe(&e));
        }
    }) as Box<dyn FnMut(f64)>);

    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(_) => *holder.borrow_mut() = Some(cb),
        Err(e) => log::warn!("requestAnimationFrame failed: {}", describe(&e)),
    }
}

/// Watch `targets` with an `IntersectionObserver`. The callback receives the
/// observer so it can unobserve targets it is done with.
pub fn observe_intersections(
    targets: &[Element],
    threshold: f64,
    root_margin: &str,
    mut on_entry: impl FnMut(&IntersectionObserver, IntersectionObserverEntry) + 'static,
) -> Result<IntersectionObserver, FeatureError> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                on_entry(&observer, entry);
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(threshold));
    init.set_root_margin(root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(js_error)?;
    callback.forget();

    for target in targets {
        observer.observe(target);
    }
    Ok(observer)
}
