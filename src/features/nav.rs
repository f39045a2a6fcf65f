//! Header, nav links, mobile menu, back-to-top, keyboard section stepping.

use std::cell::RefCell;
use std::rc::Rc;

use effects::config::PageConfig;
use effects::consts::KEYBOARD_PROBE_LINE_PX;
use effects::nav::{
    MenuState, NavHighlight, ScrollChrome, SectionSpan, StepDirection, Throttle, ThrottleCall, neighbor_section,
    scroll_target,
};
use effects::registry::{Activation, FeatureResult};
use gloo_events::{EventListener, EventListenerOptions};
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, KeyboardEvent, Node, Window};

use super::FeatureContext;
use crate::util::clock::now_ms;
use crate::util::dom;

struct Navigation {
    config: PageConfig,
    window: Window,
    document: Document,
    header: Option<Element>,
    menu: Option<Element>,
    toggle: Option<Element>,
    back_to_top: Option<Element>,
    links: Vec<Element>,
    sections: Vec<Element>,
    highlight: RefCell<NavHighlight>,
    menu_state: RefCell<MenuState>,
    throttle: RefCell<Throttle>,
}

impl Navigation {
    fn header_height(&self) -> Option<f64> {
        self.header.as_ref().map(dom::offset_height)
    }

    fn on_scroll(self: &Rc<Self>) {
        let call = self.throttle.borrow_mut().poll(now_ms());
        match call {
            ThrottleCall::Run => self.refresh(),
            ThrottleCall::Schedule { wait_ms } => {
                let nav = Rc::clone(self);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let wait = wait_ms.ceil().max(0.0) as u32;
                Timeout::new(wait, move || {
                    let fire = nav.throttle.borrow_mut().fire_trailing(now_ms());
                    if fire {
                        nav.refresh();
                    }
                })
                .forget();
            }
            ThrottleCall::Skip => {}
        }
    }

    fn refresh(&self) {
        let chrome = ScrollChrome::at(dom::scroll_y(&self.window), self.config.chrome);
        if let Some(header) = &self.header {
            dom::set_class(header, "scrolled", chrome.header_scrolled);
        }
        if let Some(button) = &self.back_to_top {
            dom::set_class(button, "show", chrome.back_to_top_visible);
        }
        self.update_active_link();
    }

    fn update_active_link(&self) {
        let spans = self
            .sections
            .iter()
            .map(|s| SectionSpan::new(s.id(), dom::offset_top(s), dom::offset_height(s)))
            .collect::<Vec<_>>();
        let offset = self.config.reference_offset(self.header_height());
        let mut highlight = self.highlight.borrow_mut();
        let Some(active) = highlight.update(&spans, dom::scroll_y(&self.window), offset) else {
            return;
        };
        let target_href = format!("#{active}");
        for link in &self.links {
            let is_target = link.get_attribute("href").as_deref() == Some(target_href.as_str());
            dom::set_class(link, "active", is_target);
        }
    }

    fn set_menu(&self, open: bool) {
        if let Some(menu) = &self.menu {
            dom::set_class(menu, "show", open);
        }
        if let Some(toggle) = &self.toggle {
            dom::set_class(toggle, "active", open);
            if let Ok(Some(icon)) = toggle.query_selector("i") {
                icon.set_class_name(MenuState { open }.icon_class());
            }
        }
        if let Some(body) = self.document.body() {
            if open {
                dom::set_style(&body, "overflow", "hidden");
            } else {
                dom::clear_style(&body, "overflow");
            }
        }
    }

    fn toggle_menu(&self) {
        let open = self.menu_state.borrow_mut().toggle();
        self.set_menu(open);
    }

    fn close_menu(&self) {
        if self.menu_state.borrow_mut().close() {
            self.set_menu(false);
        }
    }

    fn scroll_to_element(&self, target: &Element) {
        let header = self.config.header_height(self.header_height());
        dom::smooth_scroll_to(&self.window, scroll_target(dom::offset_top(target), header));
    }

    fn on_link_click(&self, link: &Element, event: &web_sys::Event) {
        self.close_menu();
        let Some(href) = link.get_attribute("href") else {
            return;
        };
        let Some(id) = href.strip_prefix('#') else {
            return;
        };
        event.prevent_default();
        if let Some(target) = self.document.get_element_by_id(id) {
            self.scroll_to_element(&target);
        }
    }

    fn on_document_click(&self, event: &web_sys::Event) {
        let Some(target) = event.target().and_then(|t| t.dyn_into::<Node>().ok()) else {
            return;
        };
        let inside = |el: &Option<Element>| el.as_ref().is_some_and(|el| el.contains(Some(&target)));
        if !inside(&self.menu) && !inside(&self.toggle) {
            self.close_menu();
        }
    }

    fn on_keydown(&self, event: &KeyboardEvent) {
        if !event.alt_key() {
            return;
        }
        let Some(direction) = StepDirection::from_key(&event.key()) else {
            return;
        };
        let rects = self
            .sections
            .iter()
            .map(|s| {
                let rect = s.get_bounding_client_rect();
                (rect.top(), rect.bottom())
            })
            .collect::<Vec<_>>();
        let Some(index) = neighbor_section(&rects, KEYBOARD_PROBE_LINE_PX, direction) else {
            return;
        };
        event.prevent_default();
        if let Some(target) = self.sections.get(index) {
            self.scroll_to_element(target);
        }
    }
}

pub fn init(ctx: &FeatureContext) -> FeatureResult {
    let doc = &ctx.document;
    let nav = Rc::new(Navigation {
        config: ctx.config.clone(),
        window: ctx.window.clone(),
        document: doc.clone(),
        header: dom::query(doc, "#header"),
        menu: dom::query(doc, "#nav-menu"),
        toggle: dom::query(doc, "#nav-toggle"),
        back_to_top: dom::query(doc, "#back-to-top"),
        links: dom::query_all(doc, ".nav__link"),
        sections: dom::query_all(doc, "section[id]"),
        highlight: RefCell::new(NavHighlight::default()),
        menu_state: RefCell::new(MenuState::default()),
        throttle: RefCell::new(Throttle::new(ctx.config.scroll_throttle_ms)),
    });
    if nav.header.is_none() && nav.links.is_empty() {
        return Ok(Activation::Skipped("no header or nav links"));
    }

    let prevent = EventListenerOptions::enable_prevent_default();

    if let Some(toggle) = &nav.toggle {
        let nav_cb = Rc::clone(&nav);
        EventListener::new(toggle, "click", move |_| nav_cb.toggle_menu()).forget();
    }

    for link in &nav.links {
        let nav_cb = Rc::clone(&nav);
        let link_cb = link.clone();
        EventListener::new_with_options(link, "click", prevent, move |event| nav_cb.on_link_click(&link_cb, event))
            .forget();
    }

    let nav_cb = Rc::clone(&nav);
    EventListener::new(&ctx.window, "scroll", move |_| nav_cb.on_scroll()).forget();

    if let Some(button) = &nav.back_to_top {
        let window = ctx.window.clone();
        EventListener::new(button, "click", move |_| dom::smooth_scroll_to(&window, 0.0)).forget();
    }

    let nav_cb = Rc::clone(&nav);
    EventListener::new(doc, "click", move |event| nav_cb.on_document_click(event)).forget();

    let nav_cb = Rc::clone(&nav);
    EventListener::new_with_options(doc, "keydown", prevent, move |event| {
        if let Some(key_event) = event.dyn_ref::<KeyboardEvent>() {
            nav_cb.on_keydown(key_event);
        }
    })
    .forget();

    nav.update_active_link();
    Ok(Activation::Active)
}
