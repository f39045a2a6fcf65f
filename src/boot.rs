//! Start-up: logging, config, toast host, feature registration.
//!
//! BOOT ORDER
//! ==========
//! 1. Panic hook and `console_log` so every later step can report.
//! 2. Window `error` / `unhandledrejection` listeners.
//! 3. [`PageConfig`] from the optional `#folio-config` JSON block.
//! 4. The toast host, so units can notify from their first handler.
//! 5. The feature registry, each unit isolated from the others' failures.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use effects::config::PageConfig;

/// Config from the page's override block, falling back to defaults when the
/// block is absent or malformed.
pub fn resolve_config(raw: Option<&str>) -> PageConfig {
    let Some(raw) = raw.map(str::trim).filter(|r| !r.is_empty()) else {
        return PageConfig::default();
    };
    match PageConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("ignoring page config: {e}");
            PageConfig::default()
        }
    }
}

#[cfg(feature = "csr")]
pub fn run() {
    use effects::config::CONFIG_ELEMENT_ID;
    use leptos::prelude::*;

    use crate::components::toast_host::ToastHost;
    use crate::features::{FeatureContext, registry};
    use crate::state::toasts::Notifier;

    console_error_panic_hook::set_once();
    let level = if cfg!(debug_assertions) { log::Level::Debug } else { log::Level::Info };
    if let Err(e) = console_log::init_with_level(level) {
        web_sys::console::warn_1(&format!("logger already installed: {e}").into());
    }

    let Some(window) = web_sys::window() else {
        log::error!("no window; nothing to bind");
        return;
    };
    let Some(document) = window.document() else {
        log::error!("no document; nothing to bind");
        return;
    };
    report_uncaught(&window);

    let raw = document.get_element_by_id(CONFIG_ELEMENT_ID).and_then(|el| el.text_content());
    let config = resolve_config(raw.as_deref());

    let notifier = Notifier::new(config.toast);
    leptos::mount::mount_to_body(move || view! { <ToastHost notifier=notifier /> });

    let ctx = FeatureContext { config, notifier, window, document };
    let report = registry().run(&ctx);
    report.log();
}

/// Route uncaught exceptions and rejections to the log.
#[cfg(feature = "csr")]
fn report_uncaught(window: &web_sys::Window) {
    use gloo_events::EventListener;
    use wasm_bindgen::JsCast;
    use web_sys::{ErrorEvent, PromiseRejectionEvent};

    use crate::util::dom;

    EventListener::new(window, "error", |event| {
        if let Some(error) = event.dyn_ref::<ErrorEvent>() {
            log::error!("uncaught: {} ({}:{})", error.message(), error.filename(), error.lineno());
        }
    })
    .forget();

    EventListener::new(window, "unhandledrejection", |event| {
        if let Some(rejection) = event.dyn_ref::<PromiseRejectionEvent>() {
            log::error!("unhandled rejection: {}", dom::describe(&rejection.reason()));
        }
    })
    .forget();
}
