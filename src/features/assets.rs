//! Asset loading helpers: lazy images, prefetch hints, service worker.

use effects::registry::{Activation, FeatureError, FeatureResult};
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{HtmlImageElement, HtmlLinkElement, ServiceWorkerRegistration};

use super::FeatureContext;
use crate::util::dom;

pub fn init_lazy_images(ctx: &FeatureContext) -> FeatureResult {
    let images = dom::query_all(&ctx.document, "img[data-src]");
    if images.is_empty() {
        return Ok(Activation::Skipped("no img[data-src]"));
    }

    dom::observe_intersections(&images, 0.0, "0px", |observer, entry| {
        if !entry.is_intersecting() {
            return;
        }
        let target = entry.target();
        if let (Some(img), Some(src)) = (target.dyn_ref::<HtmlImageElement>(), target.get_attribute("data-src")) {
            img.set_src(&src);
        }
        dom::set_class(&target, "lazy", false);
        observer.unobserve(&target);
    })?;

    Ok(Activation::Active)
}

pub fn init_prefetch(ctx: &FeatureContext) -> FeatureResult {
    if ctx.config.prefetch.is_empty() {
        return Ok(Activation::Skipped("nothing to prefetch"));
    }
    let head = ctx.document.head().ok_or_else(|| FeatureError::MissingElement("head".to_owned()))?;
    for url in &ctx.config.prefetch {
        let link = ctx
            .document
            .create_element("link")
            .map_err(dom::js_error)?
            .dyn_into::<HtmlLinkElement>()
            .map_err(|_| FeatureError::Dom("created <link> is not a link element".to_owned()))?;
        link.set_rel("prefetch");
        link.set_href(url);
        head.append_child(&link).map_err(dom::js_error)?;
    }
    log::debug!("prefetching {} resources", ctx.config.prefetch.len());
    Ok(Activation::Active)
}

pub fn init_service_worker(ctx: &FeatureContext) -> FeatureResult {
    let Some(path) = ctx.config.service_worker.clone() else {
        return Ok(Activation::Skipped("service worker disabled"));
    };
    let navigator = ctx.window.navigator();
    if !js_sys::Reflect::has(&navigator, &"serviceWorker".into()).unwrap_or(false) {
        return Ok(Activation::Skipped("service workers unsupported"));
    }

    let promise = navigator.service_worker().register(&path);
    wasm_bindgen_futures::spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(value) => {
                let scope = value.dyn_into::<ServiceWorkerRegistration>().map(|r| r.scope()).unwrap_or_default();
                log::info!("service worker registered: {scope}");
            }
            Err(e) => log::warn!("service worker registration failed: {}", dom::describe(&e)),
        }
    });
    Ok(Activation::Active)
}
