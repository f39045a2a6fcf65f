//! CV download links: probe with `HEAD` before letting the download happen.

use effects::registry::{Activation, FeatureResult};
use gloo_events::{EventListener, EventListenerOptions};
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlAnchorElement};

use super::FeatureContext;
use crate::net::api;
use crate::util::dom;

pub fn init(ctx: &FeatureContext) -> FeatureResult {
    let links = dom::query_all(&ctx.document, "a[download]")
        .into_iter()
        .filter_map(|el| el.dyn_into::<HtmlAnchorElement>().ok())
        .collect::<Vec<_>>();
    if links.is_empty() {
        return Ok(Activation::Skipped("no a[download] links"));
    }

    let prevent = EventListenerOptions::enable_prevent_default();
    for link in links {
        let document = ctx.document.clone();
        let notifier = ctx.notifier;
        let anchor = link.clone();
        EventListener::new_with_options(&link, "click", prevent, move |event| {
            event.prevent_default();
            let url = anchor.href();
            let filename = anchor.download();
            let document = document.clone();
            wasm_bindgen_futures::spawn_local(async move {
                let outcome = api::probe_asset(&url).await;
                log::info!("cv probe {url}: {outcome:?}");
                if outcome.allows_download() {
                    start_download(&document, &url, &filename);
                }
                let (message, kind) = outcome.notice();
                notifier.notify(message, kind);
            });
        })
        .forget();
    }

    Ok(Activation::Active)
}

/// Follow the link through a detached anchor so the click listener above
/// does not fire again.
fn start_download(document: &Document, url: &str, filename: &str) {
    let anchor = match document.create_element("a").map(Element::dyn_into::<HtmlAnchorElement>) {
        Ok(Ok(anchor)) => anchor,
        Ok(Err(_)) => return,
        Err(e) => {
            log::warn!("download anchor unavailable: {}", dom::describe(&e));
            return;
        }
    };
    anchor.set_href(url);
    anchor.set_download(filename);
    anchor.click();
}
