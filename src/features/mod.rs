//! Feature units bound to the static portfolio page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each unit looks up only the elements it needs, binds its listeners and
//! owns its state. Units never talk to each other; the only shared handle is
//! the [`Notifier`]. [`registry`] lists them in startup order.

use effects::config::PageConfig;
use effects::registry::FeatureRegistry;
use web_sys::{Document, Window};

use crate::state::toasts::Notifier;

pub mod assets;
pub mod contact;
pub mod download;
pub mod filter;
pub mod konami;
pub mod motion;
pub mod nav;
pub mod pipeline;
pub mod progress;
pub mod reveal;
pub mod theme;
pub mod typing;

/// Everything an initializer may capture.
pub struct FeatureContext {
    pub config: PageConfig,
    pub notifier: Notifier,
    pub window: Window,
    pub document: Document,
}

pub fn registry() -> FeatureRegistry<FeatureContext> {
    FeatureRegistry::new()
        .register("theme", theme::init)
        .register("navigation", nav::init)
        .register("scroll-reveal", reveal::init)
        .register("skill-bars", progress::init_skill_bars)
        .register("counters", progress::init_counters)
        .register("project-filter", filter::init)
        .register("contact-form", contact::init)
        .register("pipeline", pipeline::init)
        .register("typing", typing::init)
        .register("cv-download", download::init)
        .register("cursor-follower", motion::init_cursor)
        .register("parallax", motion::init_parallax)
        .register("konami", konami::init)
        .register("lazy-images", assets::init_lazy_images)
        .register("prefetch", assets::init_prefetch)
        .register("service-worker", assets::init_service_worker)
}
