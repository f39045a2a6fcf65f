//! Folio: interactivity for a static single-page portfolio.
//!
//! The page ships as plain HTML and CSS. This crate compiles to WASM and
//! binds independent feature units to it: theme, navigation, reveals,
//! counters, project filter, contact form, toasts and a handful of
//! decorative effects. Pure rules live in the `effects` crate; everything
//! here is the browser seam.
//!
//! Browser code sits behind the `csr` feature. Without it the crate still
//! builds natively so its tests run under plain `cargo test`.

pub mod boot;
pub mod components;
pub mod error;
#[cfg(feature = "csr")]
pub mod features;
pub mod net;
pub mod state;
pub mod util;

#[cfg(feature = "csr")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn start() {
    boot::run();
}
