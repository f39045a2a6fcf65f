//! Leptos components mounted alongside the static page.

pub mod toast_host;
