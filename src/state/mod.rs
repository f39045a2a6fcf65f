//! Reactive state shared across feature units.

pub mod toasts;
