//! Browser-independent logic behind the portfolio page effects.
//!
//! Everything here is plain Rust: state machines, rules, and timelines that
//! the `folio` browser crate drives from DOM events and timers. Keeping them
//! free of `web-sys` lets the behaviour be tested natively.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`theme`] | Light/dark theme and its stored preference |
//! | [`toast`] | Toast notification timeline |
//! | [`reveal`] | One-shot scroll reveal tracking and stagger delays |
//! | [`form`] | Contact form field rules, submit target, loading guard |
//! | [`nav`] | Active section, header chrome, throttle, menu, keyboard steps |
//! | [`filter`] | Project card filtering plans |
//! | [`typing`] | Typing-text loop |
//! | [`easing`] | Easing curve for skill bars and counters |
//! | [`pipeline`] | Pipeline diagram highlight cycle |
//! | [`konami`] | Konami code matcher |
//! | [`motion`] | Cursor follower and parallax |
//! | [`download`] | Asset probe outcomes |
//! | [`task`] | Cancellation flag for timer chains |
//! | [`registry`] | Feature registry and registration report |
//! | [`config`] | Page configuration and overrides |
//! | [`consts`] | Default thresholds and durations |

pub mod config;
pub mod consts;
pub mod download;
pub mod easing;
pub mod filter;
pub mod form;
pub mod konami;
pub mod motion;
pub mod nav;
pub mod pipeline;
pub mod registry;
pub mod reveal;
pub mod task;
pub mod theme;
pub mod toast;
pub mod typing;
