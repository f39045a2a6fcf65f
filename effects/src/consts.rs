//! Shared default constants for the page effects.

// ── Navigation ──────────────────────────────────────────────────

/// Scroll distance past which the header switches to its `scrolled` style.
pub const HEADER_SCROLLED_PX: f64 = 50.0;

/// Scroll distance past which the back-to-top control is shown.
pub const BACK_TO_TOP_PX: f64 = 500.0;

/// Header height assumed when the header element cannot be measured.
pub const DEFAULT_HEADER_HEIGHT_PX: f64 = 70.0;

/// Extra distance below the header where the section reference line sits.
pub const SECTION_REFERENCE_OFFSET_PX: f64 = 100.0;

/// Viewport line used by keyboard section navigation.
pub const KEYBOARD_PROBE_LINE_PX: f64 = 100.0;

/// Minimum spacing between two handled scroll ticks (~one frame).
pub const SCROLL_THROTTLE_MS: f64 = 16.0;

// ── Toasts ──────────────────────────────────────────────────────

pub const TOAST_SLIDE_IN_MS: f64 = 300.0;
pub const TOAST_DISPLAY_MS: f64 = 3_000.0;
pub const TOAST_SLIDE_OUT_MS: f64 = 300.0;

// ── Reveal / progress ───────────────────────────────────────────

/// Fraction of an element that must be visible before it is revealed.
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

/// Per-sibling delay for staggered reveals and filtered cards.
pub const STAGGER_STEP_MS: f64 = 100.0;

pub const SKILL_THRESHOLD: f64 = 0.5;
pub const SKILL_ROOT_MARGIN: &str = "0px 0px -100px 0px";
pub const SKILL_DURATION_MS: f64 = 1_500.0;
pub const COUNTER_DURATION_MS: f64 = 2_000.0;

// ── Project filter ──────────────────────────────────────────────

/// Filter value that matches every card.
pub const FILTER_ALL: &str = "all";
pub const CARD_HIDE_MS: f64 = 300.0;

// ── Timer chains ────────────────────────────────────────────────

pub const PIPELINE_PERIOD_MS: u32 = 3_000;
pub const TYPING_TYPE_MS: u32 = 100;
pub const TYPING_DELETE_MS: u32 = 50;
pub const TYPING_HOLD_MS: u32 = 2_000;
pub const TYPING_GAP_MS: u32 = 500;

/// Fraction of the remaining distance the cursor follower closes per frame.
pub const CURSOR_EASE: f64 = 0.15;

// ── Form ────────────────────────────────────────────────────────

pub const MESSAGE_MIN_CHARS: usize = 10;
pub const SIMULATED_SUBMIT_MS: u32 = 2_000;
pub const SUCCESS_NOTICE_MS: u32 = 5_000;

// ── Theme ───────────────────────────────────────────────────────

/// Local storage key holding the theme preference.
pub const THEME_STORAGE_KEY: &str = "theme";
pub const THEME_PRESS_MS: u32 = 150;
