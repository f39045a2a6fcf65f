//! Page configuration.
//!
//! Every tunable has a default matching the stock portfolio page. A page can
//! override any subset by embedding a JSON object (see [`PageConfig::from_json`]);
//! omitted keys keep their defaults.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    COUNTER_DURATION_MS, DEFAULT_HEADER_HEIGHT_PX, PIPELINE_PERIOD_MS, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD,
    SCROLL_THROTTLE_MS, SECTION_REFERENCE_OFFSET_PX, SIMULATED_SUBMIT_MS, SKILL_DURATION_MS, SKILL_ROOT_MARGIN,
    SKILL_THRESHOLD, SUCCESS_NOTICE_MS,
};
use crate::nav::ChromeThresholds;
use crate::registry::FeatureError;
use crate::toast::ToastTimings;
use crate::typing::TypingSpeeds;

/// Id of the `<script type="application/json">` block holding overrides.
pub const CONFIG_ELEMENT_ID: &str = "folio-config";

const DEFAULT_PREFETCH: &str =
    "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&family=JetBrains+Mono:wght@400;500;600&display=swap";

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub chrome: ChromeThresholds,
    /// Used when `#header` cannot be measured.
    pub header_height_px: f64,
    /// Margin between the header and the section reference line.
    pub section_offset_px: f64,
    pub scroll_throttle_ms: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub skill_threshold: f64,
    pub skill_root_margin: String,
    pub skill_duration_ms: f64,
    pub counter_duration_ms: f64,
    pub toast: ToastTimings,
    pub typing: TypingSpeeds,
    pub pipeline_period_ms: u32,
    pub simulated_submit_ms: u32,
    pub success_notice_ms: u32,
    /// Overrides the contact form's `action` attribute.
    pub form_endpoint: Option<String>,
    /// Service worker script; `None` disables registration.
    pub service_worker: Option<String>,
    pub prefetch: Vec<String>,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            chrome: ChromeThresholds::default(),
            header_height_px: DEFAULT_HEADER_HEIGHT_PX,
            section_offset_px: SECTION_REFERENCE_OFFSET_PX,
            scroll_throttle_ms: SCROLL_THROTTLE_MS,
            reveal_threshold: REVEAL_THRESHOLD,
            reveal_root_margin: REVEAL_ROOT_MARGIN.to_owned(),
            skill_threshold: SKILL_THRESHOLD,
            skill_root_margin: SKILL_ROOT_MARGIN.to_owned(),
            skill_duration_ms: SKILL_DURATION_MS,
            counter_duration_ms: COUNTER_DURATION_MS,
            toast: ToastTimings::default(),
            typing: TypingSpeeds::default(),
            pipeline_period_ms: PIPELINE_PERIOD_MS,
            simulated_submit_ms: SIMULATED_SUBMIT_MS,
            success_notice_ms: SUCCESS_NOTICE_MS,
            form_endpoint: None,
            service_worker: Some("/sw.js".to_owned()),
            prefetch: vec![DEFAULT_PREFETCH.to_owned()],
        }
    }
}

impl PageConfig {
    /// Parse an override object.
    ///
    /// # Errors
    ///
    /// Returns [`FeatureError::Config`] for malformed JSON or out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, FeatureError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| FeatureError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), FeatureError> {
        for (name, value) in [("reveal_threshold", self.reveal_threshold), ("skill_threshold", self.skill_threshold)] {
            if !(0.0..=1.0).contains(&value) {
                return Err(FeatureError::Config(format!("{name} must be within 0..=1, got {value}")));
            }
        }
        let durations = [
            ("header_height_px", self.header_height_px),
            ("scroll_throttle_ms", self.scroll_throttle_ms),
            ("skill_duration_ms", self.skill_duration_ms),
            ("counter_duration_ms", self.counter_duration_ms),
            ("toast.slide_in_ms", self.toast.slide_in_ms),
            ("toast.display_ms", self.toast.display_ms),
            ("toast.slide_out_ms", self.toast.slide_out_ms),
        ];
        for (name, value) in durations {
            if !value.is_finite() || value < 0.0 {
                return Err(FeatureError::Config(format!("{name} must be a non-negative number, got {value}")));
            }
        }
        if self.pipeline_period_ms == 0 {
            return Err(FeatureError::Config("pipeline_period_ms must be positive".to_owned()));
        }
        Ok(())
    }

    /// Distance from the viewport top to the section reference line.
    #[must_use]
    pub fn reference_offset(&self, measured_header_px: Option<f64>) -> f64 {
        measured_header_px.filter(|h| *h > 0.0).unwrap_or(self.header_height_px) + self.section_offset_px
    }

    /// Header height for smooth-scroll targets.
    #[must_use]
    pub fn header_height(&self, measured_header_px: Option<f64>) -> f64 {
        measured_header_px.filter(|h| *h > 0.0).unwrap_or(self.header_height_px)
    }
}
