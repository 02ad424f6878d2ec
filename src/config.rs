//! Site configuration.
//!
//! Read once at mount time from the JSON in the `<body data-folio-config>`
//! attribute (or passed to `mount`). Every section defaults independently, so
//! pages only spell out the knobs they change.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::Deserialize;

use crate::consts::{
    DEFAULT_LOG_LEVEL, FADE_RESTORE_MS, FADED_OPACITY, LAZY_ROOT_MARGIN, NARROW_VIEWPORT_MAX_WIDTH,
    SAFE_AREA_BACKGROUND, SAFE_AREA_FALLBACK_INSET, SAFE_AREA_THRESHOLD_PX, SUBMIT_LOADING_LABEL,
};
use crate::error::SiteError;
use crate::lightbox::{CounterFormat, CounterPlacement};

/// Top-level configuration for every behavior on the page.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub lightbox: LightboxConfig,
    pub lazy: LazyConfig,
    pub transition: TransitionConfig,
    pub contact: ContactConfig,
    pub safe_area: SafeAreaConfig,
    /// Console log level (`error`, `warn`, `info`, `debug`, `trace`).
    pub log_level: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            lightbox: LightboxConfig::default(),
            lazy: LazyConfig::default(),
            transition: TransitionConfig::default(),
            contact: ContactConfig::default(),
            safe_area: SafeAreaConfig::default(),
            log_level: DEFAULT_LOG_LEVEL.to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LightboxConfig {
    /// Build the lightbox even when the viewport is narrow at mount time.
    pub enable_on_narrow_viewport: bool,
    pub narrow_viewport_max_width: f64,
    pub counter_format: CounterFormat,
    pub counter_placement: CounterPlacement,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            enable_on_narrow_viewport: false,
            narrow_viewport_max_width: NARROW_VIEWPORT_MAX_WIDTH,
            counter_format: CounterFormat::default(),
            counter_placement: CounterPlacement::default(),
        }
    }
}

impl LightboxConfig {
    /// Whether the lightbox should be built for a viewport of `viewport_width`
    /// CSS pixels. Evaluated once; resizing later does not re-run it.
    #[must_use]
    pub fn enabled_for_width(&self, viewport_width: f64) -> bool {
        self.enable_on_narrow_viewport || viewport_width > self.narrow_viewport_max_width
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LazyConfig {
    /// `IntersectionObserver` root margin.
    pub root_margin: String,
}

impl Default for LazyConfig {
    fn default() -> Self {
        Self { root_margin: LAZY_ROOT_MARGIN.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct TransitionConfig {
    pub faded_opacity: f64,
    pub restore_after_ms: u32,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self { faded_opacity: FADED_OPACITY, restore_after_ms: FADE_RESTORE_MS }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub loading_label: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self { loading_label: SUBMIT_LOADING_LABEL.to_owned() }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SafeAreaConfig {
    pub enabled: bool,
    /// Scroll offset in CSS pixels past which the cover is shown.
    pub threshold_px: f64,
    /// Height used where the platform reports no `safe-area-inset-top`.
    pub fallback_inset: String,
    /// Background of a cover this crate creates; pages supplying their own
    /// `.safe-area-cover` style it themselves.
    pub background: String,
}

impl Default for SafeAreaConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            threshold_px: SAFE_AREA_THRESHOLD_PX,
            fallback_inset: SAFE_AREA_FALLBACK_INSET.to_owned(),
            background: SAFE_AREA_BACKGROUND.to_owned(),
        }
    }
}

impl SiteConfig {
    /// Parse a JSON config. Blank input yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`SiteError::Config`] when the text is not a valid config object.
    pub fn from_json(text: &str) -> Result<Self, SiteError> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(serde_json::from_str(text)?)
    }

    /// The configured log level, falling back to `Info` when unknown.
    #[must_use]
    pub fn log_level(&self) -> log::Level {
        self.log_level.parse().unwrap_or(log::Level::Info)
    }
}
