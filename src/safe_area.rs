//! Safe-area cover for notched Apple touch devices.
//!
//! A fixed element at the top of the viewport grows to the platform's
//! `safe-area-inset-top` once the page scrolls past a threshold, so content
//! does not show through the notch area. Platform detection runs once at
//! mount; the scroll listener is passive and only writes a style when the
//! covered state flips.

#[cfg(test)]
#[path = "safe_area_test.rs"]
mod safe_area_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement, Window};

use crate::config::SafeAreaConfig;
use crate::consts::{SAFE_AREA_COVER_CLASS, SAFE_AREA_Z_INDEX};
use crate::dom::{self, Listener};
use crate::error::SiteError;

/// Whether the navigator describes a touch-capable Apple device. iPadOS
/// reports a desktop `MacIntel` platform, so touch points decide there.
#[must_use]
pub fn is_apple_touch(user_agent: &str, platform: &str, max_touch_points: i32) -> bool {
    let mobile_ua = ["iPhone", "iPad", "iPod"].iter().any(|d| user_agent.contains(d));
    mobile_ua || (platform == "MacIntel" && max_touch_points > 1)
}

/// CSS height used while covered.
#[must_use]
pub fn inset_height(fallback: &str) -> String {
    format!("env(safe-area-inset-top, {fallback})")
}

/// Inline styles for a cover element this module creates: pinned to the top
/// edge, opaque and stacked above page content.
#[must_use]
pub fn created_cover_styles(config: &SafeAreaConfig) -> [(&'static str, String); 6] {
    [
        ("position", "fixed".to_owned()),
        ("top", "0".to_owned()),
        ("left", "0".to_owned()),
        ("right", "0".to_owned()),
        ("z-index", SAFE_AREA_Z_INDEX.to_owned()),
        ("background", config.background.clone()),
    ]
}

/// Covered/uncovered tracker around a scroll threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoverTracker {
    threshold: f64,
    covered: bool,
}

impl CoverTracker {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self { threshold, covered: false }
    }

    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.covered
    }

    /// Feed a scroll offset. Returns the new covered state only when it
    /// changed, so callers write styles on crossings alone.
    pub fn update(&mut self, scroll_y: f64) -> Option<bool> {
        let covered = scroll_y > self.threshold;
        if covered == self.covered {
            return None;
        }
        self.covered = covered;
        Some(covered)
    }
}

/// Mounted cover. Dropping it stops the scroll listener and removes a cover
/// element this module created.
pub struct SafeAreaCover {
    tracker: Rc<RefCell<CoverTracker>>,
    created: Option<HtmlElement>,
    _listener: Listener,
}

impl SafeAreaCover {
    #[must_use]
    pub fn is_covered(&self) -> bool {
        self.tracker.borrow().is_covered()
    }
}

impl Drop for SafeAreaCover {
    fn drop(&mut self) {
        if let Some(cover) = &self.created {
            cover.remove();
        }
    }
}

/// Mount the cover on Apple touch devices; elsewhere returns `Ok(None)`.
///
/// # Errors
///
/// Propagates DOM failures while creating the cover or attaching the listener.
pub fn mount(window: &Window, document: &Document, config: &SafeAreaConfig) -> Result<Option<SafeAreaCover>, SiteError> {
    if !config.enabled {
        return Ok(None);
    }
    let navigator = window.navigator();
    let user_agent = navigator.user_agent()?;
    let platform = navigator.platform()?;
    if !is_apple_touch(&user_agent, &platform, navigator.max_touch_points()) {
        log::debug!("safe-area: not an Apple touch device");
        return Ok(None);
    }

    let (cover, created) = match dom::query_document(document, &format!(".{SAFE_AREA_COVER_CLASS}"))? {
        Some(existing) => (as_html(existing)?, None),
        None => {
            let cover = as_html(document.create_element("div")?)?;
            cover.set_class_name(SAFE_AREA_COVER_CLASS);
            for (property, value) in created_cover_styles(config) {
                dom::set_style(&cover, property, &value);
            }
            dom::body(document)?.append_child(&cover)?;
            (cover.clone(), Some(cover))
        }
    };
    dom::set_style(&cover, "height", "0");

    let covered_height = inset_height(&config.fallback_inset);
    let tracker = Rc::new(RefCell::new(CoverTracker::new(config.threshold_px)));
    let apply = {
        let tracker = Rc::clone(&tracker);
        move |scroll_y: f64| {
            let flipped = tracker.borrow_mut().update(scroll_y);
            match flipped {
                Some(true) => dom::set_style(&cover, "height", &covered_height),
                Some(false) => dom::set_style(&cover, "height", "0"),
                None => {}
            }
        }
    };
    apply(window.scroll_y()?);

    let scroller = window.clone();
    let listener = Listener::passive(window, "scroll", move |_| match scroller.scroll_y() {
        Ok(y) => apply(y),
        Err(err) => log::warn!("safe-area: failed to read scroll offset: {err:?}"),
    })?;

    log::debug!("safe-area: mounted");
    Ok(Some(SafeAreaCover { tracker, created, _listener: listener }))
}

fn as_html(element: web_sys::Element) -> Result<HtmlElement, SiteError> {
    element
        .dyn_into::<HtmlElement>()
        .map_err(|_| SiteError::Js("safe-area cover is not an HtmlElement".to_owned()))
}
