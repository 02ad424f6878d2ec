//! Cosmetic fade when following an internal link.
//!
//! The fade never blocks or delays navigation: the click proceeds normally
//! and a fire-and-forget timer restores full opacity.

#[cfg(test)]
#[path = "transition_test.rs"]
mod transition_test;

use gloo_timers::callback::Timeout;
use web_sys::{Document, Element};

use crate::config::TransitionConfig;
use crate::consts::INTERNAL_LINK_SELECTOR;
use crate::dom::{self, Listener};
use crate::error::SiteError;

/// Whether clicking a link with this `href` should fade the page: internal
/// paths (`/…` or `./…`) without a fragment.
#[must_use]
pub fn should_fade(href: &str) -> bool {
    (href.starts_with('/') || href.starts_with("./")) && !href.contains('#')
}

/// CSS opacity value for a fraction in `0.0..=1.0`.
#[must_use]
pub fn opacity_value(opacity: f64) -> String {
    format!("{}", opacity.clamp(0.0, 1.0))
}

/// Click handlers on the page's internal links.
pub struct PageFade {
    listeners: Vec<Listener>,
}

impl PageFade {
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.listeners.len()
    }
}

/// Bind the fade to every internal link present at mount.
///
/// # Errors
///
/// Propagates DOM failures while attaching listeners.
pub fn mount(document: &Document, config: &TransitionConfig) -> Result<Option<PageFade>, SiteError> {
    let links = dom::query_all::<Element>(document, INTERNAL_LINK_SELECTOR)?;
    if links.is_empty() {
        log::debug!("transition: no internal links");
        return Ok(None);
    }
    let body = dom::body(document)?;
    let faded = opacity_value(config.faded_opacity);
    let restore_after_ms = config.restore_after_ms;

    let mut listeners = Vec::with_capacity(links.len());
    for link in &links {
        let anchor = link.clone();
        let body = body.clone();
        let faded = faded.clone();
        listeners.push(Listener::new(link, "click", move |_| {
            let href = anchor.get_attribute("href").unwrap_or_default();
            if !should_fade(&href) {
                return;
            }
            dom::set_style(&body, "opacity", &faded);
            let body = body.clone();
            Timeout::new(restore_after_ms, move || dom::set_style(&body, "opacity", "1")).forget();
        })?);
    }
    log::debug!("transition: bound {} links", listeners.len());
    Ok(Some(PageFade { listeners }))
}
