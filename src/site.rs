//! Mounts every page behavior and owns the resulting handles.
//!
//! Behaviors are independent: one failing to mount is logged and skipped,
//! and the rest still bind.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use crate::config::SiteConfig;
use crate::consts::CONFIG_ATTR;
use crate::contact::{self, ContactForm};
use crate::dom;
use crate::error::SiteError;
use crate::gallery::{self, Gallery};
use crate::lazy::{self, LazyLoader};
use crate::nav::{self, NavToggle};
use crate::safe_area::{self, SafeAreaCover};
use crate::transition::{self, PageFade};

thread_local! {
    static MOUNTED: RefCell<Option<Site>> = const { RefCell::new(None) };
}

/// Handles for everything bound on the page. Dropping (or calling
/// [`Site::dispose`]) unbinds all listeners and removes injected elements.
#[wasm_bindgen]
pub struct Site {
    nav: Option<NavToggle>,
    gallery: Option<Gallery>,
    lazy: Option<LazyLoader>,
    fade: Option<PageFade>,
    contact: Option<ContactForm>,
    safe_area: Option<SafeAreaCover>,
}

#[wasm_bindgen]
impl Site {
    /// Number of images the lightbox collected, or 0 when it is not mounted.
    #[wasm_bindgen(getter, js_name = galleryImages)]
    #[must_use]
    pub fn gallery_images(&self) -> usize {
        self.gallery.as_ref().map_or(0, Gallery::len)
    }

    /// Whether the lightbox overlay is currently open.
    #[wasm_bindgen(getter, js_name = lightboxOpen)]
    #[must_use]
    pub fn lightbox_open(&self) -> bool {
        self.gallery.as_ref().is_some_and(Gallery::is_open)
    }

    /// Unbind everything.
    pub fn dispose(self) {
        log::debug!("site: disposed");
    }
}

impl Site {
    /// Bind every behavior against the current document.
    ///
    /// # Errors
    ///
    /// Fails only when there is no window or document at all; individual
    /// behaviors that fail are logged and left unmounted.
    pub fn mount_with(config: &SiteConfig) -> Result<Self, SiteError> {
        let window = dom::window()?;
        let document = dom::document()?;
        let viewport_width = match window.inner_width() {
            Ok(width) => width.as_f64().unwrap_or(0.0),
            Err(err) => {
                log::warn!("site: failed to read viewport width: {err:?}");
                0.0
            }
        };

        Ok(Self {
            nav: settle("nav", nav::mount(&document)),
            gallery: settle("lightbox", gallery::mount(&document, &config.lightbox, viewport_width)),
            lazy: settle("lazy", lazy::mount(&window, &document, &config.lazy)),
            fade: settle("transition", transition::mount(&document, &config.transition)),
            contact: settle("contact", contact::mount(&window, &document, &config.contact)),
            safe_area: settle("safe-area", safe_area::mount(&window, &document, &config.safe_area)),
        })
    }

    /// Names of the behaviors that mounted.
    #[must_use]
    pub fn mounted(&self) -> Vec<&'static str> {
        [
            ("nav", self.nav.is_some()),
            ("lightbox", self.gallery.is_some()),
            ("lazy", self.lazy.is_some()),
            ("transition", self.fade.is_some()),
            ("contact", self.contact.is_some()),
            ("safe-area", self.safe_area.is_some()),
        ]
        .into_iter()
        .filter_map(|(name, on)| on.then_some(name))
        .collect()
    }

    #[must_use]
    pub fn internal_links(&self) -> usize {
        self.fade.as_ref().map_or(0, PageFade::link_count)
    }

    #[must_use]
    pub fn safe_area_covered(&self) -> bool {
        self.safe_area.as_ref().is_some_and(SafeAreaCover::is_covered)
    }
}

fn settle<T>(name: &str, result: Result<Option<T>, SiteError>) -> Option<T> {
    match result {
        Ok(handle) => handle,
        Err(err) => {
            log::warn!("{name}: not mounted: {err}");
            None
        }
    }
}

/// Mount with an explicit JSON config and hand the handle to the caller.
///
/// A site already bound by the start hook is disposed first, so calling this
/// after the module loads swaps the configuration instead of binding every
/// behavior twice.
///
/// # Errors
///
/// Rejects malformed config or a missing document. A malformed config leaves
/// the start-hook site in place.
#[wasm_bindgen]
pub fn mount(config_json: &str) -> Result<Site, JsValue> {
    remount(config_json).map_err(JsValue::from)
}

fn remount(config_json: &str) -> Result<Site, SiteError> {
    let config = SiteConfig::from_json(config_json)?;
    if let Some(previous) = take_started() {
        log::info!("site: replacing start-hook mount");
        previous.dispose();
    }
    let site = Site::mount_with(&config)?;
    log::info!("site: mounted {:?}", site.mounted());
    Ok(site)
}

/// Unbind the site mounted by the start hook, if any.
#[wasm_bindgen(js_name = disposeStarted)]
pub fn dispose_started() {
    if let Some(site) = take_started() {
        site.dispose();
    }
}

fn take_started() -> Option<Site> {
    MOUNTED.with(|slot| slot.borrow_mut().take())
}

/// Module start hook: install the panic hook and logger, read the config
/// from `<body data-folio-config>`, and keep the mounted site for the page
/// lifetime.
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();

    let config = match page_config() {
        Ok(config) => config,
        Err(err) => {
            init_logging(log::Level::Info);
            log::warn!("site: {err}; using defaults");
            SiteConfig::default()
        }
    };
    init_logging(config.log_level());

    match Site::mount_with(&config) {
        Ok(site) => {
            log::info!("site: mounted {:?}", site.mounted());
            MOUNTED.with(|slot| *slot.borrow_mut() = Some(site));
        }
        Err(err) => log::warn!("site: {err}"),
    }
}

fn page_config() -> Result<SiteConfig, SiteError> {
    let document = dom::document()?;
    let text = dom::body(&document)?.get_attribute(CONFIG_ATTR).unwrap_or_default();
    SiteConfig::from_json(&text)
}

fn init_logging(level: log::Level) {
    // A second call finds the logger already installed and only adjusts the level.
    if console_log::init_with_level(level).is_err() {
        log::set_max_level(level.to_level_filter());
    }
}
