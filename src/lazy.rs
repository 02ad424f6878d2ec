//! Deferred image loading.
//!
//! Images carrying `data-src` get their live `src` only once they come within
//! the configured margin of the viewport. Each image is promoted at most once:
//! [`LazyImage`] tracks that per element; settled images leave the pending
//! list and the observer stops watching them.

#[cfg(test)]
#[path = "lazy_test.rs"]
mod lazy_test;

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::{Array, Reflect};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlImageElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, Window};

use crate::config::LazyConfig;
use crate::consts::{DEFERRED_SOURCE_ATTR, LAZY_IMAGE_SELECTOR};
use crate::dom;
use crate::error::SiteError;

/// Load progress of one deferred image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyImage {
    /// Waiting to intersect; holds the deferred source, if any.
    Pending(Option<String>),
    /// Already handled. Further intersections are ignored.
    Done,
}

/// What the observer should do with the element after an intersection event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LazyStep {
    /// Not intersecting, or already done: leave it alone.
    Ignore,
    /// Stop observing without touching the source.
    Unobserve,
    /// Copy this value into `src`, drop `data-src` and stop observing.
    Load(String),
}

impl LazyImage {
    #[must_use]
    pub fn new(deferred: Option<String>) -> Self {
        Self::Pending(deferred)
    }

    /// Advance on an intersection observation.
    pub fn observe(&mut self, is_intersecting: bool) -> LazyStep {
        if !is_intersecting {
            return LazyStep::Ignore;
        }
        match std::mem::replace(self, Self::Done) {
            Self::Pending(Some(source)) if !source.is_empty() => LazyStep::Load(source),
            Self::Pending(_) => LazyStep::Unobserve,
            Self::Done => LazyStep::Ignore,
        }
    }
}

/// Live observer over the page's deferred images. Dropping it disconnects.
pub struct LazyLoader {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for LazyLoader {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Observe every `img[data-src]` currently in the document.
///
/// Without `IntersectionObserver` support the images are loaded immediately
/// and `Ok(None)` is returned, as it is when there are no deferred images.
///
/// # Errors
///
/// Propagates DOM failures while creating the observer.
pub fn mount(window: &Window, document: &Document, config: &LazyConfig) -> Result<Option<LazyLoader>, SiteError> {
    let images = dom::query_all::<HtmlImageElement>(document, LAZY_IMAGE_SELECTOR)?;
    if images.is_empty() {
        log::debug!("lazy: no deferred images");
        return Ok(None);
    }

    if !Reflect::has(window, &JsValue::from_str("IntersectionObserver"))? {
        log::info!("lazy: IntersectionObserver unavailable, loading {} images eagerly", images.len());
        for img in &images {
            apply(img, LazyImage::new(img.get_attribute(DEFERRED_SOURCE_ATTR)).observe(true));
        }
        return Ok(None);
    }

    let pending: Rc<RefCell<Vec<(HtmlImageElement, LazyImage)>>> = Rc::new(RefCell::new(
        images
            .into_iter()
            .map(|img| {
                let state = LazyImage::new(img.get_attribute(DEFERRED_SOURCE_ATTR));
                (img, state)
            })
            .collect(),
    ));

    let pending_cb = Rc::clone(&pending);
    let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let Some(entry) = entry.dyn_ref::<IntersectionObserverEntry>() else {
                continue;
            };
            let target = entry.target();
            let settled = advance(
                &mut *pending_cb.borrow_mut(),
                |img| js_sys::Object::is(img, &target),
                entry.is_intersecting(),
            );
            if let Some((img, step)) = settled {
                observer.unobserve(&target);
                apply(&img, step);
            }
        }
    }) as Box<dyn FnMut(Array, IntersectionObserver)>);

    let options = IntersectionObserverInit::new();
    options.set_root_margin(&config.root_margin);
    let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;
    for (img, _) in pending.borrow().iter() {
        let element: &Element = img;
        observer.observe(element);
    }
    log::debug!("lazy: observing {} images", pending.borrow().len());

    Ok(Some(LazyLoader { observer, _callback: callback }))
}

/// Feed an intersection to the pending entry matching `is_target`. Once the
/// entry settles (loads or is abandoned) it is removed from `pending` and
/// returned with its step; entries still waiting stay put.
pub fn advance<T>(
    pending: &mut Vec<(T, LazyImage)>,
    is_target: impl Fn(&T) -> bool,
    is_intersecting: bool,
) -> Option<(T, LazyStep)> {
    let index = pending.iter().position(|(item, _)| is_target(item))?;
    let step = pending[index].1.observe(is_intersecting);
    if step == LazyStep::Ignore {
        return None;
    }
    let (item, _) = pending.swap_remove(index);
    Some((item, step))
}

fn apply(img: &HtmlImageElement, step: LazyStep) {
    if let LazyStep::Load(source) = step {
        img.set_src(&source);
        if let Err(err) = img.remove_attribute(DEFERRED_SOURCE_ATTR) {
            log::warn!("lazy: failed to clear {DEFERRED_SOURCE_ATTR}: {err:?}");
        }
    }
}
