//! Thin helpers over `web-sys` shared by the behavior modules.
//!
//! Listeners are owned values: a [`Listener`] detaches itself from its target
//! when dropped, so a behavior handle holding its listeners is its own
//! disposer.

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{AddEventListenerOptions, Document, Element, Event, EventTarget, HtmlElement, Window};

use crate::error::SiteError;

/// The global window.
///
/// # Errors
///
/// [`SiteError::NoWindow`] outside a browser main thread.
pub fn window() -> Result<Window, SiteError> {
    web_sys::window().ok_or(SiteError::NoWindow)
}

/// The window's document.
///
/// # Errors
///
/// [`SiteError::NoWindow`] or [`SiteError::NoDocument`].
pub fn document() -> Result<Document, SiteError> {
    window()?.document().ok_or(SiteError::NoDocument)
}

/// The document body.
///
/// # Errors
///
/// [`SiteError::NoBody`] before the body is parsed.
pub fn body(document: &Document) -> Result<HtmlElement, SiteError> {
    document.body().ok_or(SiteError::NoBody)
}

/// First element under `root` matching `selector`.
///
/// # Errors
///
/// Propagates a selector syntax error from the browser.
pub fn query(root: &Element, selector: &str) -> Result<Option<Element>, SiteError> {
    Ok(root.query_selector(selector)?)
}

/// First element in the document matching `selector`.
///
/// # Errors
///
/// Propagates a selector syntax error from the browser.
pub fn query_document(document: &Document, selector: &str) -> Result<Option<Element>, SiteError> {
    Ok(document.query_selector(selector)?)
}

/// All elements in the document matching `selector`, in document order,
/// narrowed to `T`. Nodes that are not a `T` are skipped.
///
/// # Errors
///
/// Propagates a selector syntax error from the browser.
pub fn query_all<T: JsCast + Clone>(document: &Document, selector: &str) -> Result<Vec<T>, SiteError> {
    let list = document.query_selector_all(selector)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_ref::<T>().cloned())
        .collect())
}

/// An event listener that stays attached for as long as the value lives.
pub struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

impl Listener {
    /// Attach `handler` to `event` on `target`.
    ///
    /// # Errors
    ///
    /// Propagates a failure from `addEventListener`.
    pub fn new<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        Ok(Self { target: target.clone(), event, callback })
    }

    /// Attach a passive listener; the handler may not cancel the event.
    ///
    /// # Errors
    ///
    /// Propagates a failure from `addEventListener`.
    pub fn passive<F>(target: &EventTarget, event: &'static str, handler: F) -> Result<Self, SiteError>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        let options = AddEventListenerOptions::new();
        options.set_passive(true);
        target.add_event_listener_with_callback_and_add_event_listener_options(
            event,
            callback.as_ref().unchecked_ref(),
            &options,
        )?;
        Ok(Self { target: target.clone(), event, callback })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach {} listener: {:?}", self.event, err);
        }
    }
}

/// Set an inline style property, logging rather than failing.
pub fn set_style(element: &HtmlElement, property: &str, value: &str) {
    if let Err(err) = element.style().set_property(property, value) {
        log::warn!("failed to set style {property}: {err:?}");
    }
}

/// Remove an inline style property, logging rather than failing.
pub fn clear_style(element: &HtmlElement, property: &str) {
    if let Err(err) = element.style().remove_property(property) {
        log::warn!("failed to clear style {property}: {err:?}");
    }
}
