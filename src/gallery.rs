//! DOM host for the lightbox.
//!
//! Scans `.gallery-grid__item` elements once at mount, builds the overlay,
//! and wires clicks and keys into [`LightboxState`]. Each transition's
//! [`LightboxAction`] is projected onto the overlay by [`Overlay::apply`].

#[cfg(test)]
#[path = "gallery_test.rs"]
mod gallery_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, HtmlElement, HtmlImageElement, KeyboardEvent};

use crate::config::LightboxConfig;
use crate::consts::{
    FULL_SOURCE_ATTR, GALLERY_ITEM_SELECTOR, GALLERY_SELECTOR, LIGHTBOX_ACTIVE_CLASS, LIGHTBOX_CLASS,
    LIGHTBOX_CLOSE_SELECTOR, LIGHTBOX_COUNTER_SELECTOR, LIGHTBOX_IMAGE_SELECTOR, LIGHTBOX_NEXT_SELECTOR,
    LIGHTBOX_PREV_SELECTOR,
};
use crate::dom::{self, Listener};
use crate::error::SiteError;
use crate::lightbox::{CounterPlacement, ImageDescriptor, LightboxAction, LightboxKey, LightboxState, LightboxView};

/// Inner HTML of the overlay element.
#[must_use]
pub fn overlay_markup(placement: CounterPlacement) -> String {
    const IMAGE: &str = r#"<img src="" alt="">"#;
    const COUNTER: &str = r#"<div class="lightbox__counter"></div>"#;
    let content = match placement {
        CounterPlacement::AfterImage => format!("{IMAGE}{COUNTER}"),
        CounterPlacement::BeforeImage => format!("{COUNTER}{IMAGE}"),
    };
    format!(
        concat!(
            r#"<button class="lightbox__close" aria-label="Close">&times;</button>"#,
            r#"<button class="lightbox__nav lightbox__nav--prev" aria-label="Previous">&larr;</button>"#,
            r#"<button class="lightbox__nav lightbox__nav--next" aria-label="Next">&rarr;</button>"#,
            r#"<div class="lightbox__content">{}</div>"#,
        ),
        content
    )
}

/// The overlay's live elements.
struct Overlay {
    root: HtmlElement,
    image: HtmlImageElement,
    counter: Element,
    body: HtmlElement,
}

impl Overlay {
    fn build(document: &Document, placement: CounterPlacement) -> Result<Self, SiteError> {
        let body = dom::body(document)?;
        let root = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| SiteError::Js("overlay is not an HtmlElement".to_owned()))?;
        root.set_class_name(LIGHTBOX_CLASS);
        root.set_inner_html(&overlay_markup(placement));
        body.append_child(&root)?;

        let image = required(&root, LIGHTBOX_IMAGE_SELECTOR)?
            .dyn_into::<HtmlImageElement>()
            .map_err(|_| SiteError::Js("overlay image is not an <img>".to_owned()))?;
        let counter = required(&root, LIGHTBOX_COUNTER_SELECTOR)?;
        Ok(Self { root, image, counter, body })
    }

    fn apply(&self, action: &LightboxAction) {
        match action {
            LightboxAction::None => {}
            LightboxAction::Show(view) => {
                self.render(view);
                if let Err(err) = self.root.class_list().add_1(LIGHTBOX_ACTIVE_CLASS) {
                    log::warn!("lightbox: failed to show overlay: {err:?}");
                }
                dom::set_style(&self.body, "overflow", "hidden");
            }
            LightboxAction::Render(view) => self.render(view),
            LightboxAction::Hide => {
                if let Err(err) = self.root.class_list().remove_1(LIGHTBOX_ACTIVE_CLASS) {
                    log::warn!("lightbox: failed to hide overlay: {err:?}");
                }
                dom::clear_style(&self.body, "overflow");
            }
        }
    }

    fn render(&self, view: &LightboxView) {
        self.image.set_src(&view.source);
        self.image.set_alt(&view.alt_text);
        self.counter.set_text_content(Some(view.counter.as_str()));
    }
}

fn required(root: &Element, selector: &str) -> Result<Element, SiteError> {
    dom::query(root, selector)?.ok_or_else(|| SiteError::Js(format!("overlay missing {selector}")))
}

/// A mounted lightbox. Dropping it detaches all listeners and removes the
/// overlay from the page.
pub struct Gallery {
    state: Rc<RefCell<LightboxState>>,
    overlay: Rc<Overlay>,
    _listeners: Vec<Listener>,
}

impl Gallery {
    /// Number of images collected at mount.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().is_empty()
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.state.borrow().is_open()
    }
}

impl Drop for Gallery {
    fn drop(&mut self) {
        let action = self.state.borrow_mut().close();
        self.overlay.apply(&action);
        self.overlay.root.remove();
    }
}

/// Mount the lightbox over the page's gallery.
///
/// Returns `Ok(None)` when the page has no gallery, or when the viewport is
/// narrow at mount and the config keeps the lightbox off there.
///
/// # Errors
///
/// Propagates DOM failures while building the overlay or attaching listeners.
pub fn mount(document: &Document, config: &LightboxConfig, viewport_width: f64) -> Result<Option<Gallery>, SiteError> {
    if dom::query_document(document, GALLERY_SELECTOR)?.is_none() {
        log::debug!("lightbox: no gallery on page");
        return Ok(None);
    }
    if !config.enabled_for_width(viewport_width) {
        log::debug!("lightbox: disabled at viewport width {viewport_width}");
        return Ok(None);
    }

    // Items without an <img> are skipped so indices stay aligned with descriptors.
    let mut items = Vec::new();
    let mut descriptors = Vec::new();
    for item in dom::query_all::<Element>(document, GALLERY_ITEM_SELECTOR)? {
        let Some(img) = dom::query(&item, "img")?.and_then(|el| el.dyn_ref::<HtmlImageElement>().cloned()) else {
            continue;
        };
        descriptors.push(ImageDescriptor::resolve(img.get_attribute(FULL_SOURCE_ATTR), img.src(), img.alt()));
        items.push(item);
    }

    let state = Rc::new(RefCell::new(LightboxState::new(descriptors, config.counter_format)));
    let overlay = Rc::new(Overlay::build(document, config.counter_placement)?);
    let mut listeners = Vec::with_capacity(items.len() + 5);

    for (index, item) in items.iter().enumerate() {
        listeners.push(bind(&state, &overlay, item, "click", move |lb, _| lb.open(index))?);
    }

    let close = required(&overlay.root, LIGHTBOX_CLOSE_SELECTOR)?;
    let prev = required(&overlay.root, LIGHTBOX_PREV_SELECTOR)?;
    let next = required(&overlay.root, LIGHTBOX_NEXT_SELECTOR)?;
    listeners.push(bind(&state, &overlay, &close, "click", |lb, _| lb.close())?);
    listeners.push(bind(&state, &overlay, &prev, "click", |lb, _| lb.previous())?);
    listeners.push(bind(&state, &overlay, &next, "click", |lb, _| lb.next())?);

    let backdrop = overlay.root.clone();
    listeners.push(bind(&state, &overlay, &overlay.root, "click", move |lb, event| {
        match event.target() {
            Some(target) if js_sys::Object::is(&target, &backdrop) => lb.close(),
            _ => LightboxAction::None,
        }
    })?);

    listeners.push(bind(&state, &overlay, document, "keydown", |lb, event| {
        event
            .dyn_ref::<KeyboardEvent>()
            .and_then(|key| LightboxKey::from_key(&key.key()))
            .map_or(LightboxAction::None, |key| lb.handle_key(key))
    })?);

    log::info!("lightbox: mounted with {} images", items.len());
    Ok(Some(Gallery { state, overlay, _listeners: listeners }))
}

/// Attach a listener that runs `transition` against the state and projects
/// the resulting action onto the overlay.
fn bind<F>(
    state: &Rc<RefCell<LightboxState>>,
    overlay: &Rc<Overlay>,
    target: &web_sys::EventTarget,
    event: &'static str,
    mut transition: F,
) -> Result<Listener, SiteError>
where
    F: FnMut(&mut LightboxState, &Event) -> LightboxAction + 'static,
{
    let state = Rc::clone(state);
    let overlay = Rc::clone(overlay);
    Listener::new(target, event, move |event| {
        let action = transition(&mut state.borrow_mut(), &event);
        overlay.apply(&action);
    })
}
