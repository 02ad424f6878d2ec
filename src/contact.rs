//! Contact form submit-button loading state.
//!
//! On submit the button's label and icon swap to a loading face. The form
//! submission itself is untouched. When the page comes back from the
//! back/forward cache the original face is restored, otherwise the button
//! would still read "Sending...".

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, PageTransitionEvent, Window};

use crate::config::ContactConfig;
use crate::consts::{CONTACT_FORM_SELECTOR, SPINNER_SVG, SUBMIT_BUTTON_SELECTOR, SUBMIT_LOADING_CLASS};
use crate::dom::{self, Listener};
use crate::error::SiteError;

/// What the submit button should display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonFace {
    pub label: String,
    pub icon_html: String,
    pub loading: bool,
}

/// Idle and loading faces of the submit button plus which one is showing.
#[derive(Debug, Clone)]
pub struct SubmitButton {
    idle: ButtonFace,
    busy: ButtonFace,
    loading: bool,
}

impl SubmitButton {
    #[must_use]
    pub fn new(label: String, icon_html: String, loading_label: &str) -> Self {
        Self {
            idle: ButtonFace { label, icon_html, loading: false },
            busy: ButtonFace { label: loading_label.to_owned(), icon_html: SPINNER_SVG.to_owned(), loading: true },
            loading: false,
        }
    }

    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Switch to the loading face. `None` if already loading.
    pub fn submit(&mut self) -> Option<ButtonFace> {
        if self.loading {
            return None;
        }
        self.loading = true;
        Some(self.busy.clone())
    }

    /// Switch back to the idle face. `None` if not loading.
    pub fn restore(&mut self) -> Option<ButtonFace> {
        if !self.loading {
            return None;
        }
        self.loading = false;
        Some(self.idle.clone())
    }
}

/// Bound submit and page-show handlers.
pub struct ContactForm {
    _listeners: [Listener; 2],
}

/// Bind the loading state to `.contact__form` / `.btn-submit`. Returns
/// `Ok(None)` unless the form, the button, and the button's `<span>` label
/// and `<svg>` icon all exist.
///
/// # Errors
///
/// Propagates DOM failures while attaching listeners.
pub fn mount(window: &Window, document: &Document, config: &ContactConfig) -> Result<Option<ContactForm>, SiteError> {
    let (Some(form), Some(button)) = (
        dom::query_document(document, CONTACT_FORM_SELECTOR)?,
        dom::query_document(document, SUBMIT_BUTTON_SELECTOR)?,
    ) else {
        log::debug!("contact: form or submit button absent");
        return Ok(None);
    };
    let (Some(label), Some(icon)) = (dom::query(&button, "span")?, dom::query(&button, "svg")?) else {
        log::debug!("contact: submit button lacks label or icon");
        return Ok(None);
    };

    let state = Rc::new(RefCell::new(SubmitButton::new(
        label.text_content().unwrap_or_default(),
        icon.outer_html(),
        &config.loading_label,
    )));

    let submit_state = Rc::clone(&state);
    let submit_button = button.clone();
    let on_submit = Listener::new(&form, "submit", move |_| {
        let face = submit_state.borrow_mut().submit();
        if let Some(face) = face {
            paint(&submit_button, &face);
        }
    })?;

    let on_show = Listener::new(window, "pageshow", move |event| {
        let persisted = event.dyn_ref::<PageTransitionEvent>().is_some_and(PageTransitionEvent::persisted);
        if !persisted {
            return;
        }
        let face = state.borrow_mut().restore();
        if let Some(face) = face {
            paint(&button, &face);
        }
    })?;

    log::debug!("contact: mounted");
    Ok(Some(ContactForm { _listeners: [on_submit, on_show] }))
}

fn paint(button: &Element, face: &ButtonFace) {
    let class_list = button.class_list();
    let toggled = if face.loading {
        class_list.add_1(SUBMIT_LOADING_CLASS)
    } else {
        class_list.remove_1(SUBMIT_LOADING_CLASS)
    };
    if let Err(err) = toggled {
        log::warn!("contact: failed to update button class: {err:?}");
    }

    match dom::query(button, "span") {
        Ok(Some(label)) => label.set_text_content(Some(face.label.as_str())),
        Ok(None) => {}
        Err(err) => log::warn!("contact: {err}"),
    }
    // The icon element is replaced wholesale, so look it up fresh each time.
    match dom::query(button, "svg") {
        Ok(Some(icon)) => icon.set_outer_html(&face.icon_html),
        Ok(None) => {}
        Err(err) => log::warn!("contact: {err}"),
    }
}
