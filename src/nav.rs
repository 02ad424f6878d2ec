//! Mobile navigation toggle.

use web_sys::{Document, Element};

use crate::consts::{NAV_MENU_ACTIVE_CLASS, NAV_MENU_SELECTOR, NAV_TOGGLE_ACTIVE_CLASS, NAV_TOGGLE_SELECTOR};
use crate::dom::{self, Listener};
use crate::error::SiteError;

/// A bound nav toggle; dropping it unbinds the click handler.
pub struct NavToggle {
    _listener: Listener,
}

/// Bind the toggle button to flip the active class on itself and the menu.
/// Needs both `.nav__toggle` and `.nav__menu`; otherwise returns `Ok(None)`.
///
/// # Errors
///
/// Propagates DOM failures while attaching the listener.
pub fn mount(document: &Document) -> Result<Option<NavToggle>, SiteError> {
    let (Some(toggle), Some(menu)) = (
        dom::query_document(document, NAV_TOGGLE_SELECTOR)?,
        dom::query_document(document, NAV_MENU_SELECTOR)?,
    ) else {
        log::debug!("nav: toggle or menu absent");
        return Ok(None);
    };

    let button = toggle.clone();
    let listener = Listener::new(&toggle, "click", move |_| {
        flip(&menu, NAV_MENU_ACTIVE_CLASS);
        flip(&button, NAV_TOGGLE_ACTIVE_CLASS);
    })?;
    log::debug!("nav: mounted");
    Ok(Some(NavToggle { _listener: listener }))
}

fn flip(element: &Element, class: &str) {
    if let Err(err) = element.class_list().toggle(class) {
        log::warn!("nav: failed to toggle {class}: {err:?}");
    }
}
