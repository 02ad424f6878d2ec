//! Lightbox state machine: a circular single-image viewer over a fixed list.
//!
//! This module is DOM-free. `LightboxState` owns the image list snapshot and
//! the cursor; every transition returns a [`LightboxAction`] telling the host
//! (see [`crate::gallery`]) what to project onto the overlay. Keeping the
//! transitions here lets the viewer be tested without a browser.
//!
//! States are `Closed` (initial) and `Open`. `open` enters or re-enters
//! `Open` at an index, `close` returns to `Closed`, and `next`/`previous`
//! move the cursor modulo the list length in both directions.

#[cfg(test)]
#[path = "lightbox_test.rs"]
mod lightbox_test;

use serde::Deserialize;

/// One viewable image collected from a gallery item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    pub source: String,
    pub alt_text: String,
}

impl ImageDescriptor {
    #[must_use]
    pub fn new(source: impl Into<String>, alt_text: impl Into<String>) -> Self {
        Self { source: source.into(), alt_text: alt_text.into() }
    }

    /// Resolve the display source: the full-size attribute when present and
    /// non-empty, otherwise the element's current source.
    #[must_use]
    pub fn resolve(full_source: Option<String>, current_source: String, alt_text: String) -> Self {
        let source = full_source.filter(|s| !s.is_empty()).unwrap_or(current_source);
        Self { source, alt_text }
    }
}

/// How the position counter is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterFormat {
    /// `"2 / 7"`.
    #[default]
    Plain,
    /// `"02 / 07"`.
    Padded,
}

impl CounterFormat {
    /// Render a one-based `current` of `total`.
    #[must_use]
    pub fn format(self, current: usize, total: usize) -> String {
        match self {
            Self::Plain => format!("{current} / {total}"),
            Self::Padded => format!("{current:02} / {total:02}"),
        }
    }
}

/// Where the counter sits relative to the image inside the overlay.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CounterPlacement {
    #[default]
    AfterImage,
    BeforeImage,
}

/// What the overlay should currently show.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView {
    pub source: String,
    pub alt_text: String,
    pub counter: String,
}

/// Instructions returned by transitions for the host to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxAction {
    /// Nothing changed.
    None,
    /// Render `view` and make the overlay visible; lock page scrolling.
    Show(LightboxView),
    /// Render `view` without touching visibility.
    Render(LightboxView),
    /// Hide the overlay and restore page scrolling.
    Hide,
}

/// Keys the viewer reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Escape,
    ArrowLeft,
    ArrowRight,
}

impl LightboxKey {
    /// Map a `KeyboardEvent.key` value.
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Self::Escape),
            "ArrowLeft" => Some(Self::ArrowLeft),
            "ArrowRight" => Some(Self::ArrowRight),
            _ => None,
        }
    }
}

/// Image list snapshot, cursor and open flag.
///
/// Invariant: `cursor < items.len()` whenever `items` is non-empty. With no
/// items the cursor stays at 0 and every transition is a no-op.
#[derive(Debug, Clone, Default)]
pub struct LightboxState {
    items: Vec<ImageDescriptor>,
    cursor: usize,
    is_open: bool,
    format: CounterFormat,
}

impl LightboxState {
    #[must_use]
    pub fn new(items: Vec<ImageDescriptor>, format: CounterFormat) -> Self {
        Self { items, cursor: 0, is_open: false, format }
    }

    // --- Queries ---

    #[must_use]
    pub fn items(&self) -> &[ImageDescriptor] {
        &self.items
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// The image and counter at the cursor, or `None` for an empty gallery.
    #[must_use]
    pub fn view(&self) -> Option<LightboxView> {
        let item = self.items.get(self.cursor)?;
        Some(LightboxView {
            source: item.source.clone(),
            alt_text: item.alt_text.clone(),
            counter: self.format.format(self.cursor + 1, self.items.len()),
        })
    }

    // --- Transitions ---

    /// Open at `index`. Out-of-range indices, including any index into an
    /// empty gallery, leave the state untouched.
    pub fn open(&mut self, index: usize) -> LightboxAction {
        if index >= self.items.len() {
            return LightboxAction::None;
        }
        self.cursor = index;
        self.is_open = true;
        self.view().map_or(LightboxAction::None, LightboxAction::Show)
    }

    /// Close the viewer. Closing while closed is a no-op.
    pub fn close(&mut self) -> LightboxAction {
        if !self.is_open {
            return LightboxAction::None;
        }
        self.is_open = false;
        LightboxAction::Hide
    }

    /// Step forward one image, wrapping from the last to the first.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> LightboxAction {
        let len = self.items.len();
        if len == 0 {
            return LightboxAction::None;
        }
        self.cursor = (self.cursor + 1) % len;
        self.render()
    }

    /// Step back one image, wrapping from the first to the last.
    pub fn previous(&mut self) -> LightboxAction {
        let len = self.items.len();
        if len == 0 {
            return LightboxAction::None;
        }
        self.cursor = (self.cursor + len - 1) % len;
        self.render()
    }

    /// Keyboard dispatch. Keys are ignored entirely while closed.
    pub fn handle_key(&mut self, key: LightboxKey) -> LightboxAction {
        if !self.is_open {
            return LightboxAction::None;
        }
        match key {
            LightboxKey::Escape => self.close(),
            LightboxKey::ArrowLeft => self.previous(),
            LightboxKey::ArrowRight => self.next(),
        }
    }

    fn render(&self) -> LightboxAction {
        self.view().map_or(LightboxAction::None, LightboxAction::Render)
    }
}
