//! Selectors, class names and numeric defaults shared across behaviors.

// ── Navigation ──────────────────────────────────────────────────

pub const NAV_TOGGLE_SELECTOR: &str = ".nav__toggle";
pub const NAV_MENU_SELECTOR: &str = ".nav__menu";
pub const NAV_TOGGLE_ACTIVE_CLASS: &str = "nav__toggle--active";
pub const NAV_MENU_ACTIVE_CLASS: &str = "nav__menu--active";

// ── Gallery / lightbox ──────────────────────────────────────────

pub const GALLERY_SELECTOR: &str = ".gallery-grid";
pub const GALLERY_ITEM_SELECTOR: &str = ".gallery-grid__item";

/// Attribute holding the display-resolution source of a gallery thumbnail.
pub const FULL_SOURCE_ATTR: &str = "data-full";

pub const LIGHTBOX_CLASS: &str = "lightbox";
pub const LIGHTBOX_ACTIVE_CLASS: &str = "lightbox--active";
pub const LIGHTBOX_CLOSE_SELECTOR: &str = ".lightbox__close";
pub const LIGHTBOX_PREV_SELECTOR: &str = ".lightbox__nav--prev";
pub const LIGHTBOX_NEXT_SELECTOR: &str = ".lightbox__nav--next";
pub const LIGHTBOX_IMAGE_SELECTOR: &str = ".lightbox__content img";
pub const LIGHTBOX_COUNTER_SELECTOR: &str = ".lightbox__counter";

/// Viewports at or below this width (CSS pixels) count as narrow.
pub const NARROW_VIEWPORT_MAX_WIDTH: f64 = 768.0;

// ── Lazy loading ────────────────────────────────────────────────

pub const LAZY_IMAGE_SELECTOR: &str = "img[data-src]";
pub const DEFERRED_SOURCE_ATTR: &str = "data-src";

/// Pre-load margin around the viewport for lazy images.
pub const LAZY_ROOT_MARGIN: &str = "50px 0px";

// ── Page transition ─────────────────────────────────────────────

pub const INTERNAL_LINK_SELECTOR: &str = r#"a[href^="/"], a[href^="./"]"#;
pub const FADED_OPACITY: f64 = 0.5;
pub const FADE_RESTORE_MS: u32 = 300;

// ── Contact form ────────────────────────────────────────────────

pub const CONTACT_FORM_SELECTOR: &str = ".contact__form";
pub const SUBMIT_BUTTON_SELECTOR: &str = ".btn-submit";
pub const SUBMIT_LOADING_CLASS: &str = "is-loading";
pub const SUBMIT_LOADING_LABEL: &str = "Sending...";

/// Spinner icon swapped in for the submit button's icon while sending.
pub const SPINNER_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="M21 12a9 9 0 1 1-6.219-8.56"/></svg>"#;

// ── Safe-area cover ─────────────────────────────────────────────

pub const SAFE_AREA_COVER_CLASS: &str = "safe-area-cover";
pub const SAFE_AREA_THRESHOLD_PX: f64 = 50.0;
pub const SAFE_AREA_FALLBACK_INSET: &str = "44px";
pub const SAFE_AREA_BACKGROUND: &str = "inherit";

/// Keeps a created cover above page content.
pub const SAFE_AREA_Z_INDEX: &str = "1000";

// ── Config ──────────────────────────────────────────────────────

/// `<body>` attribute carrying the JSON site configuration.
pub const CONFIG_ATTR: &str = "data-folio-config";
pub const DEFAULT_LOG_LEVEL: &str = "info";
