//! Interactive behavior for a static portfolio site, compiled to WebAssembly.
//!
//! The page loads this crate as its only script. On start it binds a handful
//! of independent behaviors to whatever elements the page has; anything whose
//! elements are absent is skipped. The lightbox is the only stateful piece:
//! its state machine lives in [`lightbox`] and is driven by the DOM host in
//! [`gallery`].
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`lightbox`] | Circular image viewer state machine (DOM-free) |
//! | [`gallery`] | Builds the lightbox overlay and wires gallery clicks and keys |
//! | [`nav`] | Mobile navigation toggle |
//! | [`lazy`] | `data-src` image loading via `IntersectionObserver` |
//! | [`transition`] | Page fade on internal link clicks |
//! | [`contact`] | Contact form submit-button loading state |
//! | [`safe_area`] | Notch cover for Apple touch devices |
//! | [`site`] | Mount/dispose orchestration and wasm entry points |
//! | [`config`] | Per-page configuration |
//! | [`dom`] | Shared `web-sys` helpers and owned listeners |
//! | [`consts`] | Selectors, class names and defaults |
//! | [`error`] | [`error::SiteError`] |

pub mod config;
pub mod consts;
pub mod contact;
pub mod dom;
pub mod error;
pub mod gallery;
pub mod lazy;
pub mod lightbox;
pub mod nav;
pub mod safe_area;
pub mod site;
pub mod transition;

pub use site::{Site, mount};
