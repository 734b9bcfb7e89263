//! Verdana core models
//!
//! Platform-agnostic building blocks for the Verdana informational site:
//! the accessibility font catalog and the toast visibility state machine.
//! This crate has no UI or browser dependencies; the web crate binds these
//! models to the DOM.

pub mod fonts;
pub mod toast;

pub use fonts::{CatalogError, FONT_PREF_KEY, FontCatalog, FontChoice};
pub use toast::{DEFAULT_TOAST_DURATION_MS, EXIT_GRACE_MS, ToastKind, ToastPhase, ToastSignal};
