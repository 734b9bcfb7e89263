//! Font preference store
//!
//! Single source of truth for the reading-font choice: persists the CSS
//! family stack under [`FONT_PREF_KEY`] and mirrors it into the
//! document-wide `--font-family` custom property, the one style hook the
//! rest of the page consumes. Storage failures degrade to the default font
//! and are never surfaced to the user.
use verdana_core::fonts::FONT_PREF_KEY;
use wasm_bindgen::JsCast;

use crate::dom;

/// Custom property on the root element that all text rendering reads.
pub const FONT_STYLE_VAR: &str = "--font-family";

/// Raw stored family stack, if any.
///
/// Absent, blank, or unreadable values count as "never set". The value is
/// not validated against the catalog; an unrecognized stack is still a
/// stack.
#[must_use]
pub fn load() -> Option<String> {
    let storage = dom::local_storage().ok()?;
    storage
        .get_item(FONT_PREF_KEY)
        .ok()
        .flatten()
        .filter(|value| !value.trim().is_empty())
}

/// Set the live style variable without persisting. Used at load time to
/// resynchronize the visible state with whatever storage holds.
pub fn apply(family: &str) {
    let Some(doc) = dom::document() else {
        return;
    };
    let Some(root) = doc.document_element() else {
        return;
    };
    let Ok(root) = root.dyn_into::<web_sys::HtmlElement>() else {
        return;
    };
    if let Err(err) = root.style().set_property(FONT_STYLE_VAR, family) {
        dom::console_error(&format!(
            "failed to set {FONT_STYLE_VAR}: {}",
            dom::js_error_message(&err)
        ));
    }
}

/// Make `family` the current reading font: apply it, then persist it.
///
/// Selection is a single user-facing operation; callers must never get the
/// chance to apply without persisting or vice versa. When storage is
/// unavailable the applied style still holds for the session.
pub fn save(family: &str) {
    apply(family);
    match dom::local_storage() {
        Ok(storage) => {
            if let Err(err) = storage.set_item(FONT_PREF_KEY, family) {
                log::warn!(
                    "font preference not persisted: {}",
                    dom::js_error_message(&err)
                );
            }
        }
        Err(err) => log::warn!("font preference not persisted: {err}"),
    }
}

/// Startup hook: reapply a previously stored choice before first paint.
pub fn bootstrap() {
    if let Some(saved) = load() {
        apply(&saved);
    }
}
