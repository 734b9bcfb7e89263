//! Browser plumbing shared by components, the preference store, and the
//! wasm test suite. Everything here degrades to a no-op outside the
//! browser so the crate can be server-rendered in native tests.
use js_sys::{Function, Promise};
use thiserror::Error;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, Storage, Window};

#[derive(Debug, Error)]
pub enum DomError {
    #[error("browser window unavailable")]
    NoWindow,
    #[error("localStorage unavailable: {0}")]
    StorageDenied(String),
}

/// Retrieve the global `window` object, or `None` outside the browser.
#[must_use]
pub fn window() -> Option<Window> {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        None
    }
}

/// Retrieve the document object for DOM interactions.
#[must_use]
pub fn document() -> Option<Document> {
    window().and_then(|win| win.document())
}

/// Convert a JavaScript value into a readable string for error reporting.
#[must_use]
pub fn js_error_message(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|err| err.message().into())
        })
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Log an error message to the browser console.
pub fn console_error(message: &str) {
    #[cfg(target_arch = "wasm32")]
    web_sys::console::error_1(&JsValue::from(message));
    #[cfg(not(target_arch = "wasm32"))]
    log::error!("{message}");
}

/// Access the browser `localStorage` handle.
///
/// # Errors
/// Returns an error outside the browser or when storage access is denied
/// (private browsing, storage disabled by policy).
pub fn local_storage() -> Result<Storage, DomError> {
    let win = window().ok_or(DomError::NoWindow)?;
    win.local_storage()
        .map_err(|err| DomError::StorageDenied(js_error_message(&err)))?
        .ok_or_else(|| DomError::StorageDenied("storage is disabled".to_string()))
}

/// Cancellable wrapper around `setTimeout`.
///
/// Dropping the timer clears the timeout and drops the closure, so a timer
/// owned by an effect cleanup can never fire against a stale instance.
pub struct Timer {
    id: i32,
    _closure: Closure<dyn FnMut()>,
}

impl Timer {
    /// Schedule `callback` once after `delay_ms`. Returns `None` outside
    /// the browser or when the timeout cannot be registered.
    pub fn schedule(delay_ms: u32, callback: impl FnOnce() + 'static) -> Option<Self> {
        let win = window()?;
        let mut slot = Some(callback);
        let closure = Closure::wrap(Box::new(move || {
            if let Some(f) = slot.take() {
                f();
            }
        }) as Box<dyn FnMut()>);
        let id = win
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                i32::try_from(delay_ms).unwrap_or(i32::MAX),
            )
            .ok()?;
        Some(Self {
            id,
            _closure: closure,
        })
    }
}

impl Drop for Timer {
    fn drop(&mut self) {
        if let Some(win) = window() {
            win.clear_timeout_with_handle(self.id);
        }
    }
}

/// Yield execution for the requested number of milliseconds.
///
/// # Errors
/// Returns an error outside the browser or if the timer cannot be
/// scheduled.
#[allow(clippy::future_not_send)] // Wasm futures rely on `JsFuture`, which is not `Send`.
pub async fn sleep_ms(duration_ms: i32) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("window unavailable"))?;
    let mut resolve_slot: Option<Function> = None;
    let promise = Promise::new(&mut |resolve, _reject| {
        resolve_slot = Some(resolve);
    });

    let resolve =
        resolve_slot.ok_or_else(|| JsValue::from_str("resolve function should be set"))?;
    let closure = Closure::once(move || {
        let _ = resolve.call0(&JsValue::UNDEFINED);
    });

    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        duration_ms,
    )?;
    closure.forget();

    JsFuture::from(promise).await?;
    Ok(())
}
