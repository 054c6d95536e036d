//! Browser drag/drop suppression.
//!
//! Dropping a file onto a page makes the browser navigate away from the
//! application to display the file. [`DragDropGuard`] cancels that default
//! action for the lifetime of the guard.

use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue, closure::Closure};

/// Listener registration errors.
#[derive(Debug, Error)]
pub enum GuardError {
    #[error("no global window")]
    NoWindow,
    #[error("failed to register listener: {0}")]
    Register(String),
}

impl GuardError {
    fn register(value: JsValue) -> Self {
        Self::Register(format!("{value:?}"))
    }
}

/// Scoped suppression of `dragover`/`drop` default actions on `window`.
///
/// Both listeners are registered by [`install`](Self::install) and removed
/// when the guard is dropped. Installing twice yields two guards with
/// independent listener pairs; registration is not deduplicated.
pub struct DragDropGuard {
    window: web_sys::Window,
    dragover: Closure<dyn Fn(web_sys::DragEvent)>,
    drop: Closure<dyn Fn(web_sys::DragEvent)>,
}

impl DragDropGuard {
    /// Register the `dragover` and `drop` listeners, each unconditionally
    /// cancelling the event's default action.
    ///
    /// # Errors
    ///
    /// Returns [`GuardError::NoWindow`] outside a browser context and
    /// [`GuardError::Register`] when the event target rejects a listener.
    pub fn install() -> Result<Self, GuardError> {
        let window = web_sys::window().ok_or(GuardError::NoWindow)?;

        let dragover = Closure::<dyn Fn(web_sys::DragEvent)>::new(|event: web_sys::DragEvent| {
            event.prevent_default();
        });
        let drop = Closure::<dyn Fn(web_sys::DragEvent)>::new(|event: web_sys::DragEvent| {
            event.prevent_default();
        });

        window
            .add_event_listener_with_callback("dragover", dragover.as_ref().unchecked_ref())
            .map_err(GuardError::register)?;
        if let Err(e) =
            window.add_event_listener_with_callback("drop", drop.as_ref().unchecked_ref())
        {
            // Partial installs leave nothing behind.
            let _ = window
                .remove_event_listener_with_callback("dragover", dragover.as_ref().unchecked_ref());
            return Err(GuardError::register(e));
        }

        Ok(Self {
            window,
            dragover,
            drop,
        })
    }
}

impl Drop for DragDropGuard {
    fn drop(&mut self) {
        let _ = self
            .window
            .remove_event_listener_with_callback("dragover", self.dragover.as_ref().unchecked_ref());
        let _ = self
            .window
            .remove_event_listener_with_callback("drop", self.drop.as_ref().unchecked_ref());
    }
}
