//! Rendering boundary between the controller and the UI.
//!
//! DESIGN
//! ======
//! The controller never touches the DOM. It issues declarative operations
//! against a [`Surface`] (append, remove by key, replace everything, scroll,
//! input control) and asks a [`Dialogs`] implementation for blocking
//! confirm/alert prompts. Browser builds back these with a Leptos signal and
//! `window.confirm`/`window.alert`; tests use recording doubles.

#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use leptos::prelude::*;

use crate::state::transcript::{EntryKey, ViewEntry};
use crate::state::widget::WidgetView;

/// Declarative view operations issued by the controller.
pub trait Surface {
    fn append(&self, entry: &ViewEntry);
    fn remove(&self, key: EntryKey);
    fn replace_all(&self, entries: &[ViewEntry]);
    /// Scroll the transcript container to its maximum offset.
    fn scroll_to_bottom(&self);

    fn input_value(&self) -> String;
    fn clear_input(&self);
    /// Enable or disable the text field and the send button together.
    fn set_controls_enabled(&self, enabled: bool);
    fn focus_input(&self);
}

/// Blocking user prompts.
pub trait Dialogs {
    /// Yes/no gate. `false` means declined.
    fn confirm(&self, message: &str) -> bool;
    fn alert(&self, message: &str);
}

/// [`Surface`] backed by the reactive [`WidgetView`] signal.
#[derive(Clone, Copy, Debug)]
pub struct SignalSurface {
    view: RwSignal<WidgetView>,
}

impl SignalSurface {
    pub fn new(view: RwSignal<WidgetView>) -> Self {
        Self { view }
    }

    pub fn view(&self) -> RwSignal<WidgetView> {
        self.view
    }
}

impl Surface for SignalSurface {
    fn append(&self, entry: &ViewEntry) {
        self.view.update(|v| v.append(entry.clone()));
    }

    fn remove(&self, key: EntryKey) {
        self.view.update(|v| v.remove(key));
    }

    fn replace_all(&self, entries: &[ViewEntry]) {
        self.view.update(|v| v.replace_all(entries));
    }

    fn scroll_to_bottom(&self) {
        self.view.update(WidgetView::request_scroll);
    }

    fn input_value(&self) -> String {
        self.view.with_untracked(|v| v.draft.clone())
    }

    fn clear_input(&self) {
        self.view.update(|v| v.draft.clear());
    }

    fn set_controls_enabled(&self, enabled: bool) {
        self.view.update(|v| v.controls_enabled = enabled);
    }

    fn focus_input(&self) {
        self.view.update(WidgetView::request_focus);
    }
}

/// `window.confirm` / `window.alert`. Outside the browser every confirm is
/// declined and alerts are only logged.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDialogs;

impl Dialogs for BrowserDialogs {
    fn confirm(&self, message: &str) -> bool {
        #[cfg(feature = "csr")]
        {
            let Some(window) = web_sys::window() else {
                return false;
            };
            match window.confirm_with_message(message) {
                Ok(answer) => answer,
                Err(e) => {
                    log::warn!("confirm prompt failed: {e:?}");
                    false
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::info!("confirm unavailable, declining: {message}");
            false
        }
    }

    fn alert(&self, message: &str) {
        #[cfg(feature = "csr")]
        {
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.alert_with_message(message) {
                    log::warn!("alert failed: {e:?}");
                }
            }
        }
        #[cfg(not(feature = "csr"))]
        {
            log::info!("alert: {message}");
        }
    }
}
