//! Reactive view state the `ChatWidget` component renders from.
//!
//! DESIGN
//! ======
//! This is the mirror side of the rendering boundary: the controller issues
//! append/remove/replace operations through [`crate::surface::SignalSurface`]
//! and this struct applies them. Scroll and focus requests are sequence
//! counters so effects can react to repeated requests.

#[cfg(test)]
#[path = "widget_test.rs"]
mod widget_test;

use super::transcript::{EntryKey, ViewEntry};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WidgetView {
    pub entries: Vec<ViewEntry>,
    pub draft: String,
    pub controls_enabled: bool,
    pub scroll_seq: u64,
    pub focus_seq: u64,
}

impl Default for WidgetView {
    fn default() -> Self {
        Self {
            entries: vec![ViewEntry::Welcome],
            draft: String::new(),
            controls_enabled: true,
            scroll_seq: 0,
            focus_seq: 0,
        }
    }
}

impl WidgetView {
    pub fn append(&mut self, entry: ViewEntry) {
        self.entries.push(entry);
    }

    pub fn remove(&mut self, key: EntryKey) {
        self.entries.retain(|entry| entry.key() != key);
    }

    pub fn replace_all(&mut self, entries: &[ViewEntry]) {
        self.entries = entries.to_vec();
    }

    pub fn request_scroll(&mut self) {
        self.scroll_seq = self.scroll_seq.wrapping_add(1);
    }

    pub fn request_focus(&mut self) {
        self.focus_seq = self.focus_seq.wrapping_add(1);
    }
}
