//! Append-only transcript model.
//!
//! The transcript starts with the welcome sentinel. The first real message
//! removes it; only `reset` brings it back. The typing indicator is a
//! singleton entry with a fixed key. It is appended after the messages that
//! exist when it is shown; anything pushed while it is visible lands after it.

#[cfg(test)]
#[path = "transcript_test.rs"]
mod transcript_test;

use crate::util::markup::format_bot_markup;

/// DOM id of the typing indicator node.
pub const TYPING_INDICATOR_KEY: &str = "typingIndicator";

/// Who authored a message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Origin {
    User,
    Bot,
}

impl Origin {
    /// Class used to frame the message for styling.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Bot => "bot",
        }
    }
}

/// A single transcript message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Message {
    pub text: String,
    pub origin: Origin,
}

impl Message {
    pub fn user(text: impl Into<String>) -> Self {
        Self { text: text.into(), origin: Origin::User }
    }

    pub fn bot(text: impl Into<String>) -> Self {
        Self { text: text.into(), origin: Origin::Bot }
    }

    /// User text stays literal; bot text goes through the markdown-lite pass.
    pub fn rendered(&self) -> RenderedContent {
        match self.origin {
            Origin::User => RenderedContent::Text(self.text.clone()),
            Origin::Bot => RenderedContent::Markup(format_bot_markup(&self.text)),
        }
    }
}

/// How message content is placed into the view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderedContent {
    /// Inserted as a text node; markup-significant characters stay literal.
    Text(String),
    /// Injected as live markup.
    Markup(String),
}

/// Stable identity of a view entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKey {
    Welcome,
    Typing,
    Message(u64),
}

/// One node in the transcript view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewEntry {
    Welcome,
    Typing,
    Message { id: u64, message: Message },
}

impl ViewEntry {
    pub fn key(&self) -> EntryKey {
        match self {
            Self::Welcome => EntryKey::Welcome,
            Self::Typing => EntryKey::Typing,
            Self::Message { id, .. } => EntryKey::Message(*id),
        }
    }
}

/// Ordered transcript entries owned by the controller.
#[derive(Clone, Debug)]
pub struct Transcript {
    entries: Vec<ViewEntry>,
    next_id: u64,
}

impl Default for Transcript {
    fn default() -> Self {
        Self { entries: vec![ViewEntry::Welcome], next_id: 0 }
    }
}

impl Transcript {
    pub fn entries(&self) -> &[ViewEntry] {
        &self.entries
    }

    /// Messages in order, skipping the sentinel and the indicator.
    pub fn messages(&self) -> impl Iterator<Item = &Message> {
        self.entries.iter().filter_map(|entry| match entry {
            ViewEntry::Message { message, .. } => Some(message),
            ViewEntry::Welcome | ViewEntry::Typing => None,
        })
    }

    pub fn has_welcome(&self) -> bool {
        self.entries.contains(&ViewEntry::Welcome)
    }

    pub fn has_typing(&self) -> bool {
        self.entries.contains(&ViewEntry::Typing)
    }

    /// Drop the welcome sentinel. Returns `true` if it was present.
    pub fn remove_welcome(&mut self) -> bool {
        self.remove(EntryKey::Welcome)
    }

    /// Append a message and return the entry that was added.
    pub fn push(&mut self, message: Message) -> ViewEntry {
        let entry = ViewEntry::Message { id: self.next_id, message };
        self.next_id += 1;
        self.entries.push(entry.clone());
        entry
    }

    /// Add the typing indicator unless one already exists.
    pub fn show_typing(&mut self) -> Option<ViewEntry> {
        if self.has_typing() {
            return None;
        }
        self.entries.push(ViewEntry::Typing);
        Some(ViewEntry::Typing)
    }

    /// Remove the typing indicator. Returns `true` if it was present.
    pub fn hide_typing(&mut self) -> bool {
        self.remove(EntryKey::Typing)
    }

    /// Replace everything with the welcome sentinel.
    pub fn reset(&mut self) -> &[ViewEntry] {
        self.entries.clear();
        self.entries.push(ViewEntry::Welcome);
        &self.entries
    }

    fn remove(&mut self, key: EntryKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|entry| entry.key() != key);
        self.entries.len() != before
    }
}
