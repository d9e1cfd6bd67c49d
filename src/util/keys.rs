//! Keyboard handling for the message input.

#[cfg(test)]
#[path = "keys_test.rs"]
mod keys_test;

/// What a keydown in the message input should do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    /// Submit the draft; the default action must be suppressed.
    Send,
    /// Shift+Enter: keep the default action so a line break is inserted.
    InsertNewline,
    /// Not ours.
    Passthrough,
}

/// Classify a keydown by its `key` value and whether Shift is held.
pub fn classify_key(key: &str, shift: bool) -> KeyIntent {
    match (key, shift) {
        ("Enter", false) => KeyIntent::Send,
        ("Enter", true) => KeyIntent::InsertNewline,
        _ => KeyIntent::Passthrough,
    }
}
